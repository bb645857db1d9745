// In-memory session state: the loaded text and the processing action over it.
use anyhow::{anyhow, bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::charts;
use crate::config::Settings;
use crate::nlp;
use crate::report;

/// Paths and headline numbers from one processing run.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub sentence_count: usize,
    pub word_count: usize,
    pub report_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub histogram_path: PathBuf,
    pub pie_chart_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct Session {
    text: String,
    source: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded text with the contents of `path`.
    /// On failure the previous text is kept.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let text = read_file_content(path)?;
        tracing::info!(path = %path.display(), chars = text.chars().count(), "loaded input file");
        self.text = text;
        self.source = Some(path.to_path_buf());
        Ok(self.text.len())
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Analyze the loaded text and write the report and charts.
    pub fn process(&self, settings: &Settings) -> Result<ProcessOutput> {
        if !self.has_text() {
            bail!("no input text loaded");
        }

        fs::create_dir_all(&settings.output_dir).with_context(|| {
            format!("failed to create output directory {}", settings.output_dir.display())
        })?;

        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")?
                .progress_chars("=>-"),
        );
        let analysis = nlp::analyze_with_progress(&self.text, &pb);
        pb.finish_and_clear();

        let report_path = report::write_report(&analysis, settings)?;
        let json_path = if settings.write_json {
            Some(report::write_json_report(&analysis, settings)?)
        } else {
            None
        };

        let with_text = charts::init_fonts(settings.font_path.as_deref());
        let histogram_path = settings.histogram_path();
        charts::word_frequency_chart(
            &analysis.frequency,
            settings.chart_words,
            &histogram_path,
            with_text,
        )?;
        let pie_chart_path = settings.pie_chart_path();
        charts::entity_pie_chart(&analysis.entity_label_counts(), &pie_chart_path, with_text)?;

        Ok(ProcessOutput {
            sentence_count: analysis.sentence_count(),
            word_count: analysis.word_count(),
            report_path,
            json_path,
            histogram_path,
            pie_chart_path,
        })
    }
}

/// Whether an error chain bottoms out in a missing file.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

fn read_file_content(p: &Path) -> Result<String> {
    let bytes = fs::read(p).with_context(|| format!("failed to read {}", p.display()))?;
    let ext = p.extension().and_then(|s| s.to_str()).unwrap_or("");
    if ext.eq_ignore_ascii_case("pdf") {
        pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| anyhow!("PDF extraction failed: {}", e))
    } else {
        String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8 text", p.display()))
    }
}
