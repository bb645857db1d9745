// Plain-text and JSON analysis reports.
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::PathBuf;

use crate::config::Settings;
use crate::nlp::{Analysis, Entity, EntityLabel};

#[derive(Serialize)]
struct WordCount<'a> {
    word: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct TagCount {
    tag: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct ReportSummary<'a> {
    sentence_count: usize,
    word_count: usize,
    distinct_words: usize,
    top_words: Vec<WordCount<'a>>,
    pos_tags: Vec<TagCount>,
    entities: &'a [Entity],
}

pub fn render(analysis: &Analysis, settings: &Settings) -> String {
    let mut report = String::from("Text Analysis Report\n\n");
    report.push_str(&format!("Number of sentences: {}\n", analysis.sentence_count()));
    report.push_str(&format!("Number of words: {}\n", analysis.word_count()));
    report.push_str(&format!("Distinct words: {}\n\n", analysis.frequency.distinct()));

    report.push_str("Word Frequency:\n");
    let top = analysis.frequency.most_common(settings.top_words);
    if analysis.frequency.is_empty() {
        report.push_str("  (no words)\n");
    }
    for (rank, (word, count)) in top.iter().enumerate() {
        report.push_str(&format!("  {:>2}. {}: {}\n", rank + 1, word, count));
    }

    report.push_str("\nPart-of-Speech Tags:\n");
    let tags = analysis.pos_counts();
    if tags.is_empty() {
        report.push_str("  (none)\n");
    }
    for (tag, count) in tags {
        report.push_str(&format!("  {:<5} {}\n", tag.as_str(), count));
    }

    report.push_str("\nNamed Entities:\n");
    let grouped = group_entities(&analysis.entities);
    if grouped.is_empty() {
        report.push_str("  (none found)\n");
    }
    for (label, names) in grouped {
        report.push_str(&format!("  {} ({}): {}\n", label, names.len(), names.join(", ")));
    }

    report
}

/// Write the text report, replacing any previous one.
pub fn write_report(analysis: &Analysis, settings: &Settings) -> Result<PathBuf> {
    let path = settings.report_path();
    fs::write(&path, render(analysis, settings))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote text report");
    Ok(path)
}

pub fn write_json_report(analysis: &Analysis, settings: &Settings) -> Result<PathBuf> {
    let summary = ReportSummary {
        sentence_count: analysis.sentence_count(),
        word_count: analysis.word_count(),
        distinct_words: analysis.frequency.distinct(),
        top_words: analysis
            .frequency
            .most_common(settings.top_words)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect(),
        pos_tags: analysis
            .pos_counts()
            .into_iter()
            .map(|(tag, count)| TagCount {
                tag: tag.as_str(),
                count,
            })
            .collect(),
        entities: &analysis.entities,
    };

    let path = settings.json_report_path();
    let fout = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(fout, &summary)?;
    tracing::info!(path = %path.display(), "wrote JSON report");
    Ok(path)
}

fn group_entities(entities: &[Entity]) -> BTreeMap<&'static str, Vec<&str>> {
    let mut grouped: BTreeMap<&'static str, Vec<&str>> = BTreeMap::new();
    for entity in entities {
        grouped
            .entry(EntityLabel::as_str(entity.label))
            .or_default()
            .push(entity.text.as_str());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::analyze;
    use tempfile::TempDir;

    #[test]
    fn test_render_counts() {
        let analysis = analyze("Hello world. This is a test.");
        let report = render(&analysis, &Settings::default());
        assert!(report.starts_with("Text Analysis Report\n\n"));
        assert!(report.contains("Number of sentences: 2\n"));
        assert!(report.contains("Number of words: 6\n"));
        assert!(report.contains("   1. Hello: 1\n"));
    }

    #[test]
    fn test_render_limits_top_words() {
        let text = "a b c d e f g h i j k l m n o.";
        let analysis = analyze(text);
        let report = render(&analysis, &Settings::default());
        assert!(report.contains("  10. j: 1\n"));
        assert!(!report.contains("  11."));
    }

    #[test]
    fn test_render_entities_grouped() {
        let analysis = analyze("We flew from Paris to London with Alice Smith.");
        let report = render(&analysis, &Settings::default());
        assert!(report.contains("  GPE (2): Paris, London\n"));
        assert!(report.contains("  PERSON (1): Alice Smith\n"));
    }

    #[test]
    fn test_render_no_entities() {
        let analysis = analyze("the cat sat.");
        let report = render(&analysis, &Settings::default());
        assert!(report.contains("Named Entities:\n  (none found)\n"));
    }

    #[test]
    fn test_write_report_overwrites() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let settings = Settings::default().with_output_dir(temp_dir.path());

        let first = analyze("One sentence here. And another one. And a third.");
        write_report(&first, &settings)?;
        let second = analyze("Short.");
        let path = write_report(&second, &settings)?;

        let content = fs::read_to_string(path)?;
        assert!(content.contains("Number of sentences: 1\n"));
        assert_eq!(content.matches("Text Analysis Report").count(), 1);
        Ok(())
    }

    #[test]
    fn test_write_json_report() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let settings = Settings::default().with_output_dir(temp_dir.path());
        let analysis = analyze("Alice Smith visited Paris. It was sunny.");

        let path = write_json_report(&analysis, &settings)?;
        let value: serde_json::Value = serde_json::from_reader(File::open(path)?)?;
        assert_eq!(value["sentence_count"], 2);
        assert_eq!(value["entities"][0]["label"], "PERSON");
        assert_eq!(value["entities"][1]["text"], "Paris");
        Ok(())
    }
}
