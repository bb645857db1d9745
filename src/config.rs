use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "analysis_results";
pub const REPORT_FILE: &str = "analysis_report.txt";
pub const REPORT_JSON_FILE: &str = "analysis_report.json";
pub const HISTOGRAM_FILE: &str = "word_frequency_histogram.png";
pub const PIE_CHART_FILE: &str = "named_entity_pie_chart.png";

pub const DEFAULT_TOP_WORDS: usize = 10;
pub const DEFAULT_CHART_WORDS: usize = 30;

/// Runtime options shared by every menu action.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
    /// Words listed in the text report.
    pub top_words: usize,
    /// Words plotted in the frequency chart.
    pub chart_words: usize,
    /// TTF font used for chart text; system locations are probed when unset.
    pub font_path: Option<PathBuf>,
    pub write_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            top_words: DEFAULT_TOP_WORDS,
            chart_words: DEFAULT_CHART_WORDS,
            font_path: None,
            write_json: false,
        }
    }
}

impl Settings {
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE)
    }

    pub fn json_report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_JSON_FILE)
    }

    pub fn histogram_path(&self) -> PathBuf {
        self.output_dir.join(HISTOGRAM_FILE)
    }

    pub fn pie_chart_path(&self) -> PathBuf {
        self.output_dir.join(PIE_CHART_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let settings = Settings::default();
        assert_eq!(
            settings.report_path(),
            Path::new("analysis_results").join("analysis_report.txt")
        );
        assert_eq!(
            settings.histogram_path(),
            Path::new("analysis_results").join("word_frequency_histogram.png")
        );
        assert_eq!(
            settings.pie_chart_path(),
            Path::new("analysis_results").join("named_entity_pie_chart.png")
        );
        assert_eq!(settings.top_words, 10);
        assert_eq!(settings.chart_words, 30);
        assert!(!settings.write_json);
    }

    #[test]
    fn test_with_output_dir() {
        let settings = Settings::default().with_output_dir("/tmp/out");
        assert_eq!(settings.json_report_path(), Path::new("/tmp/out/analysis_report.json"));
    }
}
