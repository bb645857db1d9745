// Interactive text processing tool: tokenization, POS tagging, named entities,
// word frequencies, and a report with two charts.
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

mod charts;
mod config;
mod menu;
mod nlp;
mod report;
mod session;

use config::{Settings, DEFAULT_CHART_WORDS, DEFAULT_OUTPUT_DIR, DEFAULT_TOP_WORDS};
use menu::Menu;

#[derive(Parser, Debug)]
#[command(name = "txtprep", about = "Text processing and analysis tool (interactive menu)")]
struct Cli {
    /// Directory the report and charts are written to.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Number of most frequent words listed in the report.
    #[arg(short, long, default_value_t = DEFAULT_TOP_WORDS)]
    top: usize,
    /// Number of most frequent words plotted in the frequency chart.
    #[arg(long, default_value_t = DEFAULT_CHART_WORDS)]
    chart_words: usize,
    /// TTF font for chart text.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Also write analysis_report.json next to the text report.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn settings(self) -> Settings {
        let mut settings = Settings::default().with_output_dir(self.output_dir);
        settings.top_words = self.top;
        settings.chart_words = self.chart_words;
        settings.font_path = self.font;
        settings.write_json = self.json;
        settings
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("txtprep=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let settings = Cli::parse().settings();
    tracing::debug!(?settings, "starting");

    let stdin = io::stdin();
    let mut menu = Menu::new(
        stdin.lock(),
        StandardStream::stdout(ColorChoice::Auto),
        settings,
    );
    menu.run()
}
