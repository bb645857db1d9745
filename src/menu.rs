// Interactive text menu driving a `Session`.
use anyhow::Result;
use std::io::BufRead;
use std::path::Path;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::config::Settings;
use crate::session::{self, Session};

const INSTRUCTIONS: &str = "\
Instructions:
  1) Instructions   Show this help text.
  2) Input File     Load a text file (.txt, .md, ... or .pdf) to analyze.
                    Loading a new file replaces the previous text.
  3) Process        Split the text into sentences and words, tag parts of
                    speech, find named entities and count word frequencies.
                    Writes a text report, a word frequency chart and a
                    named entity pie chart to the output directory.
  4) More Options   Reserved for future features.
  5) Exit           Quit the program.
";

pub struct Menu<R, W> {
    input: R,
    out: W,
    session: Session,
    settings: Settings,
}

impl<R: BufRead, W: WriteColor> Menu<R, W> {
    pub fn new(input: R, out: W, settings: Settings) -> Self {
        Self {
            input,
            out,
            session: Session::new(),
            settings,
        }
    }

    /// Loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.say(Color::Blue, "Welcome to the Text Process and Analysis Tool")?;

        loop {
            self.say(Color::Yellow, "Main Menu:")?;
            writeln!(self.out, "1) Instructions")?;
            writeln!(self.out, "2) Input File")?;
            writeln!(self.out, "3) Process")?;
            writeln!(self.out, "4) More Options")?;
            writeln!(self.out, "5) Exit")?;

            let Some(choice) = self.prompt(Color::Blue, "Please select an option: ")? else {
                // end of input
                self.say(Color::Green, "Exiting...")?;
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.show_instructions()?,
                "2" => self.load_file()?,
                "3" => self.process()?,
                "4" => writeln!(self.out, "More options coming soon!")?,
                "5" => {
                    self.say(Color::Green, "Exiting...")?;
                    return Ok(());
                }
                other => {
                    tracing::debug!(choice = other, "invalid menu choice");
                    self.say(Color::Red, "Invalid choice. Please select a valid option.\n")?;
                }
            }
        }
    }

    fn show_instructions(&mut self) -> Result<()> {
        write!(self.out, "{INSTRUCTIONS}")?;
        match self.session.source() {
            Some(path) => writeln!(
                self.out,
                "Currently loaded: {} ({} characters)\n",
                path.display(),
                self.session.text().chars().count()
            )?,
            None => writeln!(self.out, "No input file loaded yet.\n")?,
        }
        Ok(())
    }

    fn load_file(&mut self) -> Result<()> {
        let Some(path) = self.prompt(Color::Yellow, "Enter the path to the input file: ")? else {
            return Ok(());
        };

        match self.session.load(Path::new(&path)) {
            Ok(_) => self.say(Color::Green, "Input file loaded successfully.\n"),
            Err(err) if session::is_not_found(&err) => {
                tracing::warn!(path = %path, "input file not found");
                self.say(Color::Red, "File not found. Please enter a valid file path.\n")
            }
            Err(err) => Err(err),
        }
    }

    fn process(&mut self) -> Result<()> {
        if !self.session.has_text() {
            return self.say(Color::Red, "Please load an input file before processing.\n");
        }

        let output = self.session.process(&self.settings)?;
        tracing::info!(
            sentences = output.sentence_count,
            words = output.word_count,
            report = %output.report_path.display(),
            histogram = %output.histogram_path.display(),
            pie_chart = %output.pie_chart_path.display(),
            json = ?output.json_path,
            "processing finished"
        );

        let message = format!(
            "Analysis report and graphs saved to '{}' directory.\n",
            self.settings.output_dir.display()
        );
        self.say(Color::Green, &message)
    }

    fn say(&mut self, color: Color, msg: &str) -> Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        writeln!(self.out, "{msg}")?;
        self.out.reset()?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, color: Color, text: &str) -> Result<Option<String>> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{text}")?;
        self.out.reset()?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;
    use termcolor::NoColor;

    fn run_menu(input: &str, settings: Settings) -> Result<(String, Session)> {
        let mut menu = Menu::new(
            Cursor::new(input.as_bytes().to_vec()),
            NoColor::new(Vec::new()),
            settings,
        );
        menu.run()?;
        let output = String::from_utf8(menu.out.into_inner())?;
        Ok((output, menu.session))
    }

    #[test]
    fn test_exit_immediately() -> Result<()> {
        let (output, _) = run_menu("5\n", Settings::default())?;
        assert!(output.starts_with("Welcome to the Text Process and Analysis Tool\n"));
        assert!(output.contains("Main Menu:\n1) Instructions\n"));
        assert!(output.trim_end().ends_with("Exiting..."));
        Ok(())
    }

    #[test]
    fn test_end_of_input_exits() -> Result<()> {
        let (output, _) = run_menu("", Settings::default())?;
        assert!(output.contains("Exiting..."));
        Ok(())
    }

    #[test]
    fn test_invalid_choice_continues() -> Result<()> {
        let (output, _) = run_menu("9\nabc\n5\n", Settings::default())?;
        assert_eq!(
            output
                .matches("Invalid choice. Please select a valid option.")
                .count(),
            2
        );
        assert_eq!(output.matches("Main Menu:").count(), 3);
        Ok(())
    }

    #[test]
    fn test_instructions_and_placeholder() -> Result<()> {
        let (output, _) = run_menu("1\n4\n5\n", Settings::default())?;
        assert!(output.contains("Instructions:\n"));
        assert!(output.contains("No input file loaded yet."));
        assert!(output.contains("More options coming soon!"));
        Ok(())
    }

    #[test]
    fn test_process_without_file_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let out = temp_dir.path().join("analysis_results");
        let (output, _) = run_menu("3\n5\n", Settings::default().with_output_dir(&out))?;
        assert!(output.contains("Please load an input file before processing."));
        assert!(!out.exists());
        Ok(())
    }

    #[test]
    fn test_missing_file_reports_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let input = temp_dir.path().join("input.txt");
        fs::write(&input, "Original text.")?;
        let missing = temp_dir.path().join("nope.txt");

        let script = format!("2\n{}\n2\n{}\n5\n", input.display(), missing.display());
        let (output, session) = run_menu(&script, Settings::default())?;
        assert!(output.contains("Input file loaded successfully."));
        assert!(output.contains("File not found. Please enter a valid file path."));
        assert_eq!(session.text(), "Original text.");
        Ok(())
    }

    #[test]
    fn test_load_and_process() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let input = temp_dir.path().join("input.txt");
        fs::write(&input, "Hello world. This is a test.")?;
        let out = temp_dir.path().join("analysis_results");

        let script = format!("2\n{}\n3\n5\n", input.display());
        let (output, _) = run_menu(&script, Settings::default().with_output_dir(&out))?;
        assert!(output.contains(&format!(
            "Analysis report and graphs saved to '{}' directory.",
            out.display()
        )));

        let report = fs::read_to_string(out.join("analysis_report.txt"))?;
        assert!(report.contains("Number of sentences: 2\n"));
        assert!(report.contains("Number of words: 6\n"));
        assert!(out.join("word_frequency_histogram.png").exists());
        assert!(out.join("named_entity_pie_chart.png").exists());
        Ok(())
    }

    #[test]
    fn test_instructions_show_loaded_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let input = temp_dir.path().join("input.txt");
        fs::write(&input, "abc")?;

        let script = format!("2\n{}\n1\n5\n", input.display());
        let (output, _) = run_menu(&script, Settings::default())?;
        assert!(output.contains(&format!("Currently loaded: {} (3 characters)", input.display())));
        Ok(())
    }
}
