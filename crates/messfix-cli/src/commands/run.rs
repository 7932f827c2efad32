//! Run command
//!
//! Usage: messfix run <DAYS_FILE> [--log-profile <PROFILE>] [--format <text|json>]

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use messfix_core::errors::MessFixError;
use messfix_core::logging_facility::{init, Profile};
use messfix_core::{run_days, DaySink, Reconciler, Transcript};

use crate::days_file::read_days;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Input and output transcripts
    Text,
    /// One JSON object per day, including the persistent hierarchy
    Json,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Days file: one snapshot per line, records deepest-first
    pub file: PathBuf,

    /// Logging profile (development or production); RUST_LOG overrides its filter
    #[arg(long, default_value = "production")]
    pub log_profile: Profile,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute run command
pub fn execute(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    init(args.log_profile);

    let days = read_days(&args.file)?;
    tracing::debug!(file = %args.file.display(), days = days.len(), "loaded days file");

    let reconciler = Reconciler::new();

    match args.format {
        OutputFormat::Text => {
            let mut transcript = Transcript::new();
            let result = run_days(&reconciler, days, &mut transcript);
            print!("{}", render_transcript(&transcript));
            result?;
        }
        OutputFormat::Json => {
            let mut sink = JsonLines::new(&reconciler);
            let result = run_days(&reconciler, days, &mut sink);
            for line in &sink.lines {
                println!("{}", line);
            }
            result?;
            sink.finish()?;
        }
    }

    Ok(())
}

/// Both transcript panes, inputs first
fn render_transcript(transcript: &Transcript) -> String {
    let mut out = String::from("Input:\n");
    for line in transcript.input_lines() {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("\nOutput:\n");
    for line in transcript.output_lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Sink emitting one JSON document per applied day
///
/// A day whose hierarchy cannot be read back or encoded gets no line; the
/// first such error is returned by `finish`.
struct JsonLines<'a> {
    reconciler: &'a Reconciler,
    pending_input: Vec<String>,
    lines: Vec<String>,
    error: Option<MessFixError>,
}

impl<'a> JsonLines<'a> {
    fn new(reconciler: &'a Reconciler) -> Self {
        Self {
            reconciler,
            pending_input: Vec::new(),
            lines: Vec::new(),
            error: None,
        }
    }

    fn finish(&mut self) -> Result<(), MessFixError> {
        self.error.take().map_or(Ok(()), Err)
    }
}

impl DaySink for JsonLines<'_> {
    fn on_input(&mut self, _day: usize, records: &[String]) {
        self.pending_input = records.to_vec();
    }

    fn on_output(&mut self, day: usize, serialized: &str) {
        let hierarchy = match self
            .reconciler
            .snapshot_state()
            .and_then(|state| state.to_json_value())
        {
            Ok(hierarchy) => hierarchy,
            Err(err) => {
                tracing::error!(day, error = %err, "could not encode hierarchy");
                self.error.get_or_insert(err);
                return;
            }
        };

        let document = serde_json::json!({
            "day": day,
            "input": std::mem::take(&mut self.pending_input),
            "output": serialized,
            "hierarchy": hierarchy,
        });
        self.lines.push(document.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_transcript_lists_inputs_then_outputs() {
        let reconciler = Reconciler::new();
        let mut transcript = Transcript::new();
        run_days(
            &reconciler,
            vec![vec!["P1".to_string(), "F1".to_string(), "B1".to_string()]],
            &mut transcript,
        )
        .unwrap();

        assert_eq!(
            render_transcript(&transcript),
            "Input:\nDay 1: [P1, F1, B1]\n\nOutput:\nDay 1: [P1,F1,B1]\n"
        );
    }

    #[test]
    fn test_json_lines_carry_hierarchy() {
        let reconciler = Reconciler::new();
        let mut sink = JsonLines::new(&reconciler);
        run_days(
            &reconciler,
            vec![vec!["P2".to_string(), "F1".to_string(), "B3".to_string()]],
            &mut sink,
        )
        .unwrap();

        assert_eq!(sink.lines.len(), 1);
        let document: serde_json::Value = serde_json::from_str(&sink.lines[0]).unwrap();
        assert_eq!(document["day"], 1);
        assert_eq!(document["output"], "[P2,F1,B3]");
        assert_eq!(document["input"][0], "P2");
        assert_eq!(document["hierarchy"]["folders"]["1"]["box_id"], 3);
        assert!(sink.finish().is_ok());
    }

    #[test]
    fn test_json_lines_finish_returns_first_error() {
        let reconciler = Reconciler::new();
        let mut sink = JsonLines::new(&reconciler);
        sink.error = Some(MessFixError::Serialization {
            message: "day 1".to_string(),
        });
        sink.on_input(2, &["P1".to_string()]);
        sink.on_output(2, "[]");

        assert_eq!(sink.lines.len(), 1);
        let err = sink.finish().unwrap_err();
        assert!(matches!(err, MessFixError::Serialization { ref message } if message == "day 1"));
        assert!(sink.finish().is_ok());
    }
}
