//! Day-by-day session driver
//!
//! Feeds an ordered sequence of daily snapshots into a [`Reconciler`] and
//! reports each day's input and output to a [`DaySink`].

use std::time::Instant;

use messfix_core_types::schema::OP_RUN_DAYS;

use crate::errors::ExError;
use crate::reconciler::Reconciler;
use crate::record::format_records;
use crate::{log_op_end, log_op_error, log_op_start};

/// Receiver of per-day session events
pub trait DaySink {
    /// Called with the raw snapshot before it is applied
    fn on_input(&mut self, day: usize, records: &[String]);

    /// Called with the serialized persistent hierarchy after the merge
    fn on_output(&mut self, day: usize, serialized: &str);
}

/// Apply each day's snapshot in order, numbering days from 1
///
/// Returns the number of days applied. The session stops at the first
/// failing day; the error carries that day's number and the earlier days
/// stay merged.
///
/// # Errors
///
/// Returns the failing day's error converted to an `ExError`.
pub fn run_days<I>(
    reconciler: &Reconciler,
    days: I,
    sink: &mut dyn DaySink,
) -> std::result::Result<usize, ExError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let start = Instant::now();
    log_op_start!(OP_RUN_DAYS);

    let mut applied = 0;
    for (index, records) in days.into_iter().enumerate() {
        let day = index + 1;
        sink.on_input(day, &records);

        match reconciler.apply_snapshot(records.as_slice()) {
            Ok(serialized) => {
                sink.on_output(day, &serialized);
                applied = day;
            }
            Err(err) => {
                log_op_error!(
                    OP_RUN_DAYS,
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    day = day
                );
                return Err(ExError::from(err).with_day(day));
            }
        }
    }

    log_op_end!(
        OP_RUN_DAYS,
        duration_ms = start.elapsed().as_millis() as u64,
        days = applied
    );
    Ok(applied)
}

/// Sink that accumulates a printable transcript of the session
///
/// Input lines echo the raw feed, `Day 1: [P1, F1, B1]`; output lines carry
/// the serialized hierarchy, `Day 1: [P1,F1,B1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    inputs: Vec<String>,
    outputs: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_lines(&self) -> &[String] {
        &self.inputs
    }

    pub fn output_lines(&self) -> &[String] {
        &self.outputs
    }

    pub fn input_text(&self) -> String {
        self.inputs.join("\n")
    }

    pub fn output_text(&self) -> String {
        self.outputs.join("\n")
    }
}

impl DaySink for Transcript {
    fn on_input(&mut self, day: usize, records: &[String]) {
        self.inputs
            .push(format!("Day {}: {}", day, format_records(records)));
    }

    fn on_output(&mut self, day: usize, serialized: &str) {
        self.outputs.push(format!("Day {}: {}", day, serialized));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    fn day(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_transcript_numbers_days_from_one() {
        let reconciler = Reconciler::new();
        let mut transcript = Transcript::new();

        let applied = run_days(
            &reconciler,
            vec![day(&["P1", "F1", "B1"]), day(&["P2", "P1", "F1", "B1"])],
            &mut transcript,
        )
        .unwrap();

        assert_eq!(applied, 2);
        assert_eq!(
            transcript.input_lines(),
            ["Day 1: [P1, F1, B1]", "Day 2: [P2, P1, F1, B1]"]
        );
        assert_eq!(
            transcript.output_text(),
            "Day 1: [P1,F1,B1]\nDay 2: [P1,P2,F1,B1]"
        );
    }

    #[test]
    fn test_failing_day_stops_session() {
        let reconciler = Reconciler::new();
        let mut transcript = Transcript::new();

        let err = run_days(
            &reconciler,
            vec![
                day(&["P1", "F1", "B1"]),
                day(&["P1", "X1", "B1"]),
                day(&["P2", "F2", "B2"]),
            ],
            &mut transcript,
        )
        .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::InvalidRecordType);
        assert_eq!(err.day(), Some(2));
        assert_eq!(err.op(), Some(messfix_core_types::schema::OP_PARSE_SNAPSHOT));
        // The failing day is echoed but produces no output
        assert_eq!(transcript.input_lines().len(), 2);
        assert_eq!(transcript.output_lines(), ["Day 1: [P1,F1,B1]"]);
        assert_eq!(reconciler.render().unwrap(), "[P1,F1,B1]");
    }

    #[test]
    fn test_empty_session() {
        let reconciler = Reconciler::new();
        let mut transcript = Transcript::new();
        let applied = run_days(&reconciler, Vec::new(), &mut transcript).unwrap();
        assert_eq!(applied, 0);
        assert!(transcript.input_lines().is_empty());
    }
}
