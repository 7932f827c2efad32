#![allow(clippy::unwrap_used, clippy::expect_used)]

use messfix_core::errors::MessFixError;
use messfix_core::logging_facility::test_capture::init_test_capture;
use messfix_core::{log_op_end, log_op_error, log_op_start, run_days, Reconciler, Transcript};
use messfix_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DAY, FIELD_DAYS, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_FOLDER_COUNT, FIELD_RECORDS, OP_APPLY_SNAPSHOT,
    OP_RUN_DAYS,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, day = 4);

    let start_events = capture.find_events(op_name, EVENT_START);
    assert_eq!(start_events.len(), 1, "Should have exactly one start event");
    assert_eq!(start_events[0].field(FIELD_DAY), Some("4"));
    assert!(start_events[0].component.is_some());
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.find_events(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = MessFixError::InvalidRecordId {
        record: "P?".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.find_events(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_INVALID_RECORD_ID"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("InvalidRecordId"));
}

#[test]
fn test_apply_snapshot_logs_start_and_end() {
    let capture = init_test_capture();
    let reconciler = Reconciler::new();

    // Seven records identify this call among the ones made by other tests
    reconciler
        .apply_snapshot(&["P1", "P2", "F1", "P3", "F2", "B1", "B9"])
        .unwrap();

    let starts = capture.find_events(OP_APPLY_SNAPSHOT, EVENT_START);
    assert!(
        starts.iter().any(|e| e.field(FIELD_RECORDS) == Some("7")),
        "Expected an apply_snapshot start event with records=7"
    );

    let ends = capture.find_events(OP_APPLY_SNAPSHOT, EVENT_END);
    assert!(ends
        .iter()
        .any(|e| e.field(FIELD_FOLDER_COUNT) == Some("2") && e.field(FIELD_DURATION_MS).is_some()));
}

#[test]
fn test_rejected_snapshot_logs_end_error() {
    let capture = init_test_capture();
    let reconciler = Reconciler::new();

    let result = reconciler.apply_snapshot(&["P1", "F1", "W1"]);
    assert!(result.is_err());

    let errors = capture.find_events(OP_APPLY_SNAPSHOT, EVENT_END_ERROR);
    assert!(errors
        .iter()
        .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_INVALID_RECORD_TYPE")));
}

#[test]
fn test_run_days_boundary_events() {
    let capture = init_test_capture();
    let reconciler = Reconciler::new();
    let mut transcript = Transcript::new();
    let days = vec![
        vec!["P8".to_string(), "F8".to_string(), "B8".to_string()],
        vec!["P8".to_string(), "F8".to_string(), "B8".to_string()],
        vec!["P8".to_string(), "F8".to_string(), "B8".to_string()],
    ];

    run_days(&reconciler, days, &mut transcript).unwrap();

    capture.assert_event_exists(OP_RUN_DAYS, EVENT_START);
    let ends = capture.find_events(OP_RUN_DAYS, EVENT_END);
    assert!(ends.iter().any(|e| e.field(FIELD_DAYS) == Some("3")));
}
