//! Canonical schema constants for structured logging and events
//!
//! These constants keep field keys consistent across logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_DAY: &str = "day";

// Collection sizes
pub const FIELD_RECORDS: &str = "records";
pub const FIELD_BOX_COUNT: &str = "box_count";
pub const FIELD_FOLDER_COUNT: &str = "folder_count";
pub const FIELD_DAYS: &str = "days";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_APPLY_SNAPSHOT: &str = "apply_snapshot";
pub const OP_PARSE_SNAPSHOT: &str = "parse_snapshot";
pub const OP_RUN_DAYS: &str = "run_days";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_DAY.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_op_names_are_distinct() {
        assert_ne!(OP_APPLY_SNAPSHOT, OP_PARSE_SNAPSHOT);
        assert_ne!(OP_APPLY_SNAPSHOT, OP_RUN_DAYS);
    }
}
