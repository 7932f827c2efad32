//! Operation boundary macros
//!
//! Every public operation logs one `start` event and then exactly one of
//! `end` or `end_error`. All three carry `component`, `op` and `event`, so
//! a subscriber can pair them up without parsing messages.
//!
//! ```
//! use messfix_core::errors::MessFixError;
//! use messfix_core::{log_op_end, log_op_error, log_op_start};
//!
//! log_op_start!("replay", day = 2, records = 4);
//! log_op_end!("replay", duration_ms = 3, box_count = 1);
//! log_op_error!("replay", MessFixError::EmptyRecord, duration_ms = 1, day = 3);
//! ```

/// Emit the `start` event of an operation, with optional extra fields
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::messfix_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::messfix_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the `end` event of an operation; `duration_ms` is required
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::messfix_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::messfix_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Emit the `end_error` event of an operation
///
/// Accepts anything convertible into `ExError` and logs its kind and stable
/// code as `err_kind` and `err_code`.
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::messfix_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::messfix_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
