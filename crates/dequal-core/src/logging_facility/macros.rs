//! Boundary logging macros
//!
//! Every boundary event carries `component`, `op` and `event`; field names
//! are listed in [`dequal_core_types::schema`]. Callers need `tracing` and
//! `dequal-core-types` as dependencies.

/// Emit one boundary event at `$level` with the canonical leading fields
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        );
    };
}

/// Log the start of an operation
///
/// ```
/// # use dequal_core::log_op_start;
/// log_op_start!("concat");
/// log_op_start!("concat", input_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            dequal_core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// Log the successful end of an operation; `duration_ms` is mandatory
///
/// ```
/// # use dequal_core::log_op_end;
/// log_op_end!("concat", duration_ms = 0);
/// log_op_end!("concat", duration_ms = 0, input_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            dequal_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a failed operation
///
/// `$err` is converted into an [`ExError`](crate::errors::ExError) tagged
/// with `$op`. The event carries its kind, code and rendered form, plus the
/// kind of the offending value when the error names one.
///
/// ```
/// # use dequal_core::{log_op_error, errors::DequalError};
/// # use dequal_core_types::ValueKind;
/// let err = DequalError::NotIterable { rendered: "42".into(), kind: ValueKind::Number };
/// log_op_error!("concat", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err = $crate::errors::ExError::from($err).with_op($op);
        $crate::__log_op_event!(
            error,
            $op,
            dequal_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            value_kind = ex_err.value_kind().map(|kind| kind.as_str()),
            error = %ex_err
            $(, $($field)*)?
        );
    }};
}
