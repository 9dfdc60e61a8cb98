//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Value context
pub const FIELD_VALUE_KIND: &str = "value_kind";
pub const FIELD_USAGES: &str = "usages";
pub const FIELD_INPUT_COUNT: &str = "input_count";
pub const FIELD_SCRIPT_UID: &str = "script_uid";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
/// Rendered `ExError`, including the operation it was raised in
pub const FIELD_ERROR: &str = "error";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_LAZY_REUSE: &str = "lazy_reuse";
