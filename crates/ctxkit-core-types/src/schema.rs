//! Canonical schema constants for structured logging
//!
//! These constants keep field names consistent across crates. Emission
//! sites spell the same names as tracing field identifiers; readers (the
//! test capture layer, log assertions) look fields up through these.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_ADAPTER: &str = "adapter";
pub const FIELD_HOOK_EVENT: &str = "hook_event";

// Collection sizes
pub const FIELD_DOC_COUNT: &str = "doc_count";
pub const FIELD_ERROR_COUNT: &str = "error_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
