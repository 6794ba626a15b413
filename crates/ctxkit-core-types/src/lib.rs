//! Core types shared across ctxkit crates
//!
//! - **Correlation**: `RequestId` stamped on every command invocation
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
