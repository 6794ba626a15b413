//! Structured logging facility for ctxkit
//!
//! - Single initialization point via `init(profile)`
//! - Op-boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! All output goes to stderr so machine-readable command output on stdout
//! stays clean.
//!
//! # Usage
//!
//! ```rust
//! use ctxkit_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
