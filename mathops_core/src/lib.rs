#![forbid(unsafe_code)]

//! Core library for the mathops interactive calculator.
//!
//! This crate provides:
//! - Domain types (operations, result values)
//! - The arithmetic engine (checked 32-bit ops, float division)
//! - Error taxonomy with fixed user-facing messages
//! - Append-only error-event log
//! - The interactive calculator loop

pub mod types;
pub mod error;
pub mod compute;
pub mod config;
pub mod logging;
pub mod errlog;
pub mod repl;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};
pub use types::{Operation, Value};
pub use compute::{calculate, parse_operand, parse_operation};
pub use config::Config;
pub use errlog::{read_records, ErrorRecord, ErrorSink, JsonlSink, NullSink};
pub use repl::Repl;
