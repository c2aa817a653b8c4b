//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: Line-oriented input (files, in-memory fixtures)
//! - [`sink`]: Persistence of rendered reports
//!
//! These ports keep the use cases independent of where lines come from and
//! where reports end up.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod sink;
pub mod source;

pub use sink::ReportSink;
pub use source::{LineSource, SourceLine};
