//! File-based logging for embedded use.
//!
//! The crate is instrumented with `tracing` spans and events throughout the
//! coordinator, query engine, and storage layers. This module wires those
//! up to a subscriber writing plain-text logs to a file under the data
//! directory.
//!
//! Initialization is optional: an embedding application that already
//! installs its own subscriber can skip [`init_tracing`] entirely and the
//! crate's instrumentation flows into that subscriber instead.

mod init;

pub use init::init_tracing;
