// Pedantic lint configuration for the crate.
// - missing_errors_doc: Error handling is self-evident from Result types
// - module_name_repetitions: `PubmedError` reads better than `Error` at call sites
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod models;
pub mod render;
