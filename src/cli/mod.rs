//! Command-line interface
//!
//! The CLI is the "GUI layer" of this application: it supplies Start
//! (arguments) and Stop (Ctrl-C) and observes the controller through
//! callbacks.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use args::SessionOptions;
