//! Pomodoro Alarm - work/rest interval timer CLI
//!
//! This crate provides a Pomodoro-style timer that alternates work and
//! rest periods, announcing each transition with a sound cue and an
//! optional desktop notification.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (rodio, notify-rust, config file)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
