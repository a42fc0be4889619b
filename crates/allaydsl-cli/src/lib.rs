//! allaydsl CLI - Command-line interface for allay Gradle DSL tooling
//!
//! Exposed as a library so integration tests can drive the command
//! handlers directly; the `allaydsl` binary is a thin wrapper around
//! [`app::run_cli`].

pub mod app;

pub use app::run_cli;
