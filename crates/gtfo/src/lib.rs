//! gtfo library
//!
//! This module exports the command-line pieces of gtfo for use in
//! integration tests and as a library.

pub mod config;
pub mod module;
pub mod run;

pub use run::{exit_code, run};
