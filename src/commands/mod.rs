//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - estimate: Compute and print a cost breakdown
//! - machines: List the machine catalog
//! - test: Test configuration validity
//! - config: Configuration display and validation

pub mod config;
pub mod estimate;
pub mod machines;
