//! Dragonsnake driver.
//!
//! ```text
//! input files ──► load + join ──► parse ──► generate ──► output file
//!                                   │
//!                                   └──► --ast: dump
//! ```
//!
//! The library holds everything but process exit, so runs can be tested
//! without spawning the binary.

pub mod cli;
pub mod commands;
mod error;
pub mod input;
mod tracing_setup;

pub use commands::{report, transpile, Outcome};
pub use error::DriverError;
pub use tracing_setup::init_tracing;
