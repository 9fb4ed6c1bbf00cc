//! Schema module - Configuration and algorithm selection types.

mod algorithm;
mod config;

pub use algorithm::*;
pub use config::*;
