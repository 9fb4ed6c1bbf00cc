//! Compute module - Array generation and the sorting strategies.
//!
//! This module contains:
//! - `source`: Random array generation
//! - `sorting`: Bubble, insertion and selection sort, written against the
//!   frame recorder so every step is captured

pub mod sorting;
mod source;

pub use source::ArraySource;
