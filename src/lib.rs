//! Sorting visualizer - recorded, paced playback of comparison sorts.
//!
//! This crate turns a sorting algorithm run into a list of array snapshots
//! ("frames") and replays them at a user-controlled rate, with pause,
//! resume and reset.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: Configuration and algorithm selection
//! - `compute`: Random array generation and the sorting strategies
//! - `animation`: Frame recording, the playback state machine and its driver
//!
//! # Example
//!
//! ```rust,no_run
//! use sort_visualizer::{
//!     animation::{PlaybackController, PlaybackDriver},
//!     schema::{Algorithm, VisualizerConfig},
//! };
//!
//! let config = VisualizerConfig {
//!     array_size: 20,
//!     algorithm: Algorithm::Insertion,
//!     ..Default::default()
//! };
//!
//! let mut controller = PlaybackController::new(config)?;
//! controller.subscribe(|view| {
//!     println!("{:?} {:?} {:?}", view.status, view.comparing, view.values);
//! });
//!
//! let mut driver = PlaybackDriver::new(controller);
//! driver.start()?;
//! driver.wait();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod animation;
pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use animation::{
    Frame, FrameList, PlaybackController, PlaybackDriver, PlaybackStatus, RecordError, record,
};
pub use compute::ArraySource;
pub use schema::{Algorithm, ConfigError, VisualizerConfig};
