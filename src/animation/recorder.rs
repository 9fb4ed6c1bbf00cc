//! Frame recorder for capturing every step of a sort.

use std::cmp::Ordering;
use std::ops::Range;

use super::frame::{Comparing, Frame, FrameList, RecordStats};
use crate::compute::sorting;
use crate::schema::Algorithm;

/// Errors produced while recording.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Invalid input: cannot record a sort of an empty array")]
    InvalidInput,
}

/// Record a complete run of `algorithm` over a copy of `input`.
///
/// Pure and deterministic: the same input always yields the same frames.
pub fn record<T: Ord + Clone>(
    algorithm: Algorithm,
    input: &[T],
) -> Result<FrameList<T>, RecordError> {
    let mut recorder = FrameRecorder::new(input)?;
    match algorithm {
        Algorithm::Bubble => sorting::bubble_sort(&mut recorder),
        Algorithm::Insertion => sorting::insertion_sort(&mut recorder),
        Algorithm::Selection => sorting::selection_sort(&mut recorder),
    }
    let frames = recorder.finalize(algorithm);
    log::debug!("Recorded {} over {} values: {}", algorithm, input.len(), frames.stats());
    Ok(frames)
}

/// Working array that snapshots itself on every comparison and mutation.
///
/// Sorting strategies operate exclusively through this type, so the frame
/// policy (one frame per comparison, one per mutation, one per pass) lives
/// in one place.
pub struct FrameRecorder<T> {
    values: Vec<T>,
    sorted: Range<usize>,
    frames: Vec<Frame<T>>,
    stats: RecordStats,
}

impl<T: Ord + Clone> FrameRecorder<T> {
    /// Copy `input` into a new recorder. No frame is emitted yet.
    pub fn new(input: &[T]) -> Result<Self, RecordError> {
        if input.is_empty() {
            return Err(RecordError::InvalidInput);
        }
        Ok(Self {
            values: input.to_vec(),
            sorted: 0..0,
            frames: Vec::new(),
            stats: RecordStats::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current working values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Compare `values[i]` with `values[j]`, emitting a frame that shows the
    /// pair before any resulting mutation.
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.stats.comparisons += 1;
        self.snapshot(Comparing::Pair(i, j));
        self.values[i].cmp(&self.values[j])
    }

    /// Swap two positions and emit the post-swap frame.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.stats.swaps += 1;
        self.values.swap(i, j);
        self.snapshot(Comparing::Pair(i, j));
    }

    /// Swap two positions without a frame of its own.
    ///
    /// For swaps not tied to a single comparison; the next pass frame shows
    /// the result.
    pub fn exchange(&mut self, i: usize, j: usize) {
        self.stats.swaps += 1;
        self.values.swap(i, j);
    }

    /// Highlight a single index without comparing (element picked up).
    pub fn focus(&mut self, index: usize) {
        self.snapshot(Comparing::Single(index));
    }

    /// Extend the sorted range and emit the end-of-pass frame.
    ///
    /// The range may only grow.
    pub fn mark_sorted(&mut self, range: Range<usize>) {
        debug_assert!(range.end <= self.values.len());
        debug_assert!(
            self.sorted.is_empty()
                || (range.start <= self.sorted.start && range.end >= self.sorted.end),
            "sorted range shrank from {:?} to {:?}",
            self.sorted,
            range
        );
        self.sorted = range;
        self.snapshot(Comparing::None);
    }

    /// Finish recording, appending the final all-sorted frame if the last
    /// pass did not already produce one.
    pub fn finalize(mut self, algorithm: Algorithm) -> FrameList<T> {
        if !self.frames.last().is_some_and(Frame::is_final) {
            self.sorted = 0..self.values.len();
            self.snapshot(Comparing::None);
        }
        FrameList::new(algorithm, self.frames, self.stats)
    }

    fn snapshot(&mut self, comparing: Comparing) {
        self.stats.frames += 1;
        self.frames.push(Frame {
            values: self.values.clone(),
            comparing,
            sorted: self.sorted.clone(),
        });
    }
}
