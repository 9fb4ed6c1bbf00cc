//! Frame and frame list types.

use std::ops::{Index, Range};

use serde::Serialize;

use crate::schema::Algorithm;

/// Indices highlighted in a frame: nothing, a single picked-up element, or
/// a compared/swapped pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Comparing {
    #[default]
    None,
    Single(usize),
    Pair(usize, usize),
}

impl Comparing {
    pub fn is_empty(&self) -> bool {
        matches!(self, Comparing::None)
    }

    pub fn len(&self) -> usize {
        match self {
            Comparing::None => 0,
            Comparing::Single(_) => 1,
            Comparing::Pair(..) => 2,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match *self {
            Comparing::None => false,
            Comparing::Single(i) => i == index,
            Comparing::Pair(i, j) => i == index || j == index,
        }
    }

    /// Iterate over the highlighted indices.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let (a, b) = match *self {
            Comparing::None => (None, None),
            Comparing::Single(i) => (Some(i), None),
            Comparing::Pair(i, j) => (Some(i), Some(j)),
        };
        a.into_iter().chain(b)
    }
}

/// One immutable snapshot of the array during a sort.
///
/// `sorted` is the contiguous range of indices known to hold their final
/// value; every algorithm finalizes either a prefix or a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame<T = u32> {
    pub values: Vec<T>,
    pub comparing: Comparing,
    pub sorted: Range<usize>,
}

impl<T> Frame<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if `index` is marked sorted in this frame.
    #[inline]
    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    /// True when every index is sorted and nothing is highlighted.
    pub fn is_final(&self) -> bool {
        self.comparing.is_empty() && self.sorted == (0..self.values.len())
    }
}

/// Counters accumulated while recording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordStats {
    /// Element comparisons performed.
    pub comparisons: usize,
    /// Swaps and shifts performed.
    pub swaps: usize,
    /// Frames emitted.
    pub frames: usize,
}

impl std::fmt::Display for RecordStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames, {} comparisons, {} swaps",
            self.frames, self.comparisons, self.swaps
        )
    }
}

/// Complete, precomputed frame sequence for one sorting run.
///
/// Never empty: the recorder refuses empty input, and the last frame is
/// always final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameList<T = u32> {
    algorithm: Algorithm,
    frames: Vec<Frame<T>>,
    stats: RecordStats,
}

impl<T> FrameList<T> {
    pub(crate) fn new(algorithm: Algorithm, frames: Vec<Frame<T>>, stats: RecordStats) -> Self {
        Self {
            algorithm,
            frames,
            stats,
        }
    }

    /// Algorithm that produced the frames.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn stats(&self) -> RecordStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame<T>> {
        self.frames.get(index)
    }

    pub fn first(&self) -> Option<&Frame<T>> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Frame<T>> {
        self.frames.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame<T>> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[Frame<T>] {
        &self.frames
    }
}

impl<T> Index<usize> for FrameList<T> {
    type Output = Frame<T>;

    fn index(&self, index: usize) -> &Frame<T> {
        &self.frames[index]
    }
}

impl<'a, T> IntoIterator for &'a FrameList<T> {
    type Item = &'a Frame<T>;
    type IntoIter = std::slice::Iter<'a, Frame<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparing_indices() {
        assert_eq!(Comparing::None.indices().count(), 0);
        assert_eq!(Comparing::Single(4).indices().collect::<Vec<_>>(), vec![4]);
        assert_eq!(
            Comparing::Pair(1, 2).indices().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(Comparing::Pair(1, 2).contains(2));
        assert!(!Comparing::Single(1).contains(2));
        assert_eq!(Comparing::Pair(0, 1).len(), 2);
    }

    #[test]
    fn test_frame_final() {
        let frame = Frame {
            values: vec![1, 2, 3],
            comparing: Comparing::None,
            sorted: 0..3,
        };
        assert!(frame.is_final());
        assert!(frame.is_sorted(2));

        let frame = Frame {
            values: vec![1, 2, 3],
            comparing: Comparing::Pair(0, 1),
            sorted: 0..3,
        };
        assert!(!frame.is_final());

        let frame = Frame {
            values: vec![1, 2, 3],
            comparing: Comparing::None,
            sorted: 1..3,
        };
        assert!(!frame.is_final());
        assert!(!frame.is_sorted(0));
    }

    #[test]
    fn test_stats_display() {
        let stats = RecordStats {
            comparisons: 3,
            swaps: 1,
            frames: 7,
        };
        assert_eq!(stats.to_string(), "7 frames, 3 comparisons, 1 swaps");
    }
}
