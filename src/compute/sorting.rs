//! Sorting strategies driven through a [`FrameRecorder`].
//!
//! Each strategy sorts the recorder's working array in place. All reads that
//! influence control flow go through [`FrameRecorder::compare`] and all
//! mutations through [`FrameRecorder::swap`] or [`FrameRecorder::exchange`],
//! so the recorded frames describe exactly what the algorithm did.

use std::cmp::Ordering;

use crate::animation::FrameRecorder;

/// Bubble sort: adjacent compare-and-swap, largest values sink to the tail.
///
/// Swaps only on strict `>`, so equal elements keep their order.
pub fn bubble_sort<T: Ord + Clone>(rec: &mut FrameRecorder<T>) {
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if rec.compare(j, j + 1) == Ordering::Greater {
                rec.swap(j, j + 1);
            }
        }
        // After pass i the last i + 1 positions are final.
        rec.mark_sorted(n - 1 - i..n);
    }
}

/// Insertion sort: grow a sorted prefix by moving each key left past every
/// larger element, one position at a time.
///
/// The key always sits at `j + 1` while it is compared against `j`. The
/// comparison that ends the scan is recorded too.
pub fn insertion_sort<T: Ord + Clone>(rec: &mut FrameRecorder<T>) {
    let n = rec.len();
    rec.mark_sorted(0..1);

    for i in 1..n {
        rec.focus(i);
        let mut j = i;
        while j > 0 && rec.compare(j - 1, j) == Ordering::Greater {
            rec.swap(j - 1, j);
            j -= 1;
        }
        rec.mark_sorted(0..i + 1);
    }
}

/// Selection sort: scan the unsorted suffix for its minimum and swap it to
/// the front.
///
/// The minimum is only replaced on strict `<`, so ties keep the earliest
/// candidate. The long-distance swap makes this unstable; it gets no frame
/// of its own and shows up in the end-of-pass frame.
pub fn selection_sort<T: Ord + Clone>(rec: &mut FrameRecorder<T>) {
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if rec.compare(min, j) == Ordering::Greater {
                min = j;
            }
        }
        if min != i {
            rec.exchange(i, min);
        }
        rec.mark_sorted(0..i + 1);
    }
}
