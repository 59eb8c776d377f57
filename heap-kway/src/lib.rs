//! An implementation of a `k`-way merge over sorted sources using a binary heap.
//! Given `k` sources that each yield their elements in non-decreasing order,
//! the merger produces the combined sequence in sorted order, paying `O(log k)`
//! comparisons per element rather than a linear scan of all source heads.
//!
//! Sources implement the [`Way`] trait, whose single pull method distinguishes
//! "produced a value" from "cleanly exhausted" from "read failed" — a failure
//! in an underlying source surfaces as a [`SourceError`] rather than ending
//! the merge early.
//!
//! ```
//! use streaming_iterator::StreamingIterator;
//! use heap_kway::HeapMerger;
//!
//! let m = HeapMerger::from_iters_min([(1..2000), (1..20000), (1..5000000)]);
//! assert_eq!(
//!     m.into_streaming().cloned().take(5).collect::<Vec<_>>(),
//!     [1, 1, 1, 2, 2]
//! );
//! ```
mod comparator;
mod frontier;
mod merger;
mod way;

pub use comparator::{Comparator, NaturalOrder, Reversed};
pub use merger::{HeapMerger, IntoIter, MergedStream, SourceError};
pub use way::{from_iter, from_try_iter, IterWay, TryIterWay, Way};
