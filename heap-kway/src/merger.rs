use std::convert::Infallible;

use streaming_iterator::StreamingIterator;
use thiserror::Error;
use tracing::{trace, warn};

use crate::comparator::{Comparator, NaturalOrder, Reversed};
use crate::frontier::{Entry, Frontier};
use crate::way::{from_iter, IterWay, Way};

/// The error returned when a read from one of the merged ways fails.
///
/// Failure of a way is distinct from its exhaustion: an exhausted way drops
/// out of the merge silently, while a failed read surfaces as this error on
/// the call that performed the read. The element the merger had already
/// removed from the frontier on that call is not lost; it is delivered by the
/// following call, with no further reads attempted from the failed way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("way {way} failed while reading its next element")]
pub struct SourceError<E> {
    /// Index of the failing way, in construction order.
    pub way: usize,

    /// The underlying read error.
    #[source]
    pub source: E,
}

/// A `k`-way merge over sorted [`Way`]s, driven by a binary-heap frontier of
/// the ways' current head elements.
///
/// Each call to [`next`](HeapMerger::next) pops the minimum head, refills the
/// frontier with at most one read from the popped way, and returns the value:
/// `O(log k)` comparisons and at most one underlying read per call. Ties
/// between equal heads break by way construction order, so the merge is
/// stable across equal keys.
///
/// Every way must yield its elements in the order the comparator considers
/// non-decreasing. This precondition is not verified; merging unsorted ways
/// produces unspecified (but memory-safe, non-panicking) output.
///
/// # Examples
///
/// ```
/// use heap_kway::HeapMerger;
///
/// let mut m = HeapMerger::from_iters_min([vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]);
/// let mut merged = Vec::new();
/// while let Some(v) = m.next().unwrap() {
///     merged.push(v);
/// }
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub struct HeapMerger<W: Way, C = NaturalOrder> {
    ways: Vec<W>,
    /// `failed[i]` is set once way `i` reports a read error; the merger never
    /// reads from it again.
    failed: Vec<bool>,
    frontier: Frontier<W::Item>,
    comparator: C,
}

impl<W> HeapMerger<W, NaturalOrder>
where
    W: Way,
    W::Item: Ord,
{
    /// Construct a merger over `ways` using the natural ordering of the
    /// element type.
    ///
    /// One element is read from each way to prime the frontier. Ways that are
    /// already exhausted are omitted from the merge; an empty way set (or one
    /// whose ways are all empty) yields a merger that is immediately
    /// exhausted. If a priming read fails, construction fails with that way's
    /// [`SourceError`] — a way that is truly empty and a way whose first read
    /// failed are never conflated.
    pub fn new<I>(ways: I) -> Result<Self, SourceError<W::Error>>
    where
        I: IntoIterator<Item = W>,
    {
        Self::with_comparator(ways, NaturalOrder)
    }
}

impl<W, C> HeapMerger<W, C>
where
    W: Way,
    C: Comparator<W::Item>,
{
    /// Construct a merger over `ways` ordered by `comparator`.
    ///
    /// Priming semantics are those of [`HeapMerger::new`].
    pub fn with_comparator<I>(ways: I, comparator: C) -> Result<Self, SourceError<W::Error>>
    where
        I: IntoIterator<Item = W>,
    {
        let mut ways: Vec<W> = ways.into_iter().collect();
        let mut frontier = Frontier::with_capacity(ways.len());
        for (way, w) in ways.iter_mut().enumerate() {
            match w.next() {
                Ok(Some(value)) => frontier.push(Entry { value, way }, &comparator),
                Ok(None) => trace!(way, "way empty at construction"),
                Err(source) => return Err(SourceError { way, source }),
            }
        }
        trace!(ways = ways.len(), live = frontier.len(), "primed merge frontier");
        let failed = vec![false; ways.len()];
        Ok(Self {
            ways,
            failed,
            frontier,
            comparator,
        })
    }

    /// Take the next element of the merged sequence.
    ///
    /// Returns `Ok(Some(value))` while elements remain, and `Ok(None)` once
    /// every way is exhausted; exhaustion is idempotent, so further calls
    /// keep returning `Ok(None)`. A failed read from a way surfaces as
    /// `Err` on the call that performed the read, once per failed way.
    /// Calling `next` again after an error continues the merge over the
    /// remaining ways; the failed way contributes nothing further.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_kway::{from_try_iter, HeapMerger};
    ///
    /// let ways = vec![
    ///     from_try_iter(vec![Ok::<i32, &str>(1), Ok(4)]),
    ///     from_try_iter(vec![Ok(2), Err("torn page")]),
    /// ];
    /// let mut m = HeapMerger::new(ways).unwrap();
    ///
    /// assert_eq!(m.next().unwrap(), Some(1));
    /// // consuming 2 triggers the read that fails
    /// let err = m.next().unwrap_err();
    /// assert_eq!((err.way, err.source), (1, "torn page"));
    /// // continuing merges what remains, starting with the element the
    /// // failing call had already removed from the frontier
    /// assert_eq!(m.next().unwrap(), Some(2));
    /// assert_eq!(m.next().unwrap(), Some(4));
    /// assert_eq!(m.next().unwrap(), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<W::Item>, SourceError<W::Error>> {
        let Some(Entry { value, way }) = self.frontier.pop(&self.comparator) else {
            return Ok(None);
        };
        if !self.failed[way] {
            match self.ways[way].next() {
                Ok(Some(head)) => self.frontier.push(Entry { value: head, way }, &self.comparator),
                Ok(None) => trace!(way, "way exhausted"),
                Err(source) => {
                    warn!(way, "way read failed; it contributes nothing further");
                    self.failed[way] = true;
                    self.frontier.push(Entry { value, way }, &self.comparator);
                    return Err(SourceError { way, source });
                }
            }
        }
        Ok(Some(value))
    }

    /// The next element the merge would yield, without advancing anything.
    pub fn peek(&self) -> Option<&W::Item> {
        self.frontier.peek().map(|entry| &entry.value)
    }

    /// Whether the merge has yielded everything its ways had to offer.
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }
}

impl<I> HeapMerger<IterWay<I>, NaturalOrder>
where
    I: Iterator,
    I::Item: Ord,
{
    /// Construct a min-merger over plain iterators, each of which must yield
    /// its elements in non-decreasing order.
    ///
    /// Plain iterators cannot fail, so unlike [`HeapMerger::new`] this
    /// constructor is infallible.
    pub fn from_iters_min<J>(iters: J) -> Self
    where
        J: IntoIterator,
        J::Item: IntoIterator<IntoIter = I>,
    {
        into_ok(Self::new(iters.into_iter().map(from_iter)))
    }
}

impl<I> HeapMerger<IterWay<I>, Reversed<NaturalOrder>>
where
    I: Iterator,
    I::Item: Ord,
{
    /// Construct a max-merger over plain iterators, each of which must yield
    /// its elements in non-increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_kway::HeapMerger;
    ///
    /// let m = HeapMerger::from_iters_max([vec![5, 3, 1], vec![4, 2]]);
    /// let merged: Vec<_> = m.into_iter().map(Result::unwrap).collect();
    /// assert_eq!(merged, vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn from_iters_max<J>(iters: J) -> Self
    where
        J: IntoIterator,
        J::Item: IntoIterator<IntoIter = I>,
    {
        into_ok(Self::with_comparator(
            iters.into_iter().map(from_iter),
            Reversed(NaturalOrder),
        ))
    }
}

impl<W, C> HeapMerger<W, C>
where
    W: Way<Error = Infallible>,
    C: Comparator<W::Item>,
{
    /// Consume the merger as a [`StreamingIterator`].
    ///
    /// Only mergers whose ways cannot fail stream this way; the streaming
    /// interface has no error channel to carry a [`SourceError`].
    pub fn into_streaming(self) -> MergedStream<W, C> {
        MergedStream {
            merger: self,
            current: None,
        }
    }
}

fn into_ok<T>(result: Result<T, SourceError<Infallible>>) -> T {
    match result {
        Ok(value) => value,
        Err(SourceError { source, .. }) => match source {},
    }
}

/// Iterator over a merger's elements, yielding `Err` in place at each failed
/// way read. Returned by [`HeapMerger`]'s [`IntoIterator`] impl.
pub struct IntoIter<W: Way, C> {
    merger: HeapMerger<W, C>,
}

impl<W, C> Iterator for IntoIter<W, C>
where
    W: Way,
    C: Comparator<W::Item>,
{
    type Item = Result<W::Item, SourceError<W::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.merger.next().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every frontier entry has been read and must still be yielded.
        (self.merger.frontier.len(), None)
    }
}

impl<W, C> IntoIterator for HeapMerger<W, C>
where
    W: Way,
    C: Comparator<W::Item>,
{
    type Item = Result<W::Item, SourceError<W::Error>>;
    type IntoIter = IntoIter<W, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { merger: self }
    }
}

/// [`StreamingIterator`] over an infallible merger's elements. Returned by
/// [`HeapMerger::into_streaming`].
pub struct MergedStream<W: Way, C> {
    merger: HeapMerger<W, C>,
    current: Option<W::Item>,
}

impl<W, C> StreamingIterator for MergedStream<W, C>
where
    W: Way<Error = Infallible>,
    C: Comparator<W::Item>,
{
    type Item = W::Item;

    fn advance(&mut self) {
        self.current = into_ok(self.merger.next());
    }

    fn get(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }
}
