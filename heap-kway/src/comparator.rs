use std::cmp::Ordering;

/// An ordering capability over elements of type `T`, injected into the merger
/// at construction instead of being baked into the element type.
///
/// Any closure of type `Fn(&T, &T) -> Ordering` is a comparator, as is
/// [`NaturalOrder`] (the default) and [`Reversed`].
pub trait Comparator<T> {
    /// Compare two elements, returning the ordering of `a` relative to `b`.
    fn cmp(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        (self)(a, b)
    }
}

/// The natural ordering of `T` given by its [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparator that reverses the ordering of the comparator it wraps.
///
/// Merging with `Reversed(NaturalOrder)` turns a min-merge of descending
/// inputs into a max-merge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C> Comparator<T> for Reversed<C>
where
    C: Comparator<T>,
{
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        self.0.cmp(a, b).reverse()
    }
}
