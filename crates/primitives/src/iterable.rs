//! Lazy, re-iterable sequences of primitive values.

use crate::iter::{PrimitiveIterator, Stream};
use crate::kind::Primitive;

/// A source that hands out a fresh [`PrimitiveIterator`] on every call.
///
/// Implementors never share iterator state between calls; iterating twice
/// yields the same values twice.
pub trait PrimitiveIterable<P: Primitive> {
    type Iter: PrimitiveIterator<P>;

    /// Returns a new iterator positioned at the first value.
    fn values(&self) -> Self::Iter;

    /// Calls `f` for each value, in order.
    ///
    /// The default drives a fresh iterator through `has_next` / `try_next`.
    fn for_each_value<F>(&self, mut f: F)
    where
        F: FnMut(P),
    {
        let mut it = self.values();
        while it.has_next() {
            match it.try_next() {
                Ok(v) => f(v),
                Err(_) => break,
            }
        }
    }

    /// Standard-iterator view backed by one fresh iterator.
    fn stream(&self) -> Stream<P, Self::Iter> {
        Stream::new(self.values())
    }
}
