//! Zero-or-one element iteration over a [`PrimitiveOptional`].

use core::iter::FusedIterator;

use primitives::{Exhausted, Primitive, PrimitiveIterable, PrimitiveIterator, Stream};
use tracing::debug;

use crate::optional::PrimitiveOptional;

#[derive(Clone, Copy, Debug, PartialEq)]
enum State<P> {
    Ready(P),
    Exhausted,
}

/// Single-use iterator over the value of an optional.
///
/// Starts exhausted if the source is empty. The first successful read moves
/// it to the exhausted state for good; there is no reset.
#[derive(Clone, Debug)]
pub struct PrimitiveOptionalIterator<P> {
    state: State<P>,
}

impl<P: Primitive> PrimitiveOptionalIterator<P> {
    #[inline]
    pub fn new(source: PrimitiveOptional<P>) -> Self {
        let state = match source {
            PrimitiveOptional::Present(v) => State::Ready(v),
            PrimitiveOptional::Empty => State::Exhausted,
        };
        Self { state }
    }
}

impl<P: Primitive> PrimitiveIterator<P> for PrimitiveOptionalIterator<P> {
    #[inline]
    fn has_next(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    fn try_next(&mut self) -> Result<P, Exhausted> {
        match core::mem::replace(&mut self.state, State::Exhausted) {
            State::Ready(v) => Ok(v),
            State::Exhausted => {
                debug!(kind = %P::KIND, "read past the end of an optional iterator");
                Err(Exhausted::of::<P>())
            }
        }
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        Some(usize::from(self.has_next()))
    }
}

impl<P: Primitive> Iterator for PrimitiveOptionalIterator<P> {
    type Item = P;

    #[inline]
    fn next(&mut self) -> Option<P> {
        match core::mem::replace(&mut self.state, State::Exhausted) {
            State::Ready(v) => Some(v),
            State::Exhausted => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.has_next());
        (n, Some(n))
    }
}

impl<P: Primitive> ExactSizeIterator for PrimitiveOptionalIterator<P> {}

impl<P: Primitive> FusedIterator for PrimitiveOptionalIterator<P> {}

/// Re-iterable view of an optional; every call to
/// [`values`](PrimitiveIterable::values) starts a fresh iterator.
#[derive(Clone, Copy, Debug)]
pub struct OptionalIterable<P> {
    source: PrimitiveOptional<P>,
}

impl<P: Primitive> PrimitiveIterable<P> for OptionalIterable<P> {
    type Iter = PrimitiveOptionalIterator<P>;

    #[inline]
    fn values(&self) -> PrimitiveOptionalIterator<P> {
        PrimitiveOptionalIterator::new(self.source)
    }

    fn for_each_value<F>(&self, f: F)
    where
        F: FnMut(P),
    {
        self.source.if_present(f);
    }
}

impl<P: Primitive> PrimitiveOptional<P> {
    /// A fresh one-shot iterator over the held value.
    #[inline]
    pub fn iter(&self) -> PrimitiveOptionalIterator<P> {
        PrimitiveOptionalIterator::new(*self)
    }

    /// Re-iterable lazy sequence of zero or one element.
    #[inline]
    pub fn to_iterable(&self) -> OptionalIterable<P> {
        OptionalIterable { source: *self }
    }

    /// Standard-iterator view backed by exactly one fresh iterator.
    #[inline]
    pub fn stream(&self) -> Stream<P, PrimitiveOptionalIterator<P>> {
        Stream::new(self.iter())
    }
}

impl<P: Primitive> IntoIterator for PrimitiveOptional<P> {
    type Item = P;
    type IntoIter = PrimitiveOptionalIterator<P>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PrimitiveOptionalIterator::new(self)
    }
}
