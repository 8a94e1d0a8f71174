//! One-shot iteration protocol over unboxed primitive values.

use core::iter::FusedIterator;
use core::marker::PhantomData;

use thiserror::Error;

use crate::kind::{Primitive, PrimitiveKind};

/// Returned by [`PrimitiveIterator::try_next`] once no value is left to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("last {kind} value already read")]
pub struct Exhausted {
    pub kind: PrimitiveKind,
}

impl Exhausted {
    pub const fn of<P: Primitive>() -> Self {
        Self { kind: P::KIND }
    }
}

/// Iterator over values of kind `P` with explicit `has_next` / `try_next`.
///
/// Reading past the end is an error, never a repeated or default value.
/// Once `has_next` returns `false` it keeps returning `false`; implementors
/// must not become readable again.
pub trait PrimitiveIterator<P: Primitive> {
    /// True while at least one unread value remains. Never flips back to
    /// `true` after returning `false`.
    fn has_next(&self) -> bool;

    /// Reads the next value, or fails with [`Exhausted`].
    fn try_next(&mut self) -> Result<P, Exhausted>;

    /// Upper bound on remaining values, if known.
    #[inline]
    fn remaining(&self) -> Option<usize> {
        None
    }

    /// Adapts this iterator into a standard [`Iterator`].
    #[inline]
    fn into_stream(self) -> Stream<P, Self>
    where
        Self: Sized,
    {
        Stream::new(self)
    }
}

/// Standard-iterator view over exactly one [`PrimitiveIterator`].
///
/// Inherits the single-pass behavior of the wrapped iterator.
#[derive(Debug, Clone)]
pub struct Stream<P, I> {
    inner: I,
    _kind: PhantomData<P>,
}

impl<P: Primitive, I: PrimitiveIterator<P>> Stream<P, I> {
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner, _kind: PhantomData }
    }

    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<P: Primitive, I: PrimitiveIterator<P>> Iterator for Stream<P, I> {
    type Item = P;

    #[inline]
    fn next(&mut self) -> Option<P> {
        if self.inner.has_next() {
            self.inner.try_next().ok()
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.inner.remaining() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

// Relies on the `has_next` contract above.
impl<P: Primitive, I: PrimitiveIterator<P>> FusedIterator for Stream<P, I> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down from `n` to 1.
    struct Countdown(i64);

    impl PrimitiveIterator<i64> for Countdown {
        fn has_next(&self) -> bool {
            self.0 > 0
        }

        fn try_next(&mut self) -> Result<i64, Exhausted> {
            if self.0 == 0 {
                return Err(Exhausted::of::<i64>());
            }
            let v = self.0;
            self.0 -= 1;
            Ok(v)
        }

        fn remaining(&self) -> Option<usize> {
            Some(self.0 as usize)
        }
    }

    #[test]
    fn stream_drains_inner() {
        let s = Countdown(3).into_stream();
        assert_eq!(s.size_hint(), (3, Some(3)));
        assert_eq!(s.collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn stream_is_fused() {
        let mut s = Countdown(1).into_stream();
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.next(), None);
        assert!(!s.inner.has_next());
        assert_eq!(s.next(), None);
        assert!(!s.inner.has_next());
        assert!(s.into_inner().try_next().is_err());
    }

    #[test]
    fn exhausted_message_names_kind() {
        assert_eq!(Exhausted::of::<f64>().to_string(), "last double value already read");
    }
}
