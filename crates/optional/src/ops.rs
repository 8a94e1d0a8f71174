//! Transformations between optionals.
//!
//! Every operation has the same shape: if present, apply and rewrap; if
//! empty, stay empty without calling the supplied function.

use primitives::Primitive;

use crate::optional::PrimitiveOptional;
use crate::set::BoxedSet;

impl<P: Primitive> PrimitiveOptional<P> {
    /// Applies `f` to the value, keeping the kind.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(P) -> P,
    {
        self.map_to(f)
    }

    /// Applies `f` to the value, producing an optional of another primitive kind.
    #[inline]
    pub fn map_to<Q, F>(self, f: F) -> PrimitiveOptional<Q>
    where
        Q: Primitive,
        F: FnOnce(P) -> Q,
    {
        match self {
            PrimitiveOptional::Present(v) => PrimitiveOptional::Present(f(v)),
            PrimitiveOptional::Empty => PrimitiveOptional::Empty,
        }
    }

    #[inline]
    pub fn map_int<F>(self, f: F) -> PrimitiveOptional<i32>
    where
        F: FnOnce(P) -> i32,
    {
        self.map_to(f)
    }

    #[inline]
    pub fn map_long<F>(self, f: F) -> PrimitiveOptional<i64>
    where
        F: FnOnce(P) -> i64,
    {
        self.map_to(f)
    }

    #[inline]
    pub fn map_double<F>(self, f: F) -> PrimitiveOptional<f64>
    where
        F: FnOnce(P) -> f64,
    {
        self.map_to(f)
    }

    /// Maps into a general-purpose `Option<V>`.
    ///
    /// The result of `f` is always wrapped: an `f` returning a "nothing"
    /// value such as `None` yields `Some(None)`. Only an empty source gives
    /// `None`.
    #[inline]
    pub fn map_to_boxed<V, F>(self, f: F) -> Option<V>
    where
        F: FnOnce(P) -> V,
    {
        match self {
            PrimitiveOptional::Present(v) => Some(f(v)),
            PrimitiveOptional::Empty => None,
        }
    }

    /// The value as a general-purpose `Option<P>`.
    #[inline]
    pub fn boxed(self) -> Option<P> {
        self.map_to_boxed(core::convert::identity)
    }

    /// Keeps the value only if `predicate` accepts it.
    ///
    /// `predicate` is not called on an empty optional.
    #[inline]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(P) -> bool,
    {
        match self {
            PrimitiveOptional::Present(v) => {
                if predicate(v) {
                    self
                } else {
                    PrimitiveOptional::Empty
                }
            }
            PrimitiveOptional::Empty => self,
        }
    }

    /// Read-only set with zero or one element.
    #[inline]
    pub fn to_boxed_set(self) -> BoxedSet<P> {
        BoxedSet::from(self)
    }
}

impl<P> PrimitiveOptional<P>
where
    P: Primitive,
    i64: From<P>,
{
    /// Lossless widening to a 64-bit integer.
    #[inline]
    pub fn as_long(self) -> PrimitiveOptional<i64> {
        self.map_to(i64::from)
    }
}

impl<P> PrimitiveOptional<P>
where
    P: Primitive,
    f64: From<P>,
{
    /// Lossless widening to a 64-bit float.
    #[inline]
    pub fn as_double(self) -> PrimitiveOptional<f64> {
        self.map_to(f64::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::optional::{none, some, OptionalInt};

    #[test]
    fn map_preserves_absence() {
        let mut calls = 0;
        let out = none::<i32>().map(|x| { calls += 1; x + 1 });
        assert!(out.is_empty());
        assert_eq!(calls, 0);
        assert_eq!(some(4).map(|x| x * 3).get(), Ok(12));
    }

    #[test]
    fn filter_scenarios() {
        assert_eq!(some(5).filter(|x| x > 3).get(), Ok(5));
        assert!(!some(2).filter(|x| x > 3).is_present());
    }

    #[test]
    fn filter_skips_predicate_on_empty() {
        let mut calls = 0;
        let out = OptionalInt::empty().filter(|_| { calls += 1; true });
        assert!(out.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn widening_conversions() {
        assert_eq!(some(i32::MAX).as_long().get(), Ok(i32::MAX as i64));
        assert_eq!(some(i32::MIN).as_double().get(), Ok(i32::MIN as f64));
        assert_eq!(some(7i64).as_long(), some(7i64));
        assert!(none::<i32>().as_long().is_empty());
        assert!(none::<i32>().as_double().is_empty());
    }

    #[test]
    fn cross_kind_maps() {
        assert_eq!(some(3).map_long(|x| i64::from(x) << 40).get(), Ok(3i64 << 40));
        assert_eq!(some(9i64).map_int(|x| x as i32), some(9));
        assert_eq!(some(2).map_double(|x| f64::from(x) / 4.0), some(0.5));
        assert_eq!(some(1.9).map_to(|x: f64| x.floor() as i64), some(1i64));
    }

    #[test]
    fn boxed_never_collapses_nothing_results() {
        let nested: Option<Option<i32>> = some(1).map_to_boxed(|_| None);
        assert_eq!(nested, Some(None));
        assert_eq!(none::<i32>().map_to_boxed(|x| Some(x)), None);
        assert_eq!(some(8).map_to_boxed(|x| x.to_string()), Some("8".to_string()));
    }

    #[test]
    fn boxed_identity() {
        assert_eq!(some(0i64).boxed(), Some(0));
        assert_eq!(none::<f64>().boxed(), None);
    }
}
