//! The unboxed optional container.

use core::fmt;

use primitives::Primitive;
use tracing::debug;

use crate::error::{OptionalError, Result};

/// Either one value of primitive kind `P`, or nothing.
///
/// Absence is carried by the variant alone, so every value of `P` (zero,
/// `i32::MIN`, `NaN`, ...) is a legitimate present value. Instances are
/// immutable; every operation returns a new optional.
#[derive(Clone, Copy, Debug, Default)]
pub enum PrimitiveOptional<P> {
    Present(P),
    #[default]
    Empty,
}

/// Optional 32-bit integer.
pub type OptionalInt = PrimitiveOptional<i32>;
/// Optional 64-bit integer.
pub type OptionalLong = PrimitiveOptional<i64>;
/// Optional 64-bit float.
pub type OptionalDouble = PrimitiveOptional<f64>;

impl<P: Primitive> PrimitiveOptional<P> {
    /// An optional holding `value`.
    #[inline]
    pub const fn present(value: P) -> Self {
        PrimitiveOptional::Present(value)
    }

    /// The empty optional.
    #[inline]
    pub const fn empty() -> Self {
        PrimitiveOptional::Empty
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, PrimitiveOptional::Present(_))
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// The held value.
    ///
    /// # Errors
    ///
    /// [`OptionalError::Absent`] if the optional is empty. Use
    /// [`get_or_else`](Self::get_or_else) or [`map`](Self::map) where absence
    /// is expected.
    pub fn get(&self) -> Result<P> {
        match *self {
            PrimitiveOptional::Present(v) => Ok(v),
            PrimitiveOptional::Empty => {
                debug!(kind = %P::KIND, "get() on empty optional");
                Err(OptionalError::Absent { kind: P::KIND })
            }
        }
    }

    /// The held value, or `alternative` if empty.
    #[inline]
    pub fn get_or_else(&self, alternative: P) -> P {
        match *self {
            PrimitiveOptional::Present(v) => v,
            PrimitiveOptional::Empty => alternative,
        }
    }

    /// The held value, or the result of `supplier` if empty.
    ///
    /// `supplier` only runs when the optional is empty.
    #[inline]
    pub fn get_or_else_compute<F>(&self, supplier: F) -> P
    where
        F: FnOnce() -> P,
    {
        match *self {
            PrimitiveOptional::Present(v) => v,
            PrimitiveOptional::Empty => supplier(),
        }
    }

    /// Like [`get_or_else_compute`](Self::get_or_else_compute) with a
    /// fallible supplier; its error is returned unchanged.
    pub fn get_or_else_try<F, E>(&self, supplier: F) -> core::result::Result<P, E>
    where
        F: FnOnce() -> core::result::Result<P, E>,
    {
        match *self {
            PrimitiveOptional::Present(v) => Ok(v),
            PrimitiveOptional::Empty => supplier(),
        }
    }

    /// Calls `f` with the value if present.
    #[inline]
    pub fn if_present<F>(&self, f: F)
    where
        F: FnOnce(P),
    {
        if let PrimitiveOptional::Present(v) = *self {
            f(v);
        }
    }

    /// Converts into the standard library option.
    #[inline]
    pub fn as_option(&self) -> Option<P> {
        match *self {
            PrimitiveOptional::Present(v) => Some(v),
            PrimitiveOptional::Empty => None,
        }
    }
}

/// Shorthand for [`PrimitiveOptional::present`].
#[inline]
pub const fn some<P: Primitive>(value: P) -> PrimitiveOptional<P> {
    PrimitiveOptional::present(value)
}

/// Shorthand for [`PrimitiveOptional::empty`].
#[inline]
pub const fn none<P: Primitive>() -> PrimitiveOptional<P> {
    PrimitiveOptional::empty()
}

impl<P: Primitive> From<P> for PrimitiveOptional<P> {
    fn from(value: P) -> Self {
        PrimitiveOptional::present(value)
    }
}

impl<P: Primitive> From<Option<P>> for PrimitiveOptional<P> {
    fn from(value: Option<P>) -> Self {
        match value {
            Some(v) => PrimitiveOptional::present(v),
            None => PrimitiveOptional::empty(),
        }
    }
}

impl<P: Primitive> From<PrimitiveOptional<P>> for Option<P> {
    fn from(value: PrimitiveOptional<P>) -> Self {
        value.as_option()
    }
}

// Values compare by `Primitive::same`, so `present(NaN) == present(NaN)`.
impl<P: Primitive> PartialEq for PrimitiveOptional<P> {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (PrimitiveOptional::Present(a), PrimitiveOptional::Present(b)) => a.same(b),
            (PrimitiveOptional::Empty, PrimitiveOptional::Empty) => true,
            _ => false,
        }
    }
}

impl<P: Primitive> fmt::Display for PrimitiveOptional<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveOptional::Present(v) => write!(f, "{}[{}]", P::KIND, v),
            PrimitiveOptional::Empty => write!(f, "{}[empty]", P::KIND),
        }
    }
}

#[cfg(feature = "serde")]
impl<P: Primitive + serde::Serialize> serde::Serialize for PrimitiveOptional<P> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: Primitive + serde::Deserialize<'de>> serde::Deserialize<'de> for PrimitiveOptional<P> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<P>::deserialize(deserializer).map(PrimitiveOptional::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use primitives::PrimitiveKind;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn present_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let v: i64 = rng.gen();
            let o = OptionalLong::present(v);
            assert!(o.is_present());
            assert_eq!(o.get(), Ok(v));
        }
    }

    #[test]
    fn edge_values_are_present() {
        for v in [0, i32::MIN, i32::MAX, -1] {
            assert_eq!(OptionalInt::present(v).get(), Ok(v));
        }
        assert_eq!(OptionalDouble::present(0.0).get(), Ok(0.0));
        assert!(OptionalDouble::present(f64::NAN).get().unwrap().is_nan());
    }

    #[test]
    fn nan_optional_equals_itself() {
        let nan = OptionalDouble::present(f64::NAN);
        assert_eq!(nan, nan);
        assert_eq!(nan, some(f64::NAN));
        assert_ne!(nan, none());
        assert_ne!(some(0.0), some(-0.0));
        assert_ne!(some(1), none());
        assert_eq!(none::<i64>(), none());
    }

    #[test]
    fn empty_get_fails() {
        let o = OptionalDouble::empty();
        assert!(o.is_empty());
        assert_eq!(o.get(), Err(OptionalError::Absent { kind: PrimitiveKind::Double }));
        assert_eq!(o.get().unwrap_err().to_string(), "no double value present");
    }

    #[test]
    fn get_or_else_prefers_value() {
        assert_eq!(some(0).get_or_else(9), 0);
        assert_eq!(none::<i32>().get_or_else(9), 9);
    }

    #[test]
    fn compute_is_lazy() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            7
        };
        assert_eq!(some(3i64).get_or_else_compute(fallback), 3);
        assert_eq!(calls.get(), 0);
        assert_eq!(none::<i64>().get_or_else_compute(fallback), 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn try_supplier_error_propagates() {
        let r: core::result::Result<i32, &str> = none().get_or_else_try(|| Err("boom"));
        assert_eq!(r, Err("boom"));
        let r: core::result::Result<i32, &str> = some(1).get_or_else_try(|| Err("boom"));
        assert_eq!(r, Ok(1));
    }

    #[test]
    fn std_option_conversions() {
        assert_eq!(OptionalInt::from(Some(4)), some(4));
        assert_eq!(OptionalInt::from(None), none());
        assert_eq!(Option::<i32>::from(some(4)), Some(4));
        assert_eq!(OptionalInt::default(), none());
    }

    #[test]
    fn display() {
        assert_eq!(some(5).to_string(), "int[5]");
        assert_eq!(none::<i64>().to_string(), "long[empty]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_nullable() {
        assert_eq!(serde_json::to_string(&some(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&none::<i32>()).unwrap(), "null");
        let back: OptionalDouble = serde_json::from_str("1.5").unwrap();
        assert_eq!(back, some(1.5));
        let back: OptionalDouble = serde_json::from_str("null").unwrap();
        assert_eq!(back, none());
    }
}
