//! Machine-native numeric kinds an optional or iterator can be specialized for.

use core::fmt::{Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}
}

/// Runtime tag naming a primitive kind; carried by errors and log events.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrimitiveKind {
    /// 32-bit signed integer (`i32`).
    Int,
    /// 64-bit signed integer (`i64`).
    Long,
    /// 64-bit IEEE-754 float (`f64`).
    Double,
}

impl PrimitiveKind {
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Double => "double",
        }
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A primitive value that is stored inline, never behind a heap wrapper.
///
/// Sealed: only `i32`, `i64` and `f64` implement it. Every algorithm in this
/// workspace is written once against `P: Primitive` and monomorphized per kind.
pub trait Primitive:
    sealed::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Kind tag for this type.
    const KIND: PrimitiveKind;

    /// Value identity used by containers.
    ///
    /// Reflexive for every value: all `NaN`s are the same value, while `0.0`
    /// and `-0.0` are distinct.
    fn same(self, other: Self) -> bool;
}

macro_rules! impl_primitive_for {
    ($t:ty, $kind:expr, |$a:ident, $b:ident| $same:expr) => {
        impl sealed::Sealed for $t {}
        impl Primitive for $t {
            const KIND: PrimitiveKind = $kind;

            #[inline]
            fn same(self, other: Self) -> bool {
                let ($a, $b) = (self, other);
                $same
            }
        }
    };
}

impl_primitive_for!(i32, PrimitiveKind::Int, |a, b| a == b);
impl_primitive_for!(i64, PrimitiveKind::Long, |a, b| a == b);
impl_primitive_for!(f64, PrimitiveKind::Double, |a, b| {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
});
