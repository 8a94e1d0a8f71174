//! Read-only set of at most one primitive value.

use primitives::Primitive;

use crate::iter::PrimitiveOptionalIterator;
use crate::optional::PrimitiveOptional;

/// Immutable set holding zero or one value.
///
/// Exposes no mutating methods; callers that need a growable set copy the
/// contents out with [`iter`](Self::iter).
///
/// ```compile_fail
/// let mut set = optional::some(1).to_boxed_set();
/// set.insert(2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxedSet<P> {
    value: PrimitiveOptional<P>,
}

impl<P: Primitive> BoxedSet<P> {
    pub const fn empty() -> Self {
        Self { value: PrimitiveOptional::Empty }
    }

    pub const fn singleton(value: P) -> Self {
        Self { value: PrimitiveOptional::Present(value) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        usize::from(self.value.is_present())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Membership by [`Primitive::same`]: a `NaN` element contains `NaN`,
    /// and `0.0` does not contain `-0.0`.
    pub fn contains(&self, needle: &P) -> bool {
        match self.value {
            PrimitiveOptional::Present(v) => v.same(*needle),
            PrimitiveOptional::Empty => false,
        }
    }

    #[inline]
    pub fn iter(&self) -> PrimitiveOptionalIterator<P> {
        self.value.iter()
    }
}

impl<P: Primitive> PartialEq for BoxedSet<P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<P: Primitive> From<PrimitiveOptional<P>> for BoxedSet<P> {
    fn from(value: PrimitiveOptional<P>) -> Self {
        Self { value }
    }
}

impl<P: Primitive> IntoIterator for BoxedSet<P> {
    type Item = P;
    type IntoIter = PrimitiveOptionalIterator<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<P: Primitive> IntoIterator for &BoxedSet<P> {
    type Item = P;
    type IntoIter = PrimitiveOptionalIterator<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<P: Primitive + serde::Serialize> serde::Serialize for BoxedSet<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
