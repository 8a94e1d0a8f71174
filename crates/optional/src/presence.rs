//! Callbacks that branch on whether an optional holds a value.

use core::marker::PhantomData;

use primitives::Primitive;

use crate::optional::PrimitiveOptional;

/// A value callback that can also be applied to whole optionals.
///
/// Built with [`if_present`]. Applying it to an empty optional does nothing;
/// [`or_else`](Self::or_else) adds a fallback for that case.
pub struct PresenceCheck<P, F> {
    on_present: F,
    _kind: PhantomData<fn(P)>,
}

/// Wraps `on_present` so it can be applied to optionals of `P`.
pub fn if_present<P, F>(on_present: F) -> PresenceCheck<P, F>
where
    P: Primitive,
    F: FnMut(P),
{
    PresenceCheck { on_present, _kind: PhantomData }
}

impl<P: Primitive, F: FnMut(P)> PresenceCheck<P, F> {
    /// Calls the callback directly with `value`.
    #[inline]
    pub fn accept(&mut self, value: P) {
        (self.on_present)(value)
    }

    /// Calls the callback with the held value, if any.
    pub fn apply(&mut self, source: PrimitiveOptional<P>) {
        if let PrimitiveOptional::Present(v) = source {
            self.accept(v);
        }
    }

    /// Adds a fallback that runs when the optional is empty.
    pub fn or_else<G>(self, on_absent: G) -> Branch<P, F, G>
    where
        G: FnMut(),
    {
        Branch { on_present: self.on_present, on_absent, _kind: PhantomData }
    }

    pub fn into_inner(self) -> F {
        self.on_present
    }
}

/// Present/absent pair of callbacks; exactly one runs per [`apply`](Self::apply).
pub struct Branch<P, F, G> {
    on_present: F,
    on_absent: G,
    _kind: PhantomData<fn(P)>,
}

impl<P, F, G> Branch<P, F, G>
where
    P: Primitive,
    F: FnMut(P),
    G: FnMut(),
{
    pub fn apply(&mut self, source: PrimitiveOptional<P>) {
        match source {
            PrimitiveOptional::Present(v) => (self.on_present)(v),
            PrimitiveOptional::Empty => (self.on_absent)(),
        }
    }

    /// Plain closure form, for APIs that take `FnMut(PrimitiveOptional<P>)`.
    pub fn into_fn(mut self) -> impl FnMut(PrimitiveOptional<P>) {
        move |source| self.apply(source)
    }
}

/// Calls `on_absent` if `source` is empty.
pub fn run_if_absent<P, G>(source: PrimitiveOptional<P>, on_absent: G)
where
    P: Primitive,
    G: FnOnce(),
{
    if source.is_empty() {
        on_absent();
    }
}

/// Point-free form of [`run_if_absent`].
pub fn if_absent<P, G>(mut on_absent: G) -> impl FnMut(PrimitiveOptional<P>)
where
    P: Primitive,
    G: FnMut(),
{
    move |source| run_if_absent(source, &mut on_absent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::{none, some};
    use core::cell::Cell;

    #[test]
    fn apply_fires_only_when_present() {
        let mut seen = Vec::new();
        let mut check = if_present(|v: i32| seen.push(v));
        check.apply(some(3));
        check.apply(none());
        check.accept(4);
        drop(check);
        assert_eq!(seen, vec![3, 4]);
    }

    #[test]
    fn fallback_present_case() {
        let mut present = Vec::new();
        let mut absent = 0;
        let mut branch = if_present(|v: i64| present.push(v)).or_else(|| absent += 1);
        branch.apply(some(9));
        drop(branch);
        assert_eq!(present, vec![9]);
        assert_eq!(absent, 0);
    }

    #[test]
    fn fallback_absent_case() {
        let mut present = Vec::new();
        let mut absent = 0;
        let mut branch = if_present(|v: f64| present.push(v)).or_else(|| absent += 1);
        branch.apply(none());
        drop(branch);
        assert!(present.is_empty());
        assert_eq!(absent, 1);
    }

    #[test]
    fn exactly_one_fires_per_call() {
        let present = Cell::new(0);
        let absent = Cell::new(0);
        let mut f = if_present(|_: i32| present.set(present.get() + 1))
            .or_else(|| absent.set(absent.get() + 1))
            .into_fn();
        for (calls, o) in [some(1), none(), some(0), none(), none()].into_iter().enumerate() {
            f(o);
            assert_eq!(present.get() + absent.get(), calls + 1);
        }
        assert_eq!(present.get(), 2);
        assert_eq!(absent.get(), 3);
    }

    #[test]
    fn run_if_absent_mirrors_presence() {
        let mut calls = 0;
        run_if_absent(some(1), || calls += 1);
        run_if_absent(none::<i32>(), || calls += 1);
        assert_eq!(calls, 1);

        let mut absent = 0;
        let mut f = if_absent::<i64, _>(|| absent += 1);
        f(some(0i64));
        f(none());
        f(none());
        drop(f);
        assert_eq!(absent, 2);
    }
}
