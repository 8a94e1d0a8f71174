//! Collector-style reduction: supplier, accumulate, finish.
//!
//! A [`Collector`] is written once against a stream of values and can be
//! applied unchanged to a single optional via
//! [`PrimitiveOptional::collect_with`] or to any iterator via
//! [`Collector::collect_from`].

use core::marker::PhantomData;

use primitives::Primitive;
use tracing::trace;

use crate::optional::PrimitiveOptional;

/// Three-phase reduction over values of type `T`.
pub trait Collector<T> {
    /// Mutable accumulation state.
    type Acc;
    /// Final result.
    type Output;

    /// Creates a fresh accumulator.
    fn supplier(&self) -> Self::Acc;

    /// Folds one value into the accumulator.
    fn accumulate(&self, acc: &mut Self::Acc, value: T);

    /// Turns the accumulator into the result.
    fn finish(&self, acc: Self::Acc) -> Self::Output;

    /// Runs the full protocol over every item of `items`.
    fn collect_from<I>(&self, items: I) -> Self::Output
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let mut acc = self.supplier();
        for v in items {
            self.accumulate(&mut acc, v);
        }
        self.finish(acc)
    }
}

/// Collector assembled from three closures; see [`from_fns`].
pub struct FnCollector<T, S, A, F> {
    supplier: S,
    accumulator: A,
    finisher: F,
    _item: PhantomData<fn(T)>,
}

/// Builds a collector from a supplier, an accumulation step and a finisher.
pub fn from_fns<T, Acc, R, S, A, F>(
    supplier: S,
    accumulator: A,
    finisher: F,
) -> FnCollector<T, S, A, F>
where
    S: Fn() -> Acc,
    A: Fn(&mut Acc, T),
    F: Fn(Acc) -> R,
{
    FnCollector { supplier, accumulator, finisher, _item: PhantomData }
}

impl<T, Acc, R, S, A, F> Collector<T> for FnCollector<T, S, A, F>
where
    S: Fn() -> Acc,
    A: Fn(&mut Acc, T),
    F: Fn(Acc) -> R,
{
    type Acc = Acc;
    type Output = R;

    fn supplier(&self) -> Acc {
        (self.supplier)()
    }

    fn accumulate(&self, acc: &mut Acc, value: T) {
        (self.accumulator)(acc, value)
    }

    fn finish(&self, acc: Acc) -> R {
        (self.finisher)(acc)
    }
}

/// Sums values, starting from the kind's zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Summing;

pub fn summing() -> Summing {
    Summing
}

impl<P> Collector<P> for Summing
where
    P: Primitive + core::ops::Add<Output = P>,
{
    type Acc = P;
    type Output = P;

    fn supplier(&self) -> P {
        P::default()
    }

    fn accumulate(&self, acc: &mut P, value: P) {
        *acc = *acc + value;
    }

    fn finish(&self, acc: P) -> P {
        acc
    }
}

/// Counts values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counting;

pub fn counting() -> Counting {
    Counting
}

impl<T> Collector<T> for Counting {
    type Acc = usize;
    type Output = usize;

    fn supplier(&self) -> usize {
        0
    }

    fn accumulate(&self, acc: &mut usize, _value: T) {
        *acc += 1;
    }

    fn finish(&self, acc: usize) -> usize {
        acc
    }
}

/// Gathers values into a `Vec`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToVec;

pub fn to_vec() -> ToVec {
    ToVec
}

impl<T> Collector<T> for ToVec {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn supplier(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Vec<T>, value: T) {
        acc.push(value);
    }

    fn finish(&self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

impl<P: Primitive> PrimitiveOptional<P> {
    /// Reduces this optional with `collector`.
    ///
    /// `supplier` and `finish` run exactly once; `accumulate` runs once if
    /// the optional is present and never if it is empty.
    pub fn collect_with<C>(&self, collector: &C) -> C::Output
    where
        C: Collector<P>,
    {
        trace!(kind = %P::KIND, present = self.is_present(), "collecting optional");
        let mut acc = collector.supplier();
        if let PrimitiveOptional::Present(v) = *self {
            collector.accumulate(&mut acc, v);
        }
        collector.finish(acc)
    }
}
