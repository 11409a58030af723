//! Stereo frame type and the pull-source capability the resampler drives.

use std::convert::Infallible;
use std::marker::PhantomData;

/// One frame of two-channel audio.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StereoPair {
    pub left: f32,
    pub right: f32,
}

impl StereoPair {
    pub const SILENCE: Self = Self::new(0.0, 0.0);

    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Same value on both channels.
    pub const fn mono(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Linear interpolation towards `other` at fractional position `t`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            left: self.left + (other.left - self.left) * t,
            right: self.right + (other.right - self.right) * t,
        }
    }
}

/// A pull source of stereo frames.
///
/// Every call must return the *next* frame in sequence. `C` is opaque
/// per-call context handed through unchanged by whoever drives the source.
pub trait SampleGenerator<C: ?Sized> {
    type Error;

    fn next_sample(&mut self, ctx: &mut C) -> Result<StereoPair, Self::Error>;
}

impl<C: ?Sized, F> SampleGenerator<C> for F
where
    F: FnMut(&mut C) -> StereoPair,
{
    type Error = Infallible;

    #[inline]
    fn next_sample(&mut self, ctx: &mut C) -> Result<StereoPair, Infallible> {
        Ok(self(ctx))
    }
}

/// Adapts a closure that can fail into a [`SampleGenerator`].
pub struct Fallible<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> Fallible<F, E> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _error: PhantomData,
        }
    }
}

impl<C: ?Sized, F, E> SampleGenerator<C> for Fallible<F, E>
where
    F: FnMut(&mut C) -> Result<StereoPair, E>,
{
    type Error = E;

    #[inline]
    fn next_sample(&mut self, ctx: &mut C) -> Result<StereoPair, E> {
        (self.f)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = StereoPair::new(0.0, 1.0);
        let b = StereoPair::new(1.0, -1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.5), StereoPair::new(0.5, 0.0));
    }

    #[test]
    fn closure_is_a_generator() {
        let mut counter = 0.0f32;
        let mut g = |step: &mut f32| {
            counter += *step;
            StereoPair::mono(counter)
        };
        let mut step = 0.25;
        assert_eq!(g.next_sample(&mut step), Ok(StereoPair::mono(0.25)));
        assert_eq!(g.next_sample(&mut step), Ok(StereoPair::mono(0.5)));
    }

    #[test]
    fn fallible_passes_errors_through() {
        let mut g = Fallible::new(|_: &mut ()| Err::<StereoPair, _>("dry"));
        assert_eq!(g.next_sample(&mut ()), Err("dry"));
    }
}
