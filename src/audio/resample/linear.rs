//! `resample/linear.rs` — pull-based linear-interpolation resampler.
//!
//! The resampler walks a phase accumulator along the input-time axis. Each
//! output frame advances it by `internal_rate / target_rate`; whenever it
//! crosses 1.0 a fresh frame is pulled from the generator.

use std::marker::PhantomData;

use super::generator::{SampleGenerator, StereoPair};
use crate::common::ResampleError;

pub struct ResamplerLinear<'g, C: ?Sized, G: ?Sized> {
    internal_rate: u32,
    target_rate: u32,
    /// Input frames consumed per output frame (< 1.0 upsamples, > 1.0 downsamples).
    step: f64,
    /// Fractional read head between `previous` and `current`.
    phase: f64,
    /// `(previous, current)`; `None` until the first pull after init or reset.
    history: Option<(StereoPair, StereoPair)>,
    generator: &'g mut G,
    _ctx: PhantomData<fn(&mut C)>,
}

impl<'g, C, G> ResamplerLinear<'g, C, G>
where
    C: ?Sized,
    G: SampleGenerator<C> + ?Sized,
{
    pub fn new(
        internal_rate: u32,
        target_rate: u32,
        generator: &'g mut G,
    ) -> Result<Self, ResampleError> {
        if internal_rate == 0 || target_rate == 0 {
            return Err(ResampleError::InvalidConfiguration {
                internal_rate,
                target_rate,
            });
        }

        let step = internal_rate as f64 / target_rate as f64;
        Ok(Self {
            internal_rate,
            target_rate,
            step,
            phase: Self::priming_phase(step),
            history: None,
            generator,
            _ctx: PhantomData,
        })
    }

    /// Phase that makes the next `run` pull `ceil(step)` frames (at least one)
    /// so a downsampling stream consumes the same count on every call.
    #[inline]
    fn priming_phase(step: f64) -> f64 {
        step.max(1.0)
    }

    /// Produce one output frame at the target rate.
    ///
    /// Pulls as many input frames as the phase requires. A generator error is
    /// returned as-is; frames pulled before it stay consumed.
    pub fn run(&mut self, ctx: &mut C) -> Result<StereoPair, G::Error> {
        while self.phase >= 1.0 {
            let next = self.generator.next_sample(ctx)?;
            self.history = Some(match self.history {
                Some((_, current)) => (current, next),
                None => (next, next),
            });
            self.phase -= 1.0;
        }

        // phase < 1.0 and at least one pull happened since init/reset
        let (previous, current) = self.history.unwrap_or_default();
        let out = previous.lerp(current, self.phase as f32);

        self.phase += self.step;
        Ok(out)
    }

    /// Fill an interleaved `[L, R, L, R, ...]` buffer, one `run` per frame.
    ///
    /// Returns the number of frames written. A trailing odd sample is left untouched.
    pub fn process_interleaved(
        &mut self,
        ctx: &mut C,
        out: &mut [f32],
    ) -> Result<usize, G::Error> {
        let mut frames = 0;
        for frame in out.chunks_exact_mut(2) {
            let s = self.run(ctx)?;
            frame[0] = s.left;
            frame[1] = s.right;
            frames += 1;
        }
        Ok(frames)
    }

    /// Discard phase and history after a seek or loop; the binding is kept.
    pub fn reset(&mut self) {
        self.phase = Self::priming_phase(self.step);
        self.history = None;
    }

    pub fn internal_rate(&self) -> u32 {
        self.internal_rate
    }

    pub fn target_rate(&self) -> u32 {
        self.target_rate
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns `true` if no conversion is needed (internal == target rate).
    pub fn is_passthrough(&self) -> bool {
        self.internal_rate == self.target_rate
    }

    pub fn is_primed(&self) -> bool {
        self.history.is_some()
    }
}
