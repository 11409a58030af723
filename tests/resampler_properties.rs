//! Property tests for the linear resampler's pull accounting and output bounds.

use clinttools_engine::audio::{BufferSource, ResamplerLinear, StereoPair};
use clinttools_engine::common::EndOfStream;
use proptest::prelude::*;

/// Context that records how many times the generator was pulled.
#[derive(Default)]
struct Pulls {
    count: usize,
    last_two: (f32, f32),
}

fn noise_generator(seed: u32) -> impl FnMut(&mut Pulls) -> StereoPair {
    let mut state = seed | 1;
    move |pulls: &mut Pulls| {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let v = (state as f32 / u32::MAX as f32) * 2.0 - 1.0;
        pulls.count += 1;
        pulls.last_two = (pulls.last_two.1, v);
        StereoPair::new(v, -v)
    }
}

proptest! {
    /// Equal rates hand every pulled frame through untouched.
    #[test]
    fn identity_has_no_drift(
        values in prop::collection::vec(-1.0f32..1.0, 1..256),
        rate in prop::sample::select(vec![22050u32, 44100, 48000, 96000]),
    ) {
        let frames: Vec<StereoPair> =
            values.iter().map(|&v| StereoPair::new(v, v * 0.5)).collect();
        let mut source = BufferSource::new(&frames, EndOfStream::Silence);
        let mut r = ResamplerLinear::new(rate, rate, &mut source).unwrap();

        let first = r.run(&mut ()).unwrap();
        prop_assert_eq!(first, frames[0]);
        for expected in frames.iter().take(frames.len() - 1) {
            prop_assert_eq!(r.run(&mut ()).unwrap(), *expected);
        }
    }

    /// Upsampling never pulls more than once per output frame.
    #[test]
    fn upsampling_pulls_at_most_once(
        internal in 8000u32..48000,
        extra in 1u32..48000,
        seed in any::<u32>(),
    ) {
        let mut g = noise_generator(seed);
        let mut r = ResamplerLinear::new(internal, internal + extra, &mut g).unwrap();
        let mut ctx = Pulls::default();
        for _ in 0..512 {
            let before = ctx.count;
            r.run(&mut ctx).unwrap();
            prop_assert!(ctx.count - before <= 1);
        }
    }

    /// Integer downsampling by `k` pulls exactly `k` frames per output frame.
    #[test]
    fn integer_downsampling_pulls_k(
        target in prop::sample::select(vec![8000u32, 22050, 44100, 48000]),
        k in 1u32..8,
        seed in any::<u32>(),
    ) {
        let mut g = noise_generator(seed);
        let mut r = ResamplerLinear::new(target * k, target, &mut g).unwrap();
        let mut ctx = Pulls::default();
        for _ in 0..128 {
            let before = ctx.count;
            r.run(&mut ctx).unwrap();
            prop_assert_eq!(ctx.count - before, k as usize);
        }
    }

    /// Any ratio stays within the `ceil(step) + 1` pull bound and every output
    /// lies between the two most recent input frames.
    #[test]
    fn bounded_pulls_and_interpolation(
        internal in 1u32..192000,
        target in 1u32..192000,
        seed in any::<u32>(),
    ) {
        prop_assume!(internal / target < 64);
        let mut g = noise_generator(seed);
        let mut r = ResamplerLinear::new(internal, target, &mut g).unwrap();
        let bound = r.step().ceil() as usize + 1;
        let mut ctx = Pulls::default();
        for _ in 0..256 {
            let before = ctx.count;
            let out = r.run(&mut ctx).unwrap();
            prop_assert!(ctx.count - before <= bound);

            let (a, b) = ctx.last_two;
            let (lo, hi) = if ctx.count == 1 { (b, b) } else { (a.min(b), a.max(b)) };
            // f32 rounding of the fractional position
            let eps = 1e-6;
            prop_assert!(
                out.left >= lo - eps && out.left <= hi + eps,
                "{} not in [{}, {}]",
                out.left,
                lo,
                hi
            );
        }
    }

    /// After a reset, replaying the same input yields the same output.
    #[test]
    fn reset_is_idempotent(
        internal in 1000u32..96000,
        target in 1000u32..96000,
        values in prop::collection::vec(-1.0f32..1.0, 1..64),
    ) {
        let frames: Vec<StereoPair> = values.iter().map(|&v| StereoPair::mono(v)).collect();
        // the cursor lives in the context so the owner can rewind it on seek
        let mut g = |cursor: &mut usize| {
            let s = frames[*cursor % frames.len()];
            *cursor += 1;
            s
        };
        let mut r = ResamplerLinear::new(internal, target, &mut g).unwrap();

        let mut cursor = 0usize;
        let first: Vec<StereoPair> = (0..100).map(|_| r.run(&mut cursor).unwrap()).collect();
        for _ in 0..37 {
            r.run(&mut cursor).unwrap();
        }

        r.reset();
        cursor = 0;
        let second: Vec<StereoPair> = (0..100).map(|_| r.run(&mut cursor).unwrap()).collect();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn exhausted_source_error_reaches_caller() {
    let frames = [StereoPair::mono(0.25); 3];
    let mut source = BufferSource::new(&frames, EndOfStream::Error);
    let mut r = ResamplerLinear::new(48000, 48000, &mut source).unwrap();
    for _ in 0..3 {
        assert_eq!(r.run(&mut ()).unwrap(), StereoPair::mono(0.25));
    }
    assert!(r.run(&mut ()).is_err());
}
