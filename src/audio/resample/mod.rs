//! Sample-rate conversion between the engine's internal rate and the device rate.
//!
//! | Type | Quality | CPU Cost |
//! |---|---|---|
//! | [`ResamplerLinear`] | Okay (fast path) | Very low |

pub mod generator;
pub mod linear;

pub use generator::{Fallible, SampleGenerator, StereoPair};
pub use linear::ResamplerLinear;
