pub mod resample;
pub mod source;

pub use resample::{Fallible, ResamplerLinear, SampleGenerator, StereoPair};
pub use source::BufferSource;
