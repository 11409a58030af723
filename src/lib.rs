//! Signal-path core of the Clinttools engine: pull-based sample-rate
//! conversion from the internal processing rate to the device rate, plus the
//! project folder contract the engine must satisfy before audio flows.

pub mod audio;
pub mod common;
pub mod configs;
pub mod project;

pub use audio::{BufferSource, ResamplerLinear, SampleGenerator, StereoPair};
pub use common::{EndOfStream, ProjectError, ResampleError, SourceError};
pub use configs::Config;
