use serde::{Deserialize, Serialize};

use crate::common::{EndOfStream, ResampleError};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EngineConfig {
    /// Rate the audio graph is processed at.
    #[serde(default = "default_internal_rate")]
    pub internal_rate: u32,
    /// Rate the output device expects.
    #[serde(default = "default_target_rate")]
    pub target_rate: u32,
    #[serde(default)]
    pub end_of_stream: EndOfStream,
}

fn default_internal_rate() -> u32 {
    44100
}

fn default_target_rate() -> u32 {
    48000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            internal_rate: default_internal_rate(),
            target_rate: default_target_rate(),
            end_of_stream: EndOfStream::default(),
        }
    }
}

impl EngineConfig {
    /// Reject a rate pair the resampler could not be built with.
    pub fn validate(&self) -> Result<(), ResampleError> {
        if self.internal_rate == 0 || self.target_rate == 0 {
            return Err(ResampleError::InvalidConfiguration {
                internal_rate: self.internal_rate,
                target_rate: self.target_rate,
            });
        }
        Ok(())
    }
}
