use super::resample::{SampleGenerator, StereoPair};
use crate::common::{EndOfStream, SourceError};

/// Plays a decoded buffer at the internal rate, one frame per pull.
pub struct BufferSource<'a> {
    samples: &'a [StereoPair],
    position: usize,
    policy: EndOfStream,
}

impl<'a> BufferSource<'a> {
    pub fn new(samples: &'a [StereoPair], policy: EndOfStream) -> Self {
        Self {
            samples,
            position: 0,
            policy,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the playback cursor; positions past the end are clamped.
    pub fn seek(&mut self, frame: usize) {
        self.position = frame.min(self.samples.len());
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.samples.len()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn policy(&self) -> EndOfStream {
        self.policy
    }
}

impl<C: ?Sized> SampleGenerator<C> for BufferSource<'_> {
    type Error = SourceError;

    fn next_sample(&mut self, _ctx: &mut C) -> Result<StereoPair, SourceError> {
        if self.is_exhausted() {
            match self.policy {
                EndOfStream::Loop if !self.samples.is_empty() => self.position = 0,
                EndOfStream::Loop | EndOfStream::Silence => return Ok(StereoPair::SILENCE),
                EndOfStream::Error => {
                    return Err(SourceError::Exhausted {
                        position: self.position,
                    });
                }
            }
        }

        let s = self.samples[self.position];
        self.position += 1;
        Ok(s)
    }
}
