use std::path::PathBuf;

use thiserror::Error;

use crate::common::types::AnyError;

/// Errors raised while configuring a resampler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResampleError {
    /// Either rate was zero.
    #[error(
        "invalid resampler configuration: internal rate {internal_rate} Hz, target rate {target_rate} Hz (both must be > 0)"
    )]
    InvalidConfiguration { internal_rate: u32, target_rate: u32 },
}

/// Errors produced by [`BufferSource`](crate::audio::source::BufferSource).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("sample buffer exhausted at frame {position}")]
    Exhausted { position: usize },
}

/// Stage of project opening, used to tag hook failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStage {
    AudioPool,
    WaveEditor,
    Daw,
}

impl std::fmt::Display for ProjectStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::AudioPool => "audio pool",
            Self::WaveEditor => "wave editor",
            Self::Daw => "DAW",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ProjectError {
    /// The folder has no `clinttools.project` marker file.
    #[error("project folder {} does not contain a clinttools.project file", .folder.display())]
    NotFound { folder: PathBuf },

    #[error("failed to open {stage}: {source}")]
    Hook {
        stage: ProjectStage,
        #[source]
        source: AnyError,
    },

    #[error("project i/o error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProjectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code historically used by the engine for a missing project.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 321,
            Self::Hook { .. } | Self::Io { .. } => 1,
        }
    }
}
