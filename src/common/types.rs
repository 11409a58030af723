/// A generic boxed error type.
pub type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// A convenient Result alias returning `AnyError`.
pub type AnyResult<T> = std::result::Result<T, AnyError>;

/// What a finite sample source does once its last frame has been read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfStream {
    /// Wrap around to the first frame.
    Loop,
    /// Keep yielding silence.
    #[default]
    Silence,
    /// Report [`SourceError::Exhausted`](crate::common::SourceError::Exhausted).
    Error,
}

impl std::fmt::Display for EndOfStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Loop => "loop",
            Self::Silence => "silence",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}
