use std::{fmt, io};
use thiserror::Error;

/// Part of the payload that was being read when extraction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Weather,
    Main,
    Wind,
    Snow,
    Rain,
    TopLevel,
    Art,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Weather => "weather",
            Stage::Main => "main",
            Stage::Wind => "wind",
            Stage::Snow => "snow",
            Stage::Rain => "rain",
            Stage::TopLevel => "top-level",
            Stage::Art => "art",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("payload is not an object")]
    NotObject,

    #[error("`weather` is not an array")]
    NotArray,
}

/// Everything that can end a run.
#[derive(Error, Debug)]
pub enum Error {
    /// DNS, TLS, connection, timeout or a non-success HTTP status
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not JSON
    #[error("response is not JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A required key is missing or has the wrong type
    #[error("error in {stage} part: {reason}")]
    Field { stage: Stage, reason: String },

    /// The `--dump` document could not be serialized
    #[error("cannot serialize dump: {0}")]
    Dump(serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn field(stage: Stage, reason: impl Into<String>) -> Self {
        Error::Field {
            stage,
            reason: reason.into(),
        }
    }

    /// Short tag printed ahead of the error text.
    pub fn label(&self) -> &'static str {
        match self {
            Error::Transport(_) => "Network error",
            Error::Json(_) => "Parse error",
            Error::Shape(_) => "Malformed payload",
            Error::Field { .. } => "Missing field",
            Error::Dump(_) | Error::Io(_) => "Output error",
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Field { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
