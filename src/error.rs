use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::world::ValidationError;

/// Everything that can go wrong while bringing a world into memory.
///
/// The interpreter itself has no error type: once a `GameState` exists, every
/// command resolves to a message.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed world file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid world: {0}")]
    Invalid(String),

    #[error("world failed validation: {}", join_issues(.0))]
    Validation(Vec<ValidationError>),
}

fn join_issues(issues: &[ValidationError]) -> String {
    issues
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, WorldError>;
