use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two selection prompts produced a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Channel,
    Video,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Channel => f.write_str("channel"),
            Selection::Video => f.write_str("video"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ChooserError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read directory {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid {kind} selection {input:?}: {source}")]
    InvalidNumber {
        kind: Selection,
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{kind} index out of range")]
    OutOfRange { kind: Selection },

    #[error("input closed before a {kind} was chosen")]
    InputClosed { kind: Selection },

    #[error("failed to launch player {program:?}: {source}")]
    Player {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to delete {}: {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChooserError>;
