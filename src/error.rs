//! Error types for sheet configuration and position validation
//!
//! Composition itself never fails; these errors only surface from config
//! loading and from explicit `SwitchablePositions::validate` calls.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::SheetPosition;

#[derive(Debug, Error)]
pub enum SheetError {
    /// The switchable position set has no entries
    #[error("switchable positions are empty")]
    Empty,

    /// The bound position is not one the user can switch to
    #[error("position {0:?} is not in the switchable set")]
    NotSwitchable(SheetPosition),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("failed to parse sheet config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SheetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SheetError::Io {
            path: path.into(),
            source,
        }
    }
}
