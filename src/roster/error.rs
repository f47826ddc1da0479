use crate::form::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Could not import {}: {source}", .path.display())]
    ImportFatal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not export {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
