//! # Driver Loader Errors
//!
//! Defines the crate-wide [`Error`], which aggregates the typed errors of each
//! subsystem: descriptor decoding, the descriptor store, the plugin runtime,
//! load planning, configuration and the session contract.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::descriptor::error::CodecError;
use crate::loading::error::LoadError;
use crate::registry::error::StoreError;
use crate::runtime::error::{InstallError, RuntimeError};
use crate::session::error::SessionError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Planning a directive failed
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Descriptor store error: {0}")]
    Store(#[from] StoreError),

    #[error("Descriptor codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Plugin runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("Install error: {0}")]
    Install(#[from] InstallError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Raised after a full batch when strict mode is enabled and anything failed
    #[error("Strict mode: {failed} of {attempted} driver loads failed")]
    Strict { failed: usize, attempted: usize },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
