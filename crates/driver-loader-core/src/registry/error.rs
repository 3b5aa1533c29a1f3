use std::path::PathBuf;

use thiserror::Error;

use crate::config::error::ConfigError;
use crate::descriptor::error::CodecError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error reading descriptor document '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid descriptor document '{path}': {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("Failed to encode descriptor for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: CodecError,
    },

    #[error("Invalid key pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Descriptor store backend '{backend}' failed: {message}")]
    Backend { backend: String, message: String },
}
