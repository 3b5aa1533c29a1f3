use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported configuration format for path: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("I/O error reading configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Deserialization from '{format}' failed: {message}")]
    Deserialize { format: String, message: String },

    #[error("Serialization to '{format}' failed: {message}")]
    Serialize { format: String, message: String },

    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}
