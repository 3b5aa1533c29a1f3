use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Plugin runtime unavailable: {0}")]
    Unavailable(String),

    #[error("Plugin runtime query '{operation}' failed: {message}")]
    QueryFailed { operation: String, message: String },
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Runtime rejected driver '{coordinates}': {reason}")]
    Rejected { coordinates: String, reason: String },

    #[error("Artifact for driver '{coordinates}' is unavailable: {reason}")]
    ArtifactUnavailable { coordinates: String, reason: String },

    /// The loaded-plugin lookup preceding the install failed
    #[error("Plugin runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
