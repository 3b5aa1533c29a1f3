use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed driver descriptor: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode driver descriptor '{coordinates}': {source}")]
    Encode {
        coordinates: String,
        #[source]
        source: serde_json::Error,
    },
}
