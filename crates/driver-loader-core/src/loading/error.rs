use thiserror::Error;

use crate::descriptor::error::CodecError;
use crate::registry::error::StoreError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Descriptor store query failed: {0}")]
    Store(#[from] StoreError),

    /// A stored descriptor could not be decoded; planning stops here
    #[error("Failed to decode descriptor '{field}' under key '{key}': {source}")]
    Decode {
        key: String,
        field: String,
        #[source]
        source: CodecError,
    },

    #[error("unresolvable pin: {code}@{version}")]
    UnresolvablePin { code: String, version: String },
}
