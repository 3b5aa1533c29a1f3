use std::fmt::Debug;

use crate::descriptor::error::CodecError;
use crate::descriptor::model::DriverDescriptor;

/// Converts between stored bytes and [`DriverDescriptor`] values.
pub trait DescriptorCodec: Send + Sync + Debug {
    /// Name of the wire format, used in diagnostics
    fn format(&self) -> &str;

    fn decode(&self, bytes: &[u8]) -> Result<DriverDescriptor, CodecError>;

    fn encode(&self, descriptor: &DriverDescriptor) -> Result<Vec<u8>, CodecError>;
}

/// JSON codec matching the registry's serialized descriptor format.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDescriptorCodec;

impl JsonDescriptorCodec {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorCodec for JsonDescriptorCodec {
    fn format(&self) -> &str {
        "json"
    }

    fn decode(&self, bytes: &[u8]) -> Result<DriverDescriptor, CodecError> {
        serde_json::from_slice(bytes).map_err(|source| CodecError::Decode { source })
    }

    fn encode(&self, descriptor: &DriverDescriptor) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(descriptor).map_err(|source| CodecError::Encode {
            coordinates: descriptor.coordinates(),
            source,
        })
    }
}
