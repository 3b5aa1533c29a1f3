//! # Driver Descriptors
//!
//! A [`DriverDescriptor`] is one registered, installable driver artifact: an
//! id, a driver code shared by every version of the same driver family, a
//! version token, and opaque metadata handed to the runtime unchanged.
//!
//! Descriptors travel through the store as bytes; [`DescriptorCodec`] turns
//! them back into values. [`JsonDescriptorCodec`] is the stock implementation.
pub mod codec;
pub mod error;
pub mod model;

pub use codec::{DescriptorCodec, JsonDescriptorCodec};
pub use error::CodecError;
pub use model::DriverDescriptor;
