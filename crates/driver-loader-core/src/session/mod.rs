//! # Driver Session Contract
//!
//! Capabilities a loaded SQL driver plugin may expose to the host. Every
//! operation of [`SchemaSession`] defaults to
//! [`SessionError::NotImplemented`], so a driver only overrides what it
//! actually supports. Statement execution itself lives in the drivers.
pub mod error;
pub mod page;
pub mod traits;

pub use error::SessionError;
pub use page::{Page, Pageable};
pub use traits::{PkSetter, Row, SchemaSession, SessionResult};
