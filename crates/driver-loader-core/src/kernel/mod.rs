//! # Driver Loader Kernel
//!
//! The `kernel` module ties the loader together for a single startup pass.
//!
//! - **Bootstrapping**: [`Application`](bootstrap::Application) owns the
//!   planner and the dispatcher and runs the configured init-load directive.
//! - **Constants**: key patterns, directive symbols and environment variable
//!   names live in `constants`.
//! - **Error Handling**: the crate-wide [`Error`](error::Error) and its
//!   `Result` alias are defined in `error`.
pub mod bootstrap;
pub mod constants;
pub mod error;

pub use bootstrap::Application;
pub use error::{Error, Result};
