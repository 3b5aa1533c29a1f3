pub mod common;
pub mod dispatcher_tests;
pub mod version_tests;
