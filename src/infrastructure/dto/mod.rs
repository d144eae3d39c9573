//! Data transfer objects for external interfaces.

pub mod http;
