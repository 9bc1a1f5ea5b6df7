//! System-level modules
//!
//! Startup concerns owned by the hosting application:
//! - Logging initialization

pub mod logging;
