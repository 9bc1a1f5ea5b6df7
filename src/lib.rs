//! Bankmetrics - metrics facade for the banking application
//!
//! This library translates named domain events (logins, API traffic, user
//! lifecycle, background work, host resources) into Prometheus registry
//! operations, and exports the gathered registry in Prometheus text format.
//!
//! # Features
//! - **system**: background system metrics collector (enabled by default)
//!
//! # Architecture
//! - `metrics`: the facade, global registration, and system collector
//! - `metrics_core`: `MetricsRecorder` trait and noop implementation
//! - `config`: configuration management
//! - `system`: logging initialization
//! - `errors`: crate error type

pub mod config;
pub mod errors;
pub mod metrics;
pub mod metrics_core;
mod metrics_macros;
pub mod system;
