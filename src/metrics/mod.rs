//! Prometheus metrics module
//!
//! Provides the metrics facade, recorder implementations, and text-format
//! export.
//!
//! # Feature
//! The background system collector requires the `system` feature.

mod recorder;
mod registry;
#[cfg(feature = "system")]
mod system;

pub use recorder::PrometheusRecorder;
pub use registry::{Metrics, get_metrics, init_metrics};
#[cfg(feature = "system")]
pub use system::{spawn_system_metrics_updater, update_system_metrics};
