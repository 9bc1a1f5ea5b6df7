//! System metrics collection
//!
//! Samples process and host resources with sysinfo and pushes them through
//! the metrics facade.  A background task periodically refreshes the
//! samples.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use sysinfo::{Disks, Pid, ProcessesToUpdate, System};
use tokio::time::{Duration, interval};

use super::registry::get_metrics;
use crate::config::get_config;

/// Cached system info for metrics collection
static SYSTEM: Lazy<Mutex<System>> = Lazy::new(|| Mutex::new(System::new()));

/// Collector start time, used for the uptime gauge
static STARTED_AT: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Spawn a background task that periodically updates system metrics.
///
/// Should be called once during application startup, after the metrics
/// facade has been initialized.  The update period comes from the
/// `[metrics]` configuration section.
pub fn spawn_system_metrics_updater() {
    let period = get_config().metrics.update_interval.max(1);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(period));
        loop {
            ticker.tick().await;
            update_system_metrics();
        }
    });
}

/// Update system metrics (memory, CPU, disk, uptime)
pub fn update_system_metrics() {
    let Some(metrics) = get_metrics() else {
        return;
    };

    let pid = Pid::from_u32(std::process::id());

    let mut sys = match SYSTEM.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("System metrics mutex was poisoned, recovering");
            poisoned.into_inner()
        }
    };

    // Refresh only the current process
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    if let Some(process) = sys.process(pid) {
        metrics.track_memory_usage(process.memory() as f64 / BYTES_PER_MB);
        metrics.track_cpu_usage(process.cpu_usage() as f64);
    }

    // Used space across all mounted disks
    let disks = Disks::new_with_refreshed_list();
    let used_bytes: u64 = disks
        .iter()
        .map(|disk| disk.total_space().saturating_sub(disk.available_space()))
        .sum();
    metrics.track_disk_space_usage(used_bytes as f64 / BYTES_PER_GB);

    let uptime = (Utc::now() - *STARTED_AT).num_seconds().max(0) as u64;
    metrics.track_system_uptime(uptime);
}
