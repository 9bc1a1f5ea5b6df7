//! Core metrics trait (no backend required).
//!
//! Provides `MetricsRecorder` and `NoopMetrics` so that application
//! components can accept `Arc<dyn MetricsRecorder>` without committing to a
//! concrete backend.  In tests the noop is injected and the compiler
//! optimises every call away.

use std::sync::Arc;

/// Trait for recording application metrics.
///
/// All methods are no-op by default, allowing partial implementation.
/// Implementations must be thread-safe (Send + Sync).
#[allow(unused_variables)]
pub trait MetricsRecorder: Send + Sync {
    // ===== Users & sessions =====

    /// Set the total registered users gauge
    fn track_total_users(&self, total_users: i64) {}

    /// Set the currently active sessions gauge
    fn track_active_sessions(&self, active_sessions: i64) {}

    // ===== Authentication =====

    /// Record a failed login attempt.
    ///
    /// The count argument is accepted for interface compatibility; the
    /// counter advances by exactly 1 per call.
    fn track_failed_logins(&self, failed_logins: i64) {}

    /// Record a successful login attempt (same by-1 semantics as failures)
    fn track_successful_logins(&self, successful_logins: i64) {}

    // ===== API traffic =====

    /// Record a request against a named endpoint
    fn track_api_requests(&self, endpoint: &str) {}

    /// Observe an endpoint response time in milliseconds
    fn track_api_response_time(&self, endpoint: &str, response_time_ms: u64) {}

    /// Observe an external API response time in milliseconds
    fn track_external_api_response_time(&self, api_name: &str, response_time_ms: u64) {}

    // ===== User lifecycle =====

    /// Record a user registration
    fn track_user_registrations(&self, registrations: i64) {}

    /// Record a user deletion
    fn track_user_deletions(&self, deletions: i64) {}

    // ===== Host resources =====

    /// Set the used disk space gauge (GB)
    fn track_disk_space_usage(&self, disk_space_gb: f64) {}

    /// Set the process memory usage gauge (MB)
    fn track_memory_usage(&self, memory_mb: f64) {}

    /// Set the CPU usage gauge (0-100)
    fn track_cpu_usage(&self, cpu_percent: f64) {}

    /// Set the system uptime gauge (seconds)
    fn track_system_uptime(&self, uptime_secs: u64) {}

    // ===== Application lifecycle =====

    /// Add one to the restart counter
    fn increment_restart_count(&self) {}

    /// Push the current restart counter value into its gauge
    fn track_restart_count(&self) {}

    // ===== Background work =====

    /// Set the task queue size gauge
    fn track_queue_size(&self, queue_size: i64) {}

    /// Set the pending email notifications gauge
    fn track_pending_email_notifications(&self, pending_emails: i64) {}

    /// Record a batch job processing event
    fn track_batch_job_processing(&self, processed_items: i64) {}

    /// Record a scheduled task execution
    fn track_scheduled_tasks_executed(&self, tasks_executed: i64) {}

    // ===== Database =====

    /// Record a database query execution
    fn track_database_queries(&self, query_count: i64) {}

    // ===== Health =====

    /// Set the application error rate gauge
    fn track_error_rate(&self, error_rate: f64) {}
}

/// Noop metrics implementation for testing and metrics-disabled builds.
///
/// All methods do nothing, allowing code to run without a Prometheus
/// registry.
pub struct NoopMetrics;

impl MetricsRecorder for NoopMetrics {}

impl NoopMetrics {
    pub fn new() -> Self {
        Self
    }

    pub fn arc() -> Arc<dyn MetricsRecorder> {
        Arc::new(Self::new())
    }
}

impl Default for NoopMetrics {
    fn default() -> Self {
        Self::new()
    }
}
