//! Metrics facade and registry wiring
//!
//! Defines every metric family exported by the application and the
//! operations that feed them.  Each tracking operation performs exactly one
//! registry call; the facade adds no aggregation of its own.

use once_cell::sync::OnceCell;
use prometheus::{
    CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::{MetricsError, Result};

/// Global facade instance, set once by [`init_metrics`]
static METRICS: OnceCell<Metrics> = OnceCell::new();

/// Response-time histogram buckets, in milliseconds (1ms .. ~8s)
const MILLIS_BUCKETS: &[f64] = &[
    1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0, 2048.0, 4096.0, 8192.0,
];

/// Application metrics container
pub struct Metrics {
    /// Shared Prometheus registry all families are registered into
    registry: Registry,

    // ===== Users & sessions =====
    total_users: Gauge,
    active_sessions: Gauge,

    // ===== Authentication =====
    failed_logins: CounterVec,
    successful_logins: CounterVec,

    // ===== API traffic =====
    api_requests: CounterVec,
    api_response_time: HistogramVec,
    external_api_response_time: HistogramVec,

    // ===== User lifecycle =====
    user_registrations: CounterVec,
    user_deletions: CounterVec,

    // ===== Host resources =====
    disk_space_usage: Gauge,
    memory_usage: Gauge,
    cpu_usage: Gauge,
    system_uptime: Gauge,

    // ===== Application lifecycle =====
    /// Reported value of the restart counter
    application_restart_count: Gauge,
    /// Restart counter itself; incremented and reported as two separate steps
    restart_count: AtomicU64,

    // ===== Background work =====
    queue_size: Gauge,
    pending_email_notifications: Gauge,
    batch_job_processing: CounterVec,
    scheduled_tasks_executed: CounterVec,

    // ===== Database =====
    database_queries: CounterVec,

    // ===== Health =====
    error_rate: Gauge,
}

impl Metrics {
    /// Create a facade registered into a caller-supplied registry.
    ///
    /// The registry is shared (cheap to clone) and stays owned by the
    /// hosting application; the facade only registers into it and gathers
    /// from it.  Fails if any family is already registered.
    pub fn with_registry(registry: Registry) -> Result<Self> {
        // Users & sessions
        let total_users = Gauge::new("total_users", "Total number of registered users")?;
        let active_sessions =
            Gauge::new("active_sessions", "Number of currently active sessions")?;

        // Authentication
        let failed_logins = CounterVec::new(
            Opts::new("failed_logins", "Total number of failed login attempts"),
            &["status"],
        )?;
        let successful_logins = CounterVec::new(
            Opts::new(
                "successful_logins",
                "Total number of successful login attempts",
            ),
            &["status"],
        )?;

        // API traffic
        let api_requests = CounterVec::new(
            Opts::new("api_requests", "Total number of API requests by endpoint"),
            &["endpoint"],
        )?;
        let api_response_time = HistogramVec::new(
            HistogramOpts::new("api_response_time", "API response time in milliseconds")
                .buckets(MILLIS_BUCKETS.to_vec()),
            &["endpoint"],
        )?;
        let external_api_response_time = HistogramVec::new(
            HistogramOpts::new(
                "external_api_response_time",
                "External API response time in milliseconds",
            )
            .buckets(MILLIS_BUCKETS.to_vec()),
            &["api_name"],
        )?;

        // User lifecycle
        let user_registrations = CounterVec::new(
            Opts::new("user_registrations", "Total number of user registrations"),
            &["action"],
        )?;
        let user_deletions = CounterVec::new(
            Opts::new("user_deletions", "Total number of user deletions"),
            &["action"],
        )?;

        // Host resources
        let disk_space_usage = Gauge::new("disk_space_usage", "Used disk space in GB")?;
        let memory_usage = Gauge::new("memory_usage", "Process memory usage in MB")?;
        let cpu_usage = Gauge::new("cpu_usage", "CPU usage percentage")?;
        let system_uptime = Gauge::new("system_uptime", "System uptime in seconds")?;

        // Application lifecycle
        let application_restart_count = Gauge::new(
            "application_restart_count",
            "Number of application restarts observed",
        )?;

        // Background work
        let queue_size = Gauge::new("queue_size", "Number of tasks waiting in the queue")?;
        let pending_email_notifications = Gauge::new(
            "pending_email_notifications",
            "Number of pending email notifications",
        )?;
        let batch_job_processing = CounterVec::new(
            Opts::new(
                "batch_job_processing",
                "Total number of batch job processing events",
            ),
            &["job"],
        )?;
        let scheduled_tasks_executed = CounterVec::new(
            Opts::new(
                "scheduled_tasks_executed",
                "Total number of scheduled tasks executed",
            ),
            &["task"],
        )?;

        // Database
        let database_queries = CounterVec::new(
            Opts::new("database_queries", "Total number of database queries"),
            &["operation"],
        )?;

        // Health
        let error_rate = Gauge::new("error_rate", "Application error rate")?;

        // Build info, set once and never touched again
        let build_info = Gauge::with_opts(
            Opts::new("build_info", "Build information")
                .const_label("version", env!("CARGO_PKG_VERSION")),
        )?;

        registry.register(Box::new(total_users.clone()))?;
        registry.register(Box::new(active_sessions.clone()))?;
        registry.register(Box::new(failed_logins.clone()))?;
        registry.register(Box::new(successful_logins.clone()))?;
        registry.register(Box::new(api_requests.clone()))?;
        registry.register(Box::new(api_response_time.clone()))?;
        registry.register(Box::new(external_api_response_time.clone()))?;
        registry.register(Box::new(user_registrations.clone()))?;
        registry.register(Box::new(user_deletions.clone()))?;
        registry.register(Box::new(disk_space_usage.clone()))?;
        registry.register(Box::new(memory_usage.clone()))?;
        registry.register(Box::new(cpu_usage.clone()))?;
        registry.register(Box::new(system_uptime.clone()))?;
        registry.register(Box::new(application_restart_count.clone()))?;
        registry.register(Box::new(queue_size.clone()))?;
        registry.register(Box::new(pending_email_notifications.clone()))?;
        registry.register(Box::new(batch_job_processing.clone()))?;
        registry.register(Box::new(scheduled_tasks_executed.clone()))?;
        registry.register(Box::new(database_queries.clone()))?;
        registry.register(Box::new(error_rate.clone()))?;
        registry.register(Box::new(build_info.clone()))?;

        build_info.set(1.0);

        Ok(Self {
            registry,
            total_users,
            active_sessions,
            failed_logins,
            successful_logins,
            api_requests,
            api_response_time,
            external_api_response_time,
            user_registrations,
            user_deletions,
            disk_space_usage,
            memory_usage,
            cpu_usage,
            system_uptime,
            application_restart_count,
            restart_count: AtomicU64::new(0),
            queue_size,
            pending_email_notifications,
            batch_job_processing,
            scheduled_tasks_executed,
            database_queries,
            error_rate,
        })
    }

    /// Create a facade with its own private registry
    pub fn new() -> Result<Self> {
        Self::with_registry(Registry::new())
    }

    /// The registry this facade is registered into
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ===== Users & sessions =====

    /// Set the total registered users gauge
    pub fn track_total_users(&self, total_users: i64) {
        self.total_users.set(total_users as f64);
    }

    /// Set the currently active sessions gauge
    pub fn track_active_sessions(&self, active_sessions: i64) {
        self.active_sessions.set(active_sessions as f64);
    }

    // ===== Authentication =====

    /// Record a failed login attempt.
    ///
    /// The count argument is accepted for interface compatibility but the
    /// counter advances by exactly 1 per call.
    pub fn track_failed_logins(&self, _failed_logins: i64) {
        self.failed_logins.with_label_values(&["failed"]).inc();
    }

    /// Record a successful login attempt (same by-1 semantics as failures)
    pub fn track_successful_logins(&self, _successful_logins: i64) {
        self.successful_logins
            .with_label_values(&["successful"])
            .inc();
    }

    // ===== API traffic =====

    /// Record a request against a named endpoint
    pub fn track_api_requests(&self, endpoint: &str) {
        self.api_requests.with_label_values(&[endpoint]).inc();
    }

    /// Observe an endpoint response time in milliseconds
    pub fn track_api_response_time(&self, endpoint: &str, response_time_ms: u64) {
        self.api_response_time
            .with_label_values(&[endpoint])
            .observe(response_time_ms as f64);
    }

    /// Observe an external API response time in milliseconds
    pub fn track_external_api_response_time(&self, api_name: &str, response_time_ms: u64) {
        self.external_api_response_time
            .with_label_values(&[api_name])
            .observe(response_time_ms as f64);
    }

    // ===== User lifecycle =====

    /// Record a user registration; advances by 1 regardless of the argument
    pub fn track_user_registrations(&self, _registrations: i64) {
        self.user_registrations
            .with_label_values(&["register"])
            .inc();
    }

    /// Record a user deletion; advances by 1 regardless of the argument
    pub fn track_user_deletions(&self, _deletions: i64) {
        self.user_deletions.with_label_values(&["delete"]).inc();
    }

    // ===== Host resources =====

    /// Set the used disk space gauge (GB)
    pub fn track_disk_space_usage(&self, disk_space_gb: f64) {
        self.disk_space_usage.set(disk_space_gb);
    }

    /// Set the process memory usage gauge (MB)
    pub fn track_memory_usage(&self, memory_mb: f64) {
        self.memory_usage.set(memory_mb);
    }

    /// Set the CPU usage gauge (0-100)
    pub fn track_cpu_usage(&self, cpu_percent: f64) {
        self.cpu_usage.set(cpu_percent);
    }

    /// Set the system uptime gauge (seconds)
    pub fn track_system_uptime(&self, uptime_secs: u64) {
        self.system_uptime.set(uptime_secs as f64);
    }

    // ===== Application lifecycle =====

    /// Add one to the restart counter.  Does not touch the registry.
    pub fn increment_restart_count(&self) {
        self.restart_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Push the current restart counter value into its gauge.
    ///
    /// Reads the counter without modifying it; this and
    /// [`Metrics::increment_restart_count`] are two independent steps, not
    /// one atomic unit.
    pub fn track_restart_count(&self) {
        self.application_restart_count
            .set(self.restart_count.load(Ordering::Relaxed) as f64);
    }

    // ===== Background work =====

    /// Set the task queue size gauge
    pub fn track_queue_size(&self, queue_size: i64) {
        self.queue_size.set(queue_size as f64);
    }

    /// Set the pending email notifications gauge
    pub fn track_pending_email_notifications(&self, pending_emails: i64) {
        self.pending_email_notifications.set(pending_emails as f64);
    }

    /// Record a batch job processing event; advances by 1 regardless of the
    /// argument
    pub fn track_batch_job_processing(&self, _processed_items: i64) {
        self.batch_job_processing.with_label_values(&["batch"]).inc();
    }

    /// Record a scheduled task execution; advances by 1 regardless of the
    /// argument
    pub fn track_scheduled_tasks_executed(&self, _tasks_executed: i64) {
        self.scheduled_tasks_executed
            .with_label_values(&["scheduled"])
            .inc();
    }

    // ===== Database =====

    /// Record a database query execution; advances by 1 regardless of the
    /// argument
    pub fn track_database_queries(&self, _query_count: i64) {
        self.database_queries.with_label_values(&["query"]).inc();
    }

    // ===== Health =====

    /// Set the application error rate gauge
    pub fn track_error_rate(&self, error_rate: f64) {
        self.error_rate.set(error_rate);
    }

    /// Export all gathered metrics in Prometheus text format
    pub fn export(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| MetricsError::encoding(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| MetricsError::encoding(e.to_string()))
    }
}

/// Initialize the global metrics facade.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_metrics() -> Result<()> {
    if METRICS.get().is_some() {
        return Ok(());
    }
    let metrics = Metrics::new()?;
    // A concurrent init may have won the race; its instance is kept.
    let _ = METRICS.set(metrics);
    Ok(())
}

/// Get the global metrics facade, if initialized
pub fn get_metrics() -> Option<&'static Metrics> {
    METRICS.get()
}
