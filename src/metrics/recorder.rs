//! `MetricsRecorder` implementations backed by Prometheus
//!
//! `Metrics` implements the trait by delegating to its inherent operations,
//! so a locally constructed facade can be passed anywhere an
//! `Arc<dyn MetricsRecorder>` is expected.  `PrometheusRecorder` forwards
//! to the global facade instead, for callers that go through `init_metrics`.

use super::registry::{Metrics, get_metrics};
use crate::metrics_core::MetricsRecorder;

impl MetricsRecorder for Metrics {
    fn track_total_users(&self, total_users: i64) {
        Metrics::track_total_users(self, total_users);
    }

    fn track_active_sessions(&self, active_sessions: i64) {
        Metrics::track_active_sessions(self, active_sessions);
    }

    fn track_failed_logins(&self, failed_logins: i64) {
        Metrics::track_failed_logins(self, failed_logins);
    }

    fn track_successful_logins(&self, successful_logins: i64) {
        Metrics::track_successful_logins(self, successful_logins);
    }

    fn track_api_requests(&self, endpoint: &str) {
        Metrics::track_api_requests(self, endpoint);
    }

    fn track_api_response_time(&self, endpoint: &str, response_time_ms: u64) {
        Metrics::track_api_response_time(self, endpoint, response_time_ms);
    }

    fn track_external_api_response_time(&self, api_name: &str, response_time_ms: u64) {
        Metrics::track_external_api_response_time(self, api_name, response_time_ms);
    }

    fn track_user_registrations(&self, registrations: i64) {
        Metrics::track_user_registrations(self, registrations);
    }

    fn track_user_deletions(&self, deletions: i64) {
        Metrics::track_user_deletions(self, deletions);
    }

    fn track_disk_space_usage(&self, disk_space_gb: f64) {
        Metrics::track_disk_space_usage(self, disk_space_gb);
    }

    fn track_memory_usage(&self, memory_mb: f64) {
        Metrics::track_memory_usage(self, memory_mb);
    }

    fn track_cpu_usage(&self, cpu_percent: f64) {
        Metrics::track_cpu_usage(self, cpu_percent);
    }

    fn track_system_uptime(&self, uptime_secs: u64) {
        Metrics::track_system_uptime(self, uptime_secs);
    }

    fn increment_restart_count(&self) {
        Metrics::increment_restart_count(self);
    }

    fn track_restart_count(&self) {
        Metrics::track_restart_count(self);
    }

    fn track_queue_size(&self, queue_size: i64) {
        Metrics::track_queue_size(self, queue_size);
    }

    fn track_pending_email_notifications(&self, pending_emails: i64) {
        Metrics::track_pending_email_notifications(self, pending_emails);
    }

    fn track_batch_job_processing(&self, processed_items: i64) {
        Metrics::track_batch_job_processing(self, processed_items);
    }

    fn track_scheduled_tasks_executed(&self, tasks_executed: i64) {
        Metrics::track_scheduled_tasks_executed(self, tasks_executed);
    }

    fn track_database_queries(&self, query_count: i64) {
        Metrics::track_database_queries(self, query_count);
    }

    fn track_error_rate(&self, error_rate: f64) {
        Metrics::track_error_rate(self, error_rate);
    }
}

/// Recorder that forwards every call to the global facade.
///
/// Calls made before [`super::init_metrics`] are dropped, matching the
/// noop recorder.
pub struct PrometheusRecorder;

impl MetricsRecorder for PrometheusRecorder {
    fn track_total_users(&self, total_users: i64) {
        if let Some(m) = get_metrics() {
            m.track_total_users(total_users);
        }
    }

    fn track_active_sessions(&self, active_sessions: i64) {
        if let Some(m) = get_metrics() {
            m.track_active_sessions(active_sessions);
        }
    }

    fn track_failed_logins(&self, failed_logins: i64) {
        if let Some(m) = get_metrics() {
            m.track_failed_logins(failed_logins);
        }
    }

    fn track_successful_logins(&self, successful_logins: i64) {
        if let Some(m) = get_metrics() {
            m.track_successful_logins(successful_logins);
        }
    }

    fn track_api_requests(&self, endpoint: &str) {
        if let Some(m) = get_metrics() {
            m.track_api_requests(endpoint);
        }
    }

    fn track_api_response_time(&self, endpoint: &str, response_time_ms: u64) {
        if let Some(m) = get_metrics() {
            m.track_api_response_time(endpoint, response_time_ms);
        }
    }

    fn track_external_api_response_time(&self, api_name: &str, response_time_ms: u64) {
        if let Some(m) = get_metrics() {
            m.track_external_api_response_time(api_name, response_time_ms);
        }
    }

    fn track_user_registrations(&self, registrations: i64) {
        if let Some(m) = get_metrics() {
            m.track_user_registrations(registrations);
        }
    }

    fn track_user_deletions(&self, deletions: i64) {
        if let Some(m) = get_metrics() {
            m.track_user_deletions(deletions);
        }
    }

    fn track_disk_space_usage(&self, disk_space_gb: f64) {
        if let Some(m) = get_metrics() {
            m.track_disk_space_usage(disk_space_gb);
        }
    }

    fn track_memory_usage(&self, memory_mb: f64) {
        if let Some(m) = get_metrics() {
            m.track_memory_usage(memory_mb);
        }
    }

    fn track_cpu_usage(&self, cpu_percent: f64) {
        if let Some(m) = get_metrics() {
            m.track_cpu_usage(cpu_percent);
        }
    }

    fn track_system_uptime(&self, uptime_secs: u64) {
        if let Some(m) = get_metrics() {
            m.track_system_uptime(uptime_secs);
        }
    }

    fn increment_restart_count(&self) {
        if let Some(m) = get_metrics() {
            m.increment_restart_count();
        }
    }

    fn track_restart_count(&self) {
        if let Some(m) = get_metrics() {
            m.track_restart_count();
        }
    }

    fn track_queue_size(&self, queue_size: i64) {
        if let Some(m) = get_metrics() {
            m.track_queue_size(queue_size);
        }
    }

    fn track_pending_email_notifications(&self, pending_emails: i64) {
        if let Some(m) = get_metrics() {
            m.track_pending_email_notifications(pending_emails);
        }
    }

    fn track_batch_job_processing(&self, processed_items: i64) {
        if let Some(m) = get_metrics() {
            m.track_batch_job_processing(processed_items);
        }
    }

    fn track_scheduled_tasks_executed(&self, tasks_executed: i64) {
        if let Some(m) = get_metrics() {
            m.track_scheduled_tasks_executed(tasks_executed);
        }
    }

    fn track_database_queries(&self, query_count: i64) {
        if let Some(m) = get_metrics() {
            m.track_database_queries(query_count);
        }
    }

    fn track_error_rate(&self, error_rate: f64) {
        if let Some(m) = get_metrics() {
            m.track_error_rate(error_rate);
        }
    }
}
