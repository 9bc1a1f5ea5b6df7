//! Metrics facade tests
//!
//! Covers recording through every tracking operation, Prometheus text
//! export, the recorder trait implementations, and the restart counter.

use bankmetrics::config::init_config;
use bankmetrics::metrics::{Metrics, PrometheusRecorder, get_metrics, init_metrics};
use bankmetrics::metrics_core::{MetricsRecorder, NoopMetrics};
use bankmetrics::{time_api_call, time_external_api_call};

use prometheus::Registry;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

fn init_test_env() {
    INIT.call_once(|| {
        init_config();
        init_metrics().expect("Failed to init metrics");
    });
}

/// Extract the value of a plain (label-free) gauge from export output
fn gauge_value(export: &str, name: &str) -> Option<f64> {
    export
        .lines()
        .find(|line| line.starts_with(&format!("{} ", name)))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|v| v.parse().ok())
}

// =============================================================================
// NoopMetrics Tests
// =============================================================================

#[test]
fn test_noop_metrics_implements_trait() {
    let noop = NoopMetrics::new();
    // All methods should be callable without panic
    noop.track_total_users(1200);
    noop.track_active_sessions(37);
    noop.track_failed_logins(5);
    noop.track_successful_logins(9);
    noop.track_api_requests("login");
    noop.track_api_response_time("login", 250);
    noop.track_external_api_response_time("fx_rates", 480);
    noop.track_user_registrations(3);
    noop.track_user_deletions(1);
    noop.track_disk_space_usage(42.5);
    noop.track_memory_usage(512.0);
    noop.track_cpu_usage(13.7);
    noop.track_system_uptime(86_400);
    noop.increment_restart_count();
    noop.track_restart_count();
    noop.track_queue_size(12);
    noop.track_pending_email_notifications(4);
    noop.track_batch_job_processing(200);
    noop.track_scheduled_tasks_executed(8);
    noop.track_database_queries(31);
    noop.track_error_rate(0.02);
}

#[test]
fn test_noop_metrics_arc() {
    let arc = NoopMetrics::arc();
    arc.track_api_requests("transfer");
    arc.track_failed_logins(1);
}

#[test]
fn test_noop_metrics_default() {
    let noop = NoopMetrics;
    noop.track_error_rate(0.5);
}

// =============================================================================
// Global init
// =============================================================================

#[test]
fn test_init_metrics_succeeds() {
    init_test_env();
    assert!(get_metrics().is_some(), "Metrics should be initialized");
}

#[test]
fn test_init_metrics_idempotent() {
    init_test_env();
    // Calling init_metrics again should not error
    let result = init_metrics();
    assert!(result.is_ok());
}

#[test]
fn test_duplicate_registration_fails() {
    let registry = Registry::new();
    Metrics::with_registry(registry.clone()).expect("first registration should succeed");

    let err = Metrics::with_registry(registry)
        .err()
        .expect("second registration into the same registry must fail");
    assert_eq!(err.code(), "E001");
}

// =============================================================================
// Recording
// =============================================================================

#[test]
fn test_export_contains_expected_metrics() {
    let metrics = Metrics::new().unwrap();

    // Touch every vector family so it has at least one child
    metrics.track_failed_logins(1);
    metrics.track_successful_logins(1);
    metrics.track_api_requests("login");
    metrics.track_api_response_time("login", 10);
    metrics.track_external_api_response_time("fx_rates", 20);
    metrics.track_user_registrations(1);
    metrics.track_user_deletions(1);
    metrics.track_batch_job_processing(1);
    metrics.track_scheduled_tasks_executed(1);
    metrics.track_database_queries(1);

    let output = metrics.export().expect("Export should succeed");

    for name in [
        "total_users",
        "active_sessions",
        "failed_logins",
        "successful_logins",
        "api_requests",
        "api_response_time",
        "external_api_response_time",
        "user_registrations",
        "user_deletions",
        "disk_space_usage",
        "memory_usage",
        "cpu_usage",
        "system_uptime",
        "application_restart_count",
        "queue_size",
        "pending_email_notifications",
        "batch_job_processing",
        "scheduled_tasks_executed",
        "database_queries",
        "error_rate",
        "build_info",
    ] {
        assert!(output.contains(name), "Missing metric family: {}", name);
    }
}

#[test]
fn test_metrics_recording_gauges() {
    let metrics = Metrics::new().unwrap();

    metrics.track_total_users(1000);
    metrics.track_active_sessions(25);
    metrics.track_disk_space_usage(42.5);
    metrics.track_memory_usage(768.25);
    metrics.track_cpu_usage(55.5);
    metrics.track_queue_size(7);
    metrics.track_pending_email_notifications(3);
    metrics.track_system_uptime(3600);
    metrics.track_error_rate(0.05);

    let output = metrics.export().unwrap();
    assert!(output.contains("total_users 1000"));
    assert!(output.contains("active_sessions 25"));
    assert!(output.contains("disk_space_usage 42.5"));
    assert!(output.contains("memory_usage 768.25"));
    assert!(output.contains("cpu_usage 55.5"));
    assert!(output.contains("queue_size 7"));
    assert!(output.contains("pending_email_notifications 3"));
    assert!(output.contains("system_uptime 3600"));
    assert!(output.contains("error_rate 0.05"));
}

#[test]
fn test_gauges_are_freely_settable() {
    let metrics = Metrics::new().unwrap();

    metrics.track_queue_size(100);
    metrics.track_queue_size(2);

    let output = metrics.export().unwrap();
    assert!(output.contains("queue_size 2"));
}

#[test]
fn test_counters_increment_by_one_ignoring_argument() {
    let metrics = Metrics::new().unwrap();

    // The count arguments are accepted but each call adds exactly 1
    metrics.track_failed_logins(5);
    metrics.track_user_registrations(250);
    metrics.track_database_queries(99);

    let output = metrics.export().unwrap();
    assert!(output.contains("failed_logins{status=\"failed\"} 1"));
    assert!(output.contains("user_registrations{action=\"register\"} 1"));
    assert!(output.contains("database_queries{operation=\"query\"} 1"));

    metrics.track_failed_logins(100);
    let output = metrics.export().unwrap();
    assert!(output.contains("failed_logins{status=\"failed\"} 2"));
}

#[test]
fn test_metrics_recording_counters() {
    let metrics = Metrics::new().unwrap();

    metrics.track_successful_logins(1);
    metrics.track_api_requests("login");
    metrics.track_api_requests("login");
    metrics.track_api_requests("transfer");
    metrics.track_user_deletions(1);
    metrics.track_batch_job_processing(500);
    metrics.track_scheduled_tasks_executed(2);

    let output = metrics.export().unwrap();
    assert!(output.contains("successful_logins{status=\"successful\"} 1"));
    assert!(output.contains("api_requests{endpoint=\"login\"} 2"));
    assert!(output.contains("api_requests{endpoint=\"transfer\"} 1"));
    assert!(output.contains("user_deletions{action=\"delete\"} 1"));
    assert!(output.contains("batch_job_processing{job=\"batch\"} 1"));
    assert!(output.contains("scheduled_tasks_executed{task=\"scheduled\"} 1"));
}

#[test]
fn test_metrics_recording_response_times() {
    let metrics = Metrics::new().unwrap();

    metrics.track_api_response_time("login", 250);
    metrics.track_external_api_response_time("credit_check", 1200);

    let output = metrics.export().unwrap();
    assert!(output.contains("api_response_time_count{endpoint=\"login\"} 1"));
    assert!(output.contains("api_response_time_sum{endpoint=\"login\"} 250"));
    assert!(output.contains("external_api_response_time_count{api_name=\"credit_check\"} 1"));
    assert!(output.contains("external_api_response_time_sum{api_name=\"credit_check\"} 1200"));
}

#[test]
fn test_metrics_build_info() {
    let metrics = Metrics::new().unwrap();

    let output = metrics.export().unwrap();
    assert!(output.contains("build_info{version="));
    assert!(output.contains("} 1"));
}

// =============================================================================
// Restart counter
// =============================================================================

#[test]
fn test_restart_count_sequential() {
    let metrics = Metrics::new().unwrap();

    for _ in 0..3 {
        metrics.increment_restart_count();
    }
    metrics.track_restart_count();

    let output = metrics.export().unwrap();
    assert_eq!(gauge_value(&output, "application_restart_count"), Some(3.0));
}

#[test]
fn test_restart_count_not_reported_until_tracked() {
    let metrics = Metrics::new().unwrap();

    metrics.increment_restart_count();

    // Increment and report are two independent steps
    let output = metrics.export().unwrap();
    assert_eq!(gauge_value(&output, "application_restart_count"), Some(0.0));

    metrics.track_restart_count();
    let output = metrics.export().unwrap();
    assert_eq!(gauge_value(&output, "application_restart_count"), Some(1.0));
}

#[test]
fn test_restart_count_concurrent_increments_are_exact() {
    let metrics = Arc::new(Metrics::new().unwrap());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let metrics = Arc::clone(&metrics);
        handles.push(std::thread::spawn(move || {
            for _ in 0..1000 {
                metrics.increment_restart_count();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    metrics.track_restart_count();
    let output = metrics.export().unwrap();
    assert_eq!(
        gauge_value(&output, "application_restart_count"),
        Some(8000.0)
    );
}

// =============================================================================
// Recorder trait implementations
// =============================================================================

#[test]
fn test_metrics_implements_recorder_trait() {
    let metrics: Arc<dyn MetricsRecorder> = Arc::new(Metrics::new().unwrap());

    metrics.track_total_users(10);
    metrics.track_failed_logins(2);
    metrics.track_api_response_time("login", 30);
    metrics.increment_restart_count();
    metrics.track_restart_count();
}

#[test]
fn test_prometheus_recorder_delegates() {
    init_test_env();
    let recorder = PrometheusRecorder;

    recorder.track_api_requests("statement");
    recorder.track_disk_space_usage(12.5);
    recorder.track_error_rate(0.25);

    // Only assert series the system collector never writes; it shares the
    // global facade with this test binary.
    let output = get_metrics().unwrap().export().unwrap();
    assert!(output.contains("api_requests{endpoint=\"statement\"}"));
    assert!(output.contains("error_rate 0.25"));
}

// =============================================================================
// Timing macros
// =============================================================================

#[test]
fn test_time_api_call_macro_records_and_yields() {
    let metrics = Metrics::new().unwrap();

    let value = time_api_call!(metrics, "login", { 40 + 2 });
    assert_eq!(value, 42);

    let output = metrics.export().unwrap();
    assert!(output.contains("api_response_time_count{endpoint=\"login\"} 1"));
}

#[test]
fn test_time_external_api_call_macro_records_and_yields() {
    let metrics = Metrics::new().unwrap();

    let value = time_external_api_call!(metrics, "fx_rates", { "quote" });
    assert_eq!(value, "quote");

    let output = metrics.export().unwrap();
    assert!(output.contains("external_api_response_time_count{api_name=\"fx_rates\"} 1"));
}

// =============================================================================
// System collector (requires `system` feature)
// =============================================================================

#[cfg(feature = "system")]
#[test]
fn test_system_collector_updates_gauges() {
    use bankmetrics::metrics::update_system_metrics;

    init_test_env();
    update_system_metrics();

    let output = get_metrics().unwrap().export().unwrap();
    let memory = gauge_value(&output, "memory_usage").expect("memory_usage should be exported");
    assert!(memory > 0.0, "process RSS should be non-zero, got {}", memory);
    assert!(gauge_value(&output, "cpu_usage").is_some());
    assert!(gauge_value(&output, "disk_space_usage").is_some());
    assert!(gauge_value(&output, "system_uptime").is_some());
}
