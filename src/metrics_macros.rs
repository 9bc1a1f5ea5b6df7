//! Metrics helper macros
//!
//! Reduces boilerplate for timing code paths through a recorder.

/// Time a block and record it as an endpoint response through `$recorder`.
///
/// `$recorder` is anything with a `track_api_response_time` method (the
/// facade itself or a `MetricsRecorder` in scope).  Yields the block's
/// value.
///
/// Usage:
/// ```ignore
/// let user = time_api_call!(recorder, "login", {
///     authenticate(&credentials)
/// });
/// ```
#[macro_export]
macro_rules! time_api_call {
    ($recorder:expr, $endpoint:expr, $body:expr) => {{
        let _timer_start = std::time::Instant::now();

        let _result = $body;

        $recorder
            .track_api_response_time($endpoint, _timer_start.elapsed().as_millis() as u64);

        _result
    }};
}

/// Time a block and record it as an external API call through `$recorder`.
///
/// Usage:
/// ```ignore
/// let quote = time_external_api_call!(recorder, "fx_rates", {
///     fetch_quote(pair)
/// });
/// ```
#[macro_export]
macro_rules! time_external_api_call {
    ($recorder:expr, $api_name:expr, $body:expr) => {{
        let _timer_start = std::time::Instant::now();

        let _result = $body;

        $recorder
            .track_external_api_response_time($api_name, _timer_start.elapsed().as_millis() as u64);

        _result
    }};
}
