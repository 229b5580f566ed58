// ABOUTME: Severity-aware diagnostic recording for rejection outcomes
// ABOUTME: Routes ok-flagged outcomes to debug events and real errors to error events with trace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use tracing::{debug, error};

use crate::rejection::RejectionError;
use crate::registry;

/// Record an outcome through `tracing`, letting the classification decide the
/// severity: ok-flagged outcomes emit a `debug` event with the bare message,
/// real errors emit an `error` event carrying the status code and the captured
/// backtrace.
///
/// Opt-in: the registry itself never logs, and callers with their own
/// diagnostic policy can ignore this entirely.
pub fn record(exc: &RejectionError) {
    let name = registry::name_of(exc.http_status_code);
    if exc.is_ok {
        debug!(
            http_status_code = exc.http_status_code,
            rejection = name,
            "{}",
            exc.message
        );
    } else {
        match exc.trace() {
            Some(trace) => error!(
                http_status_code = exc.http_status_code,
                rejection = name,
                trace = %trace,
                "{}",
                exc.message
            ),
            None => error!(
                http_status_code = exc.http_status_code,
                rejection = name,
                "{}",
                exc.message
            ),
        }
    }
}
