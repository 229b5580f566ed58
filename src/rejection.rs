// ABOUTME: Core rejection classifier and outcome value types for status-coded failure signaling
// ABOUTME: Defines Rejection factories, the RejectionError outcome value, and the Rejected async failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::backtrace::Backtrace;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::registry;

/// A named outcome classifier: an immutable binding of an HTTP status code to a
/// default ok/error disposition.
///
/// All well-known classifiers live in [`crate::registry`] as `const` items
/// (e.g. [`registry::NOT_FOUND`]); `Rejection::new` exists so callers can mint
/// ad-hoc classifiers for codes the registry does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    http_status_code: u16,
    ok_by_default: bool,
}

impl Rejection {
    /// Create a classifier bound to a fixed status code and default-ok flag.
    ///
    /// No validation is performed; any integer is accepted, including the
    /// non-standard codes this system defines for internal use (e.g. 440).
    #[must_use]
    pub const fn new(http_status_code: u16, ok_by_default: bool) -> Self {
        Self {
            http_status_code,
            ok_by_default,
        }
    }

    /// The HTTP status code this classifier represents.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    /// Whether outcomes from this classifier are treated as ok unless
    /// overridden per call.
    #[must_use]
    pub const fn is_ok_by_default(&self) -> bool {
        self.ok_by_default
    }

    /// The registered display name for this classifier's status code, if any.
    ///
    /// Resolution goes through the registry's status-code index (first match
    /// by declaration order), so an ad-hoc classifier sharing a registered
    /// code reports the registered name.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        registry::name_of(self.http_status_code)
    }

    /// Loose-equality comparison between `other` and the bound status code.
    ///
    /// Upstream systems deliver status codes as numbers, strings, or raw JSON;
    /// `"404"`, `404u16`, and `json!(404)` all match [`registry::NOT_FOUND`].
    #[must_use]
    pub fn matches(&self, other: impl StatusCodeLike) -> bool {
        other.as_status_code() == Some(self.http_status_code)
    }

    /// Build the outcome value without wrapping it in a failed computation.
    ///
    /// The ok flag resolves to an explicit boolean `data["isOk"]` when the
    /// payload carries one, else this classifier's default. A diagnostic
    /// backtrace is captured only for non-ok outcomes; ok-flagged outcomes
    /// stay trace-free so expected control flow does not flood logs.
    #[must_use]
    pub fn make_exc(&self, message: impl Into<String>, data: Option<Value>) -> RejectionError {
        let is_ok = data
            .as_ref()
            .and_then(|d| d.get("isOk"))
            .and_then(Value::as_bool)
            .unwrap_or(self.ok_by_default);
        let trace = if is_ok {
            None
        } else {
            Some(Backtrace::capture())
        };
        RejectionError {
            message: message.into(),
            http_status_code: self.http_status_code,
            is_ok,
            data,
            trace,
        }
    }

    /// The primary entry point: build the outcome value and wrap it as an
    /// already-failed computation.
    ///
    /// This cannot fail; producing a failure is its entire purpose. The
    /// returned [`Rejected`] displays as `Rejections::<Name>(<message>)` so
    /// that accidentally propagating the wrapper itself (instead of
    /// [`Rejected::exc`]) leaves a recognizable signature in logs.
    #[must_use]
    pub fn reject(&self, message: impl Into<String>, data: Option<Value>) -> Rejected {
        let exc = self.make_exc(message, data);
        let label = match self.name() {
            Some(name) => format!("Rejections::{}({})", name, exc.message),
            None => format!("Rejections::{}({})", self.http_status_code, exc.message),
        };
        Rejected { label, exc }
    }
}

/// The structured outcome value describing one failure/response instance.
///
/// `Display` is the bare message for both ok and non-ok outcomes; the captured
/// backtrace (non-ok only) is reachable via [`RejectionError::trace`] and is
/// never serialized. Field names serialize in the camelCase wire shape
/// consumers already parse (`httpStatusCode`, `isOk`).
#[derive(Debug, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionError {
    /// Human-readable description.
    pub message: String,
    /// Copied from the originating classifier.
    pub http_status_code: u16,
    /// Whether this outcome is benign/expected rather than a genuine error.
    pub is_ok: bool,
    /// Caller-supplied payload, passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip)]
    trace: Option<Backtrace>,
}

impl RejectionError {
    /// The backtrace captured at construction, present only when `is_ok` is
    /// false.
    #[must_use]
    pub fn trace(&self) -> Option<&Backtrace> {
        self.trace.as_ref()
    }
}

impl fmt::Display for RejectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// An already-failed asynchronous computation carrying a [`RejectionError`].
///
/// Inert until consumed: convert with [`Rejected::err`] for synchronous
/// `Result` flows or [`Rejected::into_future`] for async ones.
#[must_use]
#[derive(Debug)]
pub struct Rejected {
    label: String,
    /// The outcome value, recoverable without re-parsing the display label.
    pub exc: RejectionError,
}

impl Rejected {
    /// Unwrap into an `Err` for `?`-style propagation.
    pub fn err<T>(self) -> Result<T, RejectionError> {
        Err(self.exc)
    }

    /// The already-failed future form.
    pub fn into_future<T>(self) -> futures_util::future::Ready<Result<T, RejectionError>> {
        futures_util::future::err(self.exc)
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<Rejected> for RejectionError {
    fn from(rejected: Rejected) -> Self {
        rejected.exc
    }
}

/// Loose status-code comparison for [`Rejection::matches`].
///
/// Implementations normalize to `Option<u16>`; anything that does not resolve
/// to a status code matches nothing.
pub trait StatusCodeLike {
    fn as_status_code(&self) -> Option<u16>;
}

impl StatusCodeLike for u16 {
    fn as_status_code(&self) -> Option<u16> {
        Some(*self)
    }
}

impl StatusCodeLike for i32 {
    fn as_status_code(&self) -> Option<u16> {
        u16::try_from(*self).ok()
    }
}

impl StatusCodeLike for u32 {
    fn as_status_code(&self) -> Option<u16> {
        u16::try_from(*self).ok()
    }
}

impl StatusCodeLike for i64 {
    fn as_status_code(&self) -> Option<u16> {
        u16::try_from(*self).ok()
    }
}

impl StatusCodeLike for u64 {
    fn as_status_code(&self) -> Option<u16> {
        u16::try_from(*self).ok()
    }
}

impl StatusCodeLike for &str {
    fn as_status_code(&self) -> Option<u16> {
        self.trim().parse().ok()
    }
}

impl StatusCodeLike for String {
    fn as_status_code(&self) -> Option<u16> {
        self.as_str().as_status_code()
    }
}

impl StatusCodeLike for Value {
    fn as_status_code(&self) -> Option<u16> {
        match self {
            Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(s) => s.as_str().as_status_code(),
            _ => None,
        }
    }
}

impl<T: StatusCodeLike> StatusCodeLike for &T {
    fn as_status_code(&self) -> Option<u16> {
        (*self).as_status_code()
    }
}
