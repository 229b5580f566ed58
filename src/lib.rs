// ABOUTME: Library entry point for the rejections crate, a registry of status-coded outcome classifiers
// ABOUTME: Re-exports the classifier types, the well-known registry, and the diag helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Rejections
//!
//! A registry of named, HTTP-status-coded rejection classifiers for signaling
//! outcomes across a service's call boundaries. Each classifier produces
//! failure values that downstream code can classify programmatically, e.g. to
//! decide whether an outcome is worth a full error trace in the logs or is
//! expected control flow ("the lookup legitimately found nothing").
//!
//! Two orthogonal flags classify every outcome: `is_ok` (benign vs. genuine
//! error) and `http_status_code` (which class of HTTP response it maps to).
//! The crate never performs transport or logging itself; it only produces the
//! classification.
//!
//! ## Example
//!
//! ```rust
//! use rejections::registry;
//!
//! fn find_user(id: u32) -> Result<String, rejections::RejectionError> {
//!     if id == 0 {
//!         return registry::NOT_FOUND.reject("no such user", None).err();
//!     }
//!     Ok("bob".to_string())
//! }
//!
//! let err = find_user(0).unwrap_err();
//! assert_eq!(err.http_status_code, 404);
//! assert!(!err.is_ok);
//! ```

/// Severity-aware diagnostic recording for outcomes
pub mod diag;
/// The fixed, ordered registry of well-known classifiers
pub mod registry;
/// Classifier and outcome value types
pub mod rejection;

pub use rejection::{Rejected, Rejection, RejectionError, StatusCodeLike};
pub use registry::{dict, list, name_of, Truthy};
