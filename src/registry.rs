// ABOUTME: Fixed, ordered registry of the well-known rejection classifiers and their aggregate views
// ABOUTME: Exposes per-name consts, dict/list views, and the status-code to name index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::collections::HashMap;
use std::sync::LazyLock;

use futures_util::future::{self, Ready};
use indexmap::IndexMap;
use serde_json::Value;

use crate::rejection::{Rejection, RejectionError};

const OK: bool = true;

// Non-error responses
pub const NO_CONTENT: Rejection = Rejection::new(204, OK);
pub const RESET_CONTENT: Rejection = Rejection::new(205, OK);
pub const PARTIAL_CONTENT: Rejection = Rejection::new(206, OK);

// Caller errors
pub const BAD_REQUEST: Rejection = Rejection::new(400, false);
pub const NOT_AUTHORIZED: Rejection = Rejection::new(401, false);
pub const FORBIDDEN: Rejection = Rejection::new(403, OK);
pub const NOT_FOUND: Rejection = Rejection::new(404, false);
pub const METHOD_NOT_ALLOWED: Rejection = Rejection::new(405, false);
pub const NOT_ACCEPTABLE: Rejection = Rejection::new(406, false);
pub const PROXY_AUTHENTICATION_REQUIRED: Rejection = Rejection::new(407, false);
pub const REQUEST_TIMEOUT: Rejection = Rejection::new(408, false);
pub const CONFLICT: Rejection = Rejection::new(409, false);
pub const GONE: Rejection = Rejection::new(410, false);
/// Cannot satisfy the requested instructions, e.g. an upstream supplier
/// returned an error the request cannot recover from.
pub const UNPROCESSABLE_ENTITY: Rejection = Rejection::new(422, false);
pub const LOCKED: Rejection = Rejection::new(423, false);
pub const FAILED_DEPENDENCY: Rejection = Rejection::new(424, false);
pub const TOO_EARLY: Rejection = Rejection::new(425, false);
pub const TOO_MANY_REQUESTS: Rejection = Rejection::new(429, false);
/// Non-standard (IIS extension), used internally for expired sessions.
pub const LOGIN_TIME_OUT: Rejection = Rejection::new(440, false);

// Server errors
pub const INTERNAL_SERVER_ERROR: Rejection = Rejection::new(500, false);
pub const NOT_IMPLEMENTED: Rejection = Rejection::new(501, false);
pub const BAD_GATEWAY: Rejection = Rejection::new(502, false);
pub const SERVICE_UNAVAILABLE: Rejection = Rejection::new(503, false);
pub const GATEWAY_TIMEOUT: Rejection = Rejection::new(504, false);
pub const INSUFFICIENT_STORAGE: Rejection = Rejection::new(507, false);
pub const NOT_EXTENDED: Rejection = Rejection::new(510, false);

/// Declaration-ordered table of every registered classifier. The order here is
/// load-bearing: it drives `dict()`/`list()` enumeration and first-match-wins
/// name resolution in [`name_of`].
static TABLE: [(&str, Rejection); 26] = [
    ("NoContent", NO_CONTENT),
    ("ResetContent", RESET_CONTENT),
    ("PartialContent", PARTIAL_CONTENT),
    ("BadRequest", BAD_REQUEST),
    ("NotAuthorized", NOT_AUTHORIZED),
    ("Forbidden", FORBIDDEN),
    ("NotFound", NOT_FOUND),
    ("MethodNotAllowed", METHOD_NOT_ALLOWED),
    ("NotAcceptable", NOT_ACCEPTABLE),
    ("ProxyAuthenticationRequired", PROXY_AUTHENTICATION_REQUIRED),
    ("RequestTimeout", REQUEST_TIMEOUT),
    ("Conflict", CONFLICT),
    ("Gone", GONE),
    ("UnprocessableEntity", UNPROCESSABLE_ENTITY),
    ("Locked", LOCKED),
    ("FailedDependency", FAILED_DEPENDENCY),
    ("TooEarly", TOO_EARLY),
    ("TooManyRequests", TOO_MANY_REQUESTS),
    ("LoginTimeOut", LOGIN_TIME_OUT),
    ("InternalServerError", INTERNAL_SERVER_ERROR),
    ("NotImplemented", NOT_IMPLEMENTED),
    ("BadGateway", BAD_GATEWAY),
    ("ServiceUnavailable", SERVICE_UNAVAILABLE),
    ("GatewayTimeout", GATEWAY_TIMEOUT),
    ("InsufficientStorage", INSUFFICIENT_STORAGE),
    ("NotExtended", NOT_EXTENDED),
];

static DICT: LazyLock<IndexMap<&'static str, Rejection>> =
    LazyLock::new(|| TABLE.iter().copied().collect());

static LIST: LazyLock<Vec<Rejection>> =
    LazyLock::new(|| TABLE.iter().map(|&(_, rejection)| rejection).collect());

static NAME_BY_CODE: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(TABLE.len());
    for &(name, rejection) in &TABLE {
        // first declaration wins if two names ever share a code
        index.entry(rejection.http_status_code()).or_insert(name);
    }
    index
});

/// Name-keyed view of the registry, declaration order preserved.
#[must_use]
pub fn dict() -> &'static IndexMap<&'static str, Rejection> {
    &DICT
}

/// All registered classifiers as an ordered sequence.
#[must_use]
pub fn list() -> &'static [Rejection] {
    &LIST
}

/// Registered display name for a status code, first match by declaration
/// order.
#[must_use]
pub fn name_of(http_status_code: u16) -> Option<&'static str> {
    NAME_BY_CODE.get(&http_status_code).copied()
}

/// Values that can be checked for emptiness by [`non_empty`].
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_numbers {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_for_numbers!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Check function builder: the returned closure resolves a truthy value to
/// itself and fails an empty one through `rejection` (default
/// [`NO_CONTENT`]) with message `"Value is empty - <description>"`.
#[deprecated(note = "write the required-value check inline at the validation site instead")]
pub fn non_empty<T: Truthy>(
    description: &str,
    rejection: Option<Rejection>,
) -> impl Fn(T) -> Ready<Result<T, RejectionError>> {
    let description = description.to_owned();
    let rejection = rejection.unwrap_or(NO_CONTENT);
    move |value: T| {
        if value.is_truthy() {
            future::ok(value)
        } else {
            rejection
                .reject(format!("Value is empty - {description}"), None)
                .into_future()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_views_are_complete_and_ordered() {
        assert_eq!(list().len(), 26);
        assert_eq!(dict().len(), 26);

        let names: Vec<&str> = dict().keys().copied().collect();
        assert_eq!(names.first(), Some(&"NoContent"));
        assert_eq!(names.get(6), Some(&"NotFound"));
        assert_eq!(names.last(), Some(&"NotExtended"));

        // list order mirrors dict order
        let codes: Vec<u16> = list().iter().map(Rejection::http_status_code).collect();
        let dict_codes: Vec<u16> = dict().values().map(Rejection::http_status_code).collect();
        assert_eq!(codes, dict_codes);
    }

    #[test]
    fn test_dict_lookup_by_name() {
        assert_eq!(dict()["NotFound"].http_status_code(), 404);
        assert_eq!(dict()["LoginTimeOut"].http_status_code(), 440);
        assert!(dict()["NoContent"].is_ok_by_default());
        assert!(!dict()["BadRequest"].is_ok_by_default());
    }

    #[test]
    fn test_ok_by_default_set() {
        let ok_names: Vec<&str> = dict()
            .iter()
            .filter(|(_, r)| r.is_ok_by_default())
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(
            ok_names,
            ["NoContent", "ResetContent", "PartialContent", "Forbidden"]
        );
    }

    #[test]
    fn test_name_of_index() {
        assert_eq!(name_of(404), Some("NotFound"));
        assert_eq!(name_of(440), Some("LoginTimeOut"));
        assert_eq!(name_of(418), None);
    }

    #[test]
    fn test_every_classifier_matches_its_own_code() {
        for (name, rejection) in dict() {
            assert!(
                rejection.matches(rejection.http_status_code()),
                "{name} does not match its own code"
            );
            assert!(
                rejection.matches(rejection.http_status_code().to_string()),
                "{name} does not match its own code as a string"
            );
            assert_eq!(name_of(rejection.http_status_code()), Some(*name));
        }
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn test_non_empty_rejects_falsy_values() {
        let check = non_empty("desc", None);
        let err = check(0).await.unwrap_err();
        assert_eq!(err.message, "Value is empty - desc");
        assert_eq!(err.http_status_code, 204);
        assert!(err.is_ok);
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn test_non_empty_passes_truthy_values() {
        let check = non_empty("desc", None);
        assert_eq!(check(5).await.unwrap(), 5);

        let check = non_empty("name", None);
        assert_eq!(check("bob").await.unwrap(), "bob");
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn test_non_empty_with_custom_rejection() {
        let check = non_empty::<Option<u32>>("session", Some(LOGIN_TIME_OUT));
        let err = check(None).await.unwrap_err();
        assert_eq!(err.http_status_code, 440);
        assert_eq!(err.message, "Value is empty - session");
        assert!(!err.is_ok);
    }
}
