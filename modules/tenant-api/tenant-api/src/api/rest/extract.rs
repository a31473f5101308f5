//! Lenient request input: JSON body fields first, query string second.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use credential_orchestrator_sdk::normalize_email;
use erp_errors::{Problem, RESOURCE_NOT_FOUND_MESSAGE, not_found};
use serde_json::{Map, Value};

use crate::domain::error::DomainError;

pub const CLIENT_EMAIL: &str = "clientEmail";

/// Body and query of a request. A body that is not a JSON object reads as
/// empty rather than failing the request.
#[derive(Debug, Default)]
pub struct Input {
    body: Map<String, Value>,
    query: Vec<(String, String)>,
}

/// Scalar JSON rendered as text; `null` and containers read as empty.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_owned(),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

impl Input {
    #[must_use]
    pub fn new(body: &[u8], query: Option<&str>) -> Self {
        let body = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let query = query.map_or_else(Vec::new, |q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        });
        Self { body, query }
    }

    /// Body field as text when the key is present, even if its value is `null`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<String> {
        self.body.get(key).map(as_text)
    }

    /// Body value when present and not `null`, else the first query value.
    #[must_use]
    pub fn input(&self, key: &str) -> Option<String> {
        self.body
            .get(key)
            .filter(|v| !v.is_null())
            .map(as_text)
            .or_else(|| {
                self.query
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.clone())
            })
    }

    /// Lower-cased tenant email.
    ///
    /// # Errors
    /// `MissingClientEmail` when absent or empty.
    pub fn client_email(&self) -> Result<String, DomainError> {
        self.input(CLIENT_EMAIL)
            .filter(|email| !email.is_empty())
            .map(|email| normalize_email(&email))
            .ok_or(DomainError::MissingClientEmail)
    }
}

impl<S: Send + Sync> FromRequest<S> for Input {
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_owned);
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| Problem::new(rejection.status(), rejection.body_text()))?;
        Ok(Self::new(&body, query.as_deref()))
    }
}

/// `{id}` segment of `/colors/{id}`. Only plain digits address a color;
/// anything else, undecodable segments included, is an unknown resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorId(pub i32);

impl ColorId {
    /// # Errors
    /// 404 `Resource not found` unless `raw` is a non-empty run of digits
    /// that fits an `i32`.
    pub fn parse(raw: &str) -> Result<Self, Problem> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_found(RESOURCE_NOT_FOUND_MESSAGE));
        }
        raw.parse()
            .map(Self)
            .map_err(|_| not_found(RESOURCE_NOT_FOUND_MESSAGE))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ColorId {
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::FailedToDeserializePathParams(_) => {
                    not_found(RESOURCE_NOT_FOUND_MESSAGE)
                }
                other => Problem::new(other.status(), other.body_text()),
            })?;
        Self::parse(&raw)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn body_wins_over_query() {
        let input = Input::new(
            br#"{"clientEmail":"Body@Acme.io"}"#,
            Some("clientEmail=query%40acme.io"),
        );
        assert_eq!(input.client_email().unwrap(), "body@acme.io");
    }

    #[test]
    fn null_body_value_falls_back_to_query() {
        let input = Input::new(br#"{"clientEmail":null}"#, Some("clientEmail=Q%40Acme.io"));
        assert_eq!(input.client_email().unwrap(), "q@acme.io");
    }

    #[test]
    fn empty_or_missing_email_is_rejected() {
        for (body, query) in [
            (&b""[..], None),
            (&br#"{"clientEmail":""}"#[..], Some("clientEmail=x%40y.z")),
            (&b"not json"[..], Some("clientEmail=")),
        ] {
            assert!(matches!(
                Input::new(body, query).client_email(),
                Err(DomainError::MissingClientEmail)
            ));
        }
    }

    #[test]
    fn color_ids_are_plain_digits() {
        assert_eq!(ColorId::parse("42").unwrap(), ColorId(42));
        for bad in ["", "-1", "4a", "1.0", "abc", "99999999999"] {
            let err = ColorId::parse(bad).unwrap_err();
            assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
            assert_eq!(err.message, RESOURCE_NOT_FOUND_MESSAGE);
        }
    }

    #[test]
    fn field_keeps_presence_of_null() {
        let input = Input::new(br#"{"name":null,"hexadecimal":123}"#, None);
        assert_eq!(input.field("name").as_deref(), Some(""));
        assert_eq!(input.field("hexadecimal").as_deref(), Some("123"));
        assert_eq!(input.field("missing"), None);
    }
}
