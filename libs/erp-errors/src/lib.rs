//! Error body rendered by every HTTP surface of the platform.
//!
//! Every failure leaves a handler as `{ "message": ... }`, optionally with a
//! list of per-field `errors` and, outside production, a `detail` string.

pub mod problem;

pub use problem::{
    INTERNAL_ERROR_MESSAGE, Problem, RESOURCE_NOT_FOUND_MESSAGE, internal_error,
    method_not_allowed, not_found, unprocessable,
};
