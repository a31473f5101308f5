//! Input rules for color payloads. Runs before any tenant resolution.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;
use crate::domain::model::{ColorPatch, NewColor};

pub const NAME_REQUIRED: &str = "name is required";
pub const NAME_EMPTY: &str = "name cannot be empty";
pub const HEX_PATTERN: &str = "hexadecimal must follow the #RRGGBB pattern";
pub const NOTHING_TO_UPDATE: &str = "Provide at least one field to update";

#[allow(clippy::expect_used)] // literal pattern
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-F]{6}$").expect("static regex should not panic"));

fn normalize_hex(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn is_hex(candidate: &str) -> bool {
    HEX_RE.is_match(candidate)
}

/// Checks a create payload; all violations are reported together.
///
/// # Errors
/// `Validation` with one message per failing field.
pub fn validate_new(name: Option<&str>, hexadecimal: Option<&str>) -> Result<NewColor, DomainError> {
    let name = name.unwrap_or_default().trim();
    let hex = normalize_hex(hexadecimal.unwrap_or_default());

    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(NAME_REQUIRED.to_owned());
    }
    if !is_hex(&hex) {
        errors.push(HEX_PATTERN.to_owned());
    }

    if !errors.is_empty() {
        return Err(DomainError::Validation(errors));
    }

    Ok(NewColor {
        name: name.to_owned(),
        hexadecimal: hex,
    })
}

/// Checks an update payload. Only supplied fields are validated; a payload
/// that supplies neither field is rejected.
///
/// # Errors
/// `Validation` listing the failing fields, or the single
/// "nothing to update" message.
pub fn validate_patch(
    name: Option<&str>,
    hexadecimal: Option<&str>,
) -> Result<ColorPatch, DomainError> {
    let mut patch = ColorPatch::default();
    let mut errors = Vec::new();

    if let Some(raw) = name {
        let name = raw.trim();
        if name.is_empty() {
            errors.push(NAME_EMPTY.to_owned());
        } else {
            patch.name = Some(name.to_owned());
        }
    }

    if let Some(raw) = hexadecimal {
        let hex = normalize_hex(raw);
        if is_hex(&hex) {
            patch.hexadecimal = Some(hex);
        } else {
            errors.push(HEX_PATTERN.to_owned());
        }
    }

    if patch.is_empty() && errors.is_empty() {
        errors.push(NOTHING_TO_UPDATE.to_owned());
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(DomainError::Validation(errors))
    }
}
