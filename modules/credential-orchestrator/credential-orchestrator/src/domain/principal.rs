//! Caller identity carried by upstream-supplied headers.

use crate::config::AccessConfig;

pub const ENTITY_ID_HEADER: &str = "x-entity-id";
pub const ROLES_HEADER: &str = "x-roles";
pub const ADMIN_HEADER: &str = "x-admin";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    /// Carried for future row scoping; no query filters on it yet.
    pub entity_id: Option<i64>,
    pub roles: Vec<String>,
    pub is_admin: bool,
}

impl Principal {
    /// Builds a principal from raw header values. Missing or malformed values
    /// fall back to "no entity", "no roles", "not admin".
    #[must_use]
    pub fn from_headers(entity_id: Option<&str>, roles: Option<&str>, admin: Option<&str>) -> Self {
        let entity_id = entity_id
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|id| *id != 0);

        let roles = roles.map_or_else(Vec::new, |raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(str::to_owned)
                .collect()
        });

        let is_admin = admin.is_some_and(|raw| raw.trim().eq_ignore_ascii_case("true"));

        Self {
            entity_id,
            roles,
            is_admin,
        }
    }

    /// True for admins and for any principal holding one of `super_roles`.
    #[must_use]
    pub fn is_bypassed(&self, super_roles: &[String]) -> bool {
        self.is_admin || self.roles.iter().any(|role| super_roles.contains(role))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    pub require_admin: bool,
    pub super_roles: Vec<String>,
}

impl AccessPolicy {
    #[must_use]
    pub fn permits(&self, principal: &Principal) -> bool {
        !self.require_admin || principal.is_bypassed(&self.super_roles)
    }
}

impl From<&AccessConfig> for AccessPolicy {
    fn from(cfg: &AccessConfig) -> Self {
        Self {
            require_admin: cfg.require_admin,
            super_roles: vec![cfg.super_admin_role.clone()],
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn supers() -> Vec<String> {
        vec!["super_admin".to_owned()]
    }

    #[test]
    fn parses_all_headers() {
        let p = Principal::from_headers(Some("42"), Some(" viewer , super_admin,"), Some("TRUE"));
        assert_eq!(p.entity_id, Some(42));
        assert_eq!(p.roles, vec!["viewer", "super_admin"]);
        assert!(p.is_admin);
    }

    #[test]
    fn missing_or_malformed_headers_fall_back() {
        let p = Principal::from_headers(Some("abc"), None, Some("yes"));
        assert_eq!(p, Principal::default());

        let zero = Principal::from_headers(Some("0"), Some(""), None);
        assert_eq!(zero.entity_id, None);
        assert!(zero.roles.is_empty());
    }

    #[test]
    fn super_role_bypasses() {
        let p = Principal::from_headers(None, Some("super_admin"), None);
        assert!(p.is_bypassed(&supers()));

        let plain = Principal::from_headers(None, Some("viewer"), Some("false"));
        assert!(!plain.is_bypassed(&supers()));
    }

    #[test]
    fn policy_only_gates_when_required() {
        let open = AccessPolicy::default();
        assert!(open.permits(&Principal::default()));

        let gated = AccessPolicy {
            require_admin: true,
            super_roles: supers(),
        };
        assert!(!gated.permits(&Principal::default()));
        assert!(gated.permits(&Principal::from_headers(None, None, Some("true"))));
    }
}
