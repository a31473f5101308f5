//! Resolved tenant credential records.

use secrecy::SecretString;

/// Normalize a tenant email for lookup and storage.
///
/// Emails are the sole tenant key; surrounding whitespace is dropped and
/// they compare case-insensitively.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Public identity of a tenant, safe to echo in responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantIdentity {
    pub name: String,
    pub email: String,
}

/// Parameters for reaching the tenant's own database.
#[derive(Debug)]
pub struct DbCredentials {
    pub host: String,
    pub user: String,
    pub password: SecretString,
    pub database: String,
}

/// Parameters for reaching the tenant's object-storage bucket.
#[derive(Debug)]
pub struct StorageCredentials {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: SecretString,
    pub bucket: String,
}

/// Everything the orchestrator knows about one tenant.
///
/// Held only for the duration of a single request.
#[derive(Debug)]
pub struct ResolvedCredentials {
    pub tenant: TenantIdentity,
    pub db: DbCredentials,
    pub storage: StorageCredentials,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_lowercases() {
        assert_eq!(normalize_email("A@B.com"), "a@b.com");
        assert_eq!(normalize_email("a@b.com"), normalize_email("A@B.COM"));
        assert_eq!(normalize_email("  Ops@Acme.io\n"), "ops@acme.io");
    }

    #[test]
    fn debug_never_prints_secrets() {
        let db = DbCredentials {
            host: "mysql".to_owned(),
            user: "client1_user".to_owned(),
            password: SecretString::from("client1_pass".to_owned()),
            database: "client1_db".to_owned(),
        };
        let rendered = format!("{db:?}");
        assert!(!rendered.contains("client1_pass"));
        assert!(rendered.contains("client1_db"));
    }
}
