//! Configuration for the credential orchestrator.

use serde::{Deserialize, Serialize};

/// Credential Store connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// `SeaORM` connection URL. Never printed.
    #[serde(skip_serializing)]
    pub dsn: String,
    pub max_connections: u32,
    /// Apply pending schema migrations at startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://credentials.db?mode=rwc".to_owned(),
            max_connections: 10,
            run_migrations: true,
        }
    }
}

/// Header-principal gate in front of the lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessConfig {
    /// When set, `/client/{email}` requires an admin or super-admin principal.
    pub require_admin: bool,
    /// Role name that passes the gate regardless of `x-admin`.
    pub super_admin_role: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            require_admin: false,
            super_admin_role: "super_admin".to_owned(),
        }
    }
}
