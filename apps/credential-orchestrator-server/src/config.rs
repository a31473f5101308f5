use credential_orchestrator::config::{AccessConfig, DatabaseConfig};
use erp_bootstrap::{LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Flat variables honoured next to `APP__SECTION__KEY`.
pub const ENV_ALIASES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("NODE_ENV", "server.environment"),
    ("APP_ENV", "server.environment"),
    ("DATABASE_URL", "database.dsn"),
    ("REQUIRE_ADMIN", "access.require_admin"),
    ("SUPER_ADMIN_ROLE", "access.super_admin_role"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    pub access: AccessConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::with_port(3000),
            logging: LoggingConfig::default(),
            database: DatabaseConfig::default(),
            access: AccessConfig::default(),
        }
    }
}
