use erp_bootstrap::{LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};
use tenant_api::config::{CredentialsConfig, LoginConfig, TenantDbConfig};

/// Flat variables honoured next to `APP__SECTION__KEY`.
pub const ENV_ALIASES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("NODE_ENV", "server.environment"),
    ("APP_ENV", "server.environment"),
    ("NODE_API_BASE_URL", "credentials.base_url"),
    ("LOGIN_USERNAME", "login.username"),
    ("LOGIN_PASSWORD", "login.password"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub credentials: CredentialsConfig,
    pub login: LoginConfig,
    pub tenant_db: TenantDbConfig,
}
