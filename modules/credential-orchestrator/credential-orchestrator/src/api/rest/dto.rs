use credential_orchestrator_sdk::ResolvedCredentials;
use secrecy::ExposeSecret;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TenantDto {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct DbDto {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDto {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
}

/// Wire shape of a successful lookup. Secrets leave the service only here.
#[derive(Debug, Serialize)]
pub struct CredentialsDto {
    pub tenant: TenantDto,
    pub db: DbDto,
    pub storage: StorageDto,
}

impl From<ResolvedCredentials> for CredentialsDto {
    fn from(c: ResolvedCredentials) -> Self {
        Self {
            tenant: TenantDto {
                name: c.tenant.name,
                email: c.tenant.email,
            },
            db: DbDto {
                host: c.db.host,
                user: c.db.user,
                password: c.db.password.expose_secret().to_owned(),
                database: c.db.database,
            },
            storage: StorageDto {
                endpoint: c.storage.endpoint,
                access_key: c.storage.access_key,
                secret_key: c.storage.secret_key.expose_secret().to_owned(),
                bucket: c.storage.bucket,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDto {
    pub name: &'static str,
    pub status: &'static str,
    pub healthy: &'static str,
    pub credentials_endpoint: &'static str,
}

impl Default for BannerDto {
    fn default() -> Self {
        Self {
            name: "credential-orchestrator",
            status: "online",
            healthy: "/health",
            credentials_endpoint: "/client/:email",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
}
