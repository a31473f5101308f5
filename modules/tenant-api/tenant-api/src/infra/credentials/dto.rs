//! Orchestrator wire format, as consumed by the tenant API.

use credential_orchestrator_sdk::{
    DbCredentials, ResolvedCredentials, StorageCredentials, TenantIdentity,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub requested_at: u64,
}

#[derive(Debug, Deserialize)]
pub struct RemoteErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TenantBody {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct DbBody {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageBody {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
}

#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    pub tenant: TenantBody,
    pub db: DbBody,
    pub storage: StorageBody,
}

impl From<CredentialsBody> for ResolvedCredentials {
    fn from(body: CredentialsBody) -> Self {
        Self {
            tenant: TenantIdentity {
                name: body.tenant.name,
                email: body.tenant.email,
            },
            db: DbCredentials {
                host: body.db.host,
                user: body.db.user,
                password: SecretString::from(body.db.password),
                database: body.db.database,
            },
            storage: StorageCredentials {
                endpoint: body.storage.endpoint,
                access_key: body.storage.access_key,
                secret_key: SecretString::from(body.storage.secret_key),
                bucket: body.storage.bucket,
            },
        }
    }
}
