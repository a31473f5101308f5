use credential_orchestrator_sdk::{StorageCredentials, TenantIdentity};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::domain::model::Color;

#[derive(Debug, Serialize)]
pub struct TenantDto {
    pub name: String,
    pub email: String,
}

impl From<TenantIdentity> for TenantDto {
    fn from(t: TenantIdentity) -> Self {
        Self {
            name: t.name,
            email: t.email,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDto {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
}

impl From<StorageCredentials> for StorageDto {
    fn from(s: StorageCredentials) -> Self {
        Self {
            endpoint: s.endpoint,
            access_key: s.access_key,
            secret_key: s.secret_key.expose_secret().to_owned(),
            bucket: s.bucket,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ColorDto {
    pub id: i32,
    pub name: String,
    pub hexadecimal: String,
}

impl From<Color> for ColorDto {
    fn from(c: Color) -> Self {
        Self {
            id: c.id,
            name: c.name,
            hexadecimal: c.hexadecimal,
        }
    }
}

/// `/login` response. Database credentials never cross this boundary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub message: &'static str,
    pub tenant: TenantDto,
    pub storage: StorageDto,
    pub client_email: String,
}

#[derive(Debug, Serialize)]
pub struct ColorListDto {
    pub tenant: TenantDto,
    pub count: usize,
    pub data: Vec<ColorDto>,
}

#[derive(Debug, Serialize)]
pub struct ColorDataDto {
    pub tenant: TenantDto,
    pub data: ColorDto,
}

#[derive(Debug, Serialize)]
pub struct ColorRemovedDto {
    pub tenant: TenantDto,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
}
