use credential_orchestrator_sdk::{
    DbCredentials, ResolvedCredentials, StorageCredentials, TenantIdentity,
};
use sea_orm::entity::prelude::*;
use secrecy::SecretString;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "client_credentials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub storage_endpoint: String,
    pub storage_access_key: String,
    pub storage_secret_key: String,
    pub storage_bucket: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ResolvedCredentials {
    fn from(m: Model) -> Self {
        Self {
            tenant: TenantIdentity {
                name: m.name,
                email: m.email,
            },
            db: DbCredentials {
                host: m.db_host,
                user: m.db_user,
                password: SecretString::from(m.db_password),
                database: m.db_name,
            },
            storage: StorageCredentials {
                endpoint: m.storage_endpoint,
                access_key: m.storage_access_key,
                secret_key: SecretString::from(m.storage_secret_key),
                bucket: m.storage_bucket,
            },
        }
    }
}
