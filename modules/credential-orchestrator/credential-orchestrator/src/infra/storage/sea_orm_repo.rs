use async_trait::async_trait;
use credential_orchestrator_sdk::ResolvedCredentials;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, Statement,
};

use crate::domain::repo::CredentialRepository;

use super::entity::{self, Entity as ClientCredentials};

pub struct SeaOrmCredentialRepository {
    db: DatabaseConnection,
}

impl SeaOrmCredentialRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialRepository for SeaOrmCredentialRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<ResolvedCredentials>> {
        let row = ClientCredentials::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let backend = self.db.get_database_backend();
        self.db
            .query_one(Statement::from_string(backend, "SELECT 1"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::infra::storage::db;
    use sea_orm::{ActiveModelTrait, ActiveValue};
    use secrecy::ExposeSecret;

    async fn store() -> DatabaseConnection {
        db::connect(&DatabaseConfig {
            dsn: "sqlite::memory:".to_owned(),
            max_connections: 1,
            run_migrations: true,
        })
        .await
        .expect("in-memory store")
    }

    async fn seed(db: &DatabaseConnection, email: &str) {
        entity::ActiveModel {
            email: ActiveValue::Set(email.to_owned()),
            name: ActiveValue::Set("Acme".to_owned()),
            db_host: ActiveValue::Set("db.acme".to_owned()),
            db_user: ActiveValue::Set("acme".to_owned()),
            db_password: ActiveValue::Set("p@ss".to_owned()),
            db_name: ActiveValue::Set("acme_db".to_owned()),
            storage_endpoint: ActiveValue::Set("https://s3.acme".to_owned()),
            storage_access_key: ActiveValue::Set("AK".to_owned()),
            storage_secret_key: ActiveValue::Set("SK".to_owned()),
            storage_bucket: ActiveValue::Set("acme".to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("seed row");
    }

    #[tokio::test]
    async fn finds_seeded_client() {
        let db = store().await;
        seed(&db, "ops@acme.io").await;
        let repo = SeaOrmCredentialRepository::new(db);

        let found = repo.find_by_email("ops@acme.io").await.unwrap().unwrap();

        assert_eq!(found.tenant.name, "Acme");
        assert_eq!(found.db.password.expose_secret(), "p@ss");
        assert_eq!(found.storage.secret_key.expose_secret(), "SK");
        assert!(repo.find_by_email("nobody@acme.io").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn email_is_unique() {
        let db = store().await;
        seed(&db, "ops@acme.io").await;

        let dup = entity::ActiveModel {
            email: ActiveValue::Set("ops@acme.io".to_owned()),
            name: ActiveValue::Set("Dup".to_owned()),
            db_host: ActiveValue::Set(String::new()),
            db_user: ActiveValue::Set(String::new()),
            db_password: ActiveValue::Set(String::new()),
            db_name: ActiveValue::Set(String::new()),
            storage_endpoint: ActiveValue::Set(String::new()),
            storage_access_key: ActiveValue::Set(String::new()),
            storage_secret_key: ActiveValue::Set(String::new()),
            storage_bucket: ActiveValue::Set(String::new()),
            ..Default::default()
        }
        .insert(&db)
        .await;

        assert!(dup.is_err());
    }

    #[tokio::test]
    async fn ping_round_trips() {
        let repo = SeaOrmCredentialRepository::new(store().await);
        repo.ping().await.unwrap();
    }
}
