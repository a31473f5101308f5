use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use credential_orchestrator_sdk::{
    DbCredentials, ResolvedCredentials, StorageCredentials, TenantIdentity,
};
use secrecy::SecretString;

use crate::domain::error::DomainError;
use crate::domain::repo::CredentialRepository;
use crate::domain::service::Service;

#[derive(Default)]
struct MockRepository {
    known_email: Option<String>,
    fail: bool,
    seen: Mutex<Vec<String>>,
}

fn bundle(email: &str) -> ResolvedCredentials {
    ResolvedCredentials {
        tenant: TenantIdentity {
            name: "Acme".to_owned(),
            email: email.to_owned(),
        },
        db: DbCredentials {
            host: "db.acme".to_owned(),
            user: "acme".to_owned(),
            password: SecretString::from("pw".to_owned()),
            database: "acme_db".to_owned(),
        },
        storage: StorageCredentials {
            endpoint: "https://s3.acme".to_owned(),
            access_key: "AK".to_owned(),
            secret_key: SecretString::from("SK".to_owned()),
            bucket: "acme".to_owned(),
        },
    }
}

#[async_trait]
impl CredentialRepository for MockRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<ResolvedCredentials>> {
        self.seen.lock().unwrap().push(email.to_owned());
        if self.fail {
            anyhow::bail!("store offline");
        }
        Ok(self
            .known_email
            .as_deref()
            .filter(|known| *known == email)
            .map(bundle))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("store offline");
        }
        Ok(())
    }
}

#[tokio::test]
async fn lookup_lowercases_before_querying() {
    let repo = Arc::new(MockRepository {
        known_email: Some("ops@acme.io".to_owned()),
        ..MockRepository::default()
    });
    let service = Service::new(Arc::clone(&repo));

    let creds = service.lookup("Ops@ACME.io").await.unwrap();

    assert_eq!(creds.tenant.email, "ops@acme.io");
    assert_eq!(repo.seen.lock().unwrap().as_slice(), ["ops@acme.io"]);
}

#[tokio::test]
async fn lookup_trims_surrounding_whitespace() {
    let repo = Arc::new(MockRepository {
        known_email: Some("ops@acme.io".to_owned()),
        ..MockRepository::default()
    });
    let service = Service::new(Arc::clone(&repo));

    service.lookup("  Ops@Acme.io ").await.unwrap();

    assert_eq!(repo.seen.lock().unwrap().as_slice(), ["ops@acme.io"]);
}

#[tokio::test]
async fn lookup_unknown_email_is_not_found() {
    let service = Service::new(Arc::new(MockRepository::default()));

    let err = service.lookup("Ghost@Nowhere.io").await.unwrap_err();

    assert!(matches!(&err, DomainError::NotFound { email } if email == "ghost@nowhere.io"));
    assert_eq!(
        err.to_string(),
        "Client with email ghost@nowhere.io was not found"
    );
}

#[tokio::test]
async fn store_failures_are_internal() {
    let service = Service::new(Arc::new(MockRepository {
        fail: true,
        ..MockRepository::default()
    }));

    assert!(matches!(
        service.lookup("a@b.c").await,
        Err(DomainError::Internal(_))
    ));
    assert!(matches!(service.health().await, Err(DomainError::Internal(_))));
}
