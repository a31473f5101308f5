use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use async_trait::async_trait;
use credential_orchestrator_sdk::{
    CredentialClient, CredentialError, ResolvedCredentials, normalize_email,
};
use tracing::instrument;

use super::dto::{CredentialsBody, LookupRequest, RemoteErrorBody};
use crate::config::CredentialsConfig;

pub const UNCONFIGURED_MESSAGE: &str = "NODE_API_BASE_URL is not configured";
pub const REMOTE_FALLBACK_MESSAGE: &str = "Credential service responded with an error";

/// Credential client talking to the orchestrator over HTTP.
///
/// Every call performs a fresh lookup bounded by the configured timeouts.
pub struct HttpCredentialClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl HttpCredentialClient {
    /// # Errors
    /// Fails when the underlying HTTP client cannot be built.
    pub fn new(cfg: &CredentialsConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(cfg.connect_timeout)
            .timeout(cfg.request_timeout)
            .build()
            .context("failed to build credential HTTP client")?;

        Ok(Self {
            http,
            base_url: cfg.base_url().map(|url| url.trim_end_matches('/').to_owned()),
        })
    }

    fn lookup_url(&self, email: &str) -> Result<String, CredentialError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| CredentialError::Configuration(UNCONFIGURED_MESSAGE.to_owned()))?;
        Ok(format!("{base}/client/{}", urlencoding::encode(email)))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn transport(err: &reqwest::Error) -> CredentialError {
    CredentialError::Transport(err.to_string())
}

#[async_trait]
impl CredentialClient for HttpCredentialClient {
    #[instrument(skip(self), fields(status = tracing::field::Empty))]
    async fn fetch(&self, email: &str) -> Result<ResolvedCredentials, CredentialError> {
        let url = self.lookup_url(&normalize_email(email))?;

        let response = self
            .http
            .post(&url)
            .json(&LookupRequest {
                requested_at: unix_now(),
            })
            .send()
            .await
            .map_err(|e| transport(&e))?;

        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());
        let body = response.bytes().await.map_err(|e| transport(&e))?;

        if status.as_u16() >= 400 {
            let message = serde_json::from_slice::<RemoteErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| REMOTE_FALLBACK_MESSAGE.to_owned());
            tracing::warn!(status = status.as_u16(), %message, "credential lookup rejected");
            return Err(CredentialError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: CredentialsBody = serde_json::from_slice(&body).map_err(|err| {
            tracing::warn!(error = %err, "credential response did not decode");
            CredentialError::Malformed
        })?;

        Ok(parsed.into())
    }
}
