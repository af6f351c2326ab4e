//! EmailJS REST transport

use anyhow::{Context, Result};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};
use crate::{
    config::{Config, EmailJsSettings},
    types::TemplateParams,
};

const SEND_PATH: &str = "/api/v1.0/email/send";

/// Anything that can deliver a filled-in notification template.
pub trait EmailTransport {
    fn send(&self, params: &TemplateParams) -> impl Future<Output = Result<()>>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

pub struct EmailJsClient {
    client: reqwest::Client,
    settings: EmailJsSettings,
}

impl EmailJsClient {
    pub fn new(settings: EmailJsSettings, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, settings })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.emailjs.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.settings.api_url, SEND_PATH)
    }
}

impl EmailTransport for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<()> {
        let body = SendRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            template_params: params,
        };

        debug!("POST {} (template {})", self.endpoint(), self.settings.template_id);

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .context("HTTP request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("⚠️ EmailJS API returned error status {}: {}", status, body);
            return Err(anyhow::anyhow!("EmailJS API error: {} - {}", status, body));
        }

        Ok(())
    }
}
