use serde::Deserialize;
use tracing::debug;

use super::domain::{Application, ApplicationId};
use super::gateway::{ApplicationsGateway, GatewayError};
use crate::config::ApiConfig;

/// Gateway speaking to the portal's applicant REST endpoints.
pub struct HttpApplicationsGateway {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// The portal wraps list payloads in a status envelope; only `data` matters
/// to the dashboard.
#[derive(Debug, Deserialize)]
pub(crate) struct ApplicationsEnvelope {
    pub(crate) data: Vec<Application>,
}

impl HttpApplicationsGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let gateway = Self::new(config.base_url.clone());
        match &config.token {
            Some(token) => gateway.with_token(token.clone()),
            None => gateway,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn applications_url(&self) -> String {
        format!("{}/api/applicant/applications", self.base_url)
    }

    fn application_url(&self, id: &ApplicationId) -> String {
        format!("{}/{id}", self.applications_url())
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl ApplicationsGateway for HttpApplicationsGateway {
    async fn fetch_applications(&self) -> Result<Vec<Application>, GatewayError> {
        let url = self.applications_url();
        debug!(%url, "fetching applications");

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|err| GatewayError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let envelope: ApplicationsEnvelope = response
            .json()
            .await
            .map_err(|err| GatewayError::Malformed(err.to_string()))?;

        Ok(envelope.data)
    }

    async fn withdraw_application(&self, id: &ApplicationId) -> Result<(), GatewayError> {
        let url = self.application_url(id);
        debug!(%url, "withdrawing application");

        let response = self
            .authorize(self.client.delete(&url))
            .send()
            .await
            .map_err(|err| GatewayError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        Ok(())
    }
}
