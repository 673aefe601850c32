//! REST client for the board API.
//!
//! Wraps the `/api/v1` endpoints the board needs using [`reqwest`].
//! Non-2xx responses are decoded from the API's `{ "error", "code" }` body
//! into [`ClientError::Api`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use taskboard_core::status::ProjectStatus;
use taskboard_core::types::DbId;

use crate::error::ClientError;
use crate::gateway::ProjectGateway;
use crate::model::Project;

/// HTTP gateway for a single API base URL and bearer token.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

impl HttpGateway {
    /// * `base_url` - Server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Use an access token obtained elsewhere.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// `POST /api/v1/auth/login` and keep the returned access token.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;

        let login: LoginResponse = Self::parse_response(response).await?;
        self.token = Some(login.access_token);
        tracing::debug!(username, "Logged in");
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`ClientError::Api`], falling back to the
    /// raw body text when it is not the API's error shape.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let (code, message) = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => (parsed.code, parsed.error),
            Err(_) => ("UNKNOWN".to_string(), body),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ProjectGateway for HttpGateway {
    async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self
            .authorized(self.client.get(self.url("/projects")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_project_status(
        &self,
        project_id: DbId,
        status: ProjectStatus,
    ) -> Result<Project, ClientError> {
        let response = self
            .authorized(
                self.client
                    .patch(self.url(&format!("/projects/{project_id}")))
                    .json(&serde_json::json!({ "status": status })),
            )
            .send()
            .await?;
        Self::parse_response(response).await
    }
}
