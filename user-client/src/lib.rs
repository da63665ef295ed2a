//! Typed HTTP client for the users API.
//!
//! Every call unwraps the response envelope: a non-success status becomes a
//! [`ClientError::Api`] carrying the server's message, and a success returns
//! the envelope's `data`.

use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use users_shared::models::{ApiResponse, HealthResponse, User, UserInput, UserPatch};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("response envelope has no data")]
    MissingData,
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(err) => err.status(),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::MissingData => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct UserClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/api/users/{}", self.base_url, id)
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.call::<(), _>(Method::GET, self.users_url(), None).await
    }

    pub async fn get_user(&self, id: u64) -> Result<User> {
        self.call::<(), _>(Method::GET, self.user_url(id), None).await
    }

    pub async fn create_user(&self, input: &UserInput) -> Result<User> {
        self.call(Method::POST, self.users_url(), Some(input)).await
    }

    pub async fn replace_user(&self, id: u64, input: &UserInput) -> Result<User> {
        self.call(Method::PUT, self.user_url(id), Some(input)).await
    }

    pub async fn patch_user(&self, id: u64, patch: &UserPatch) -> Result<User> {
        self.call(Method::PATCH, self.user_url(id), Some(patch)).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<User> {
        self.call::<(), _>(Method::DELETE, self.user_url(id), None).await
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let resp = self
            .http
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error(status, resp).await);
        }

        Ok(resp.json().await?)
    }

    async fn call<B, T>(&self, method: Method, url: String, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(api_error(status, resp).await);
        }

        let envelope: ApiResponse<T> = resp.json().await?;
        envelope.data.ok_or(ClientError::MissingData)
    }
}

// Prefer the envelope message, fall back to the status reason
async fn api_error(status: StatusCode, resp: reqwest::Response) -> ClientError {
    let message = match resp.json::<ApiResponse<serde_json::Value>>().await {
        Ok(ApiResponse {
            message: Some(message),
            ..
        }) => message,
        _ => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    ClientError::Api { status, message }
}
