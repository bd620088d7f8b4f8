use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::models::{BackendConfig, ConfigError, User, UserPatch};

/// Per-record operations on the users resource.
///
/// Record responses are read as a [`UserPatch`]: the backend may leave fields
/// out, and only the fields it returns are merged by the caller.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// GET `{resource}/{id}`
    async fn get_user(&self, user_id: i64) -> Result<UserPatch, ApiError>;

    /// POST `{resource}`
    async fn create_user(&self, user: &User) -> Result<UserPatch, ApiError>;

    /// PUT `{resource}/{id}`
    async fn replace_user(&self, user_id: i64, user: &User) -> Result<UserPatch, ApiError>;

    /// PATCH `{resource}/{id}`
    async fn patch_user(&self, user_id: i64, patch: &UserPatch) -> Result<(), ApiError>;

    /// DELETE `{resource}/{id}`
    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError>;
}

/// Optional paging parameters for fetch-collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: usize,
    pub size: usize,
}

/// Bulk read of the users resource
#[async_trait]
pub trait UserListing: Send + Sync {
    /// GET `{resource}`. Without a page query the whole collection is returned.
    async fn fetch_users(&self, page: Option<PageQuery>) -> Result<Vec<User>, ApiError>;
}

/// HTTP connection to the users resource, shared by the services
#[derive(Clone)]
pub struct RestBackend {
    client: Client,
    resource_url: String,
    timeout_seconds: u64,
}

impl RestBackend {
    /// Create a backend connection from configuration
    pub fn new(config: &BackendConfig) -> Result<Self, ConfigError> {
        let url = config.url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(config.url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(format!("userdesk/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|_| ConfigError::InvalidUrl(config.url.clone()))?;

        Ok(Self {
            client,
            resource_url: config.resource_url(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    fn record_url(&self, user_id: &str) -> String {
        format!("{}/{}", self.resource_url, user_id)
    }

    fn transport_error(&self, e: reqwest::Error, url: &str) -> ApiError {
        if e.is_connect() {
            ApiError::ConnectionRefused(format!("Could not connect to users backend at {}", url))
        } else if e.is_timeout() {
            ApiError::Timeout(self.timeout_seconds)
        } else {
            ApiError::from(e)
        }
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(e, url))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e, &url))?;
        serde_json::from_str(&body).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

/// Adapter for per-record backend operations
pub struct UserDirectoryService {
    backend: RestBackend,
}

impl UserDirectoryService {
    pub fn new(backend: RestBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl UserDirectory for UserDirectoryService {
    async fn get_user(&self, user_id: i64) -> Result<UserPatch, ApiError> {
        let url = self.backend.record_url(&user_id.to_string());
        debug!("GET {}", url);
        let response = self.backend.send(self.backend.client.get(&url), &url).await?;
        self.backend.read_json(response).await
    }

    async fn create_user(&self, user: &User) -> Result<UserPatch, ApiError> {
        let url = self.backend.resource_url.clone();
        debug!("POST {} (user_id={})", url, user.user_id);
        let response = self
            .backend
            .send(self.backend.client.post(&url).json(user), &url)
            .await?;
        let created: UserPatch = self.backend.read_json(response).await?;
        match created.user_id {
            Some(id) => info!("Created user {} ({})", id, user.user_name),
            None => info!("Created user {}", user.user_name),
        }
        Ok(created)
    }

    async fn replace_user(&self, user_id: i64, user: &User) -> Result<UserPatch, ApiError> {
        let url = self.backend.record_url(&user_id.to_string());
        debug!("PUT {}", url);
        let response = self
            .backend
            .send(self.backend.client.put(&url).json(user), &url)
            .await?;
        let updated: UserPatch = self.backend.read_json(response).await?;
        info!("Updated user {}", user_id);
        Ok(updated)
    }

    async fn patch_user(&self, user_id: i64, patch: &UserPatch) -> Result<(), ApiError> {
        let url = self.backend.record_url(&user_id.to_string());
        debug!("PATCH {}", url);
        self.backend
            .send(self.backend.client.patch(&url).json(patch), &url)
            .await?;
        info!("Patched user {}", user_id);
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let url = self.backend.record_url(user_id);
        debug!("DELETE {}", url);
        self.backend
            .send(self.backend.client.delete(&url), &url)
            .await?;
        info!("Deleted user {}", user_id);
        Ok(())
    }
}

/// Adapter for the bulk-fetch backend operation
pub struct UserListService {
    backend: RestBackend,
}

impl UserListService {
    pub fn new(backend: RestBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl UserListing for UserListService {
    async fn fetch_users(&self, page: Option<PageQuery>) -> Result<Vec<User>, ApiError> {
        let url = self.backend.resource_url.clone();
        let mut request = self.backend.client.get(&url);
        if let Some(query) = page {
            request = request.query(&query);
        }
        debug!("GET {} (page: {:?})", url, page);

        let response = self.backend.send(request, &url).await?;
        // The backend serializes an empty collection as `null`
        let users: Option<Vec<User>> = self.backend.read_json(response).await?;
        let users = users.unwrap_or_default();
        debug!("Fetched {} users", users.len());
        Ok(users)
    }
}

/// The backend adapters, constructed once per process and shared by the views
#[derive(Clone)]
pub struct Services {
    pub directory: Arc<dyn UserDirectory>,
    pub listing: Arc<dyn UserListing>,
}

impl Services {
    /// Connect both adapters to the configured backend
    pub fn connect(config: &BackendConfig) -> Result<Self, ConfigError> {
        let backend = RestBackend::new(config)?;
        info!("Using users backend at {}", backend.resource_url());
        Ok(Self {
            directory: Arc::new(UserDirectoryService::new(backend.clone())),
            listing: Arc::new(UserListService::new(backend)),
        })
    }
}
