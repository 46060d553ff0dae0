//! Main Roster API client.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, DeleteResponse, ErrorBody, ServerHealth};
use reqwest::Client;
use roster_core::{CreateUser, UpdateUser, User, UserId};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Typed client for the Roster users API.
///
/// The user list is cached under a single slot; every successful mutation
/// invalidates it so the next `get_users` re-fetches.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, RosterClient};
///
/// let client = RosterClient::new(ClientConfig::new("http://localhost:8080"))?;
///
/// let users = client.get_users().await?;       // fetches
/// let users = client.get_users().await?;       // served from cache
///
/// client.delete_user(&users[0].id).await?;     // invalidates
/// let users = client.get_users().await?;       // re-fetches
/// ```
pub struct RosterClient {
    http: Client,
    base_url: String,
    cache: RwLock<Option<Vec<User>>>,
}

impl RosterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            cache: RwLock::new(None),
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Test the connection to the server.
    pub async fn health(&self) -> Result<ServerHealth> {
        let url = format!("{}/api/health", self.base_url);
        debug!(url = %url, "Testing server connection");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let health: ServerHealth = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse health response: {}", e))
            })?;

            info!(
                status = %health.status,
                version = %health.version,
                "Connected to server"
            );

            Ok(health)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Get all users.
    ///
    /// Returns the cached list when one is present; otherwise fetches from
    /// the server and caches the result.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        if let Some(users) = self.cache.read().await.as_ref() {
            debug!(count = users.len(), "Serving user list from cache");
            return Ok(users.clone());
        }

        let users = self.fetch_users().await?;
        *self.cache.write().await = Some(users.clone());
        Ok(users)
    }

    /// Create a user. Invalidates the cached list on success.
    pub async fn create_user(&self, payload: CreateUser) -> Result<User> {
        let url = format!("{}/api/users", self.base_url);
        debug!(url = %url, "Creating user");

        let response = self.http.post(&url).json(&payload).send().await?;
        let status = response.status();

        if status.is_success() {
            let user: User = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user response: {}", e))
            })?;

            debug!(id = %user.id, "Created user");
            self.invalidate().await;
            Ok(user)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Shallow-update a user. Invalidates the cached list on success.
    pub async fn update_user(&self, id: &UserId, payload: UpdateUser) -> Result<User> {
        let url = format!(
            "{}/api/users?id={}",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        debug!(url = %url, id = %id, "Updating user");

        let response = self.http.put(&url).json(&payload).send().await?;
        let status = response.status();

        if status.is_success() {
            let user: User = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user response: {}", e))
            })?;

            debug!(id = %user.id, "Updated user");
            self.invalidate().await;
            Ok(user)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Delete a user. Invalidates the cached list on success.
    pub async fn delete_user(&self, id: &UserId) -> Result<DeleteResponse> {
        let url = format!(
            "{}/api/users?id={}",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        debug!(url = %url, id = %id, "Deleting user");

        let response = self.http.delete(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let confirmation: DeleteResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse delete response: {}", e))
            })?;

            debug!(id = %confirmation.id, "Deleted user");
            self.invalidate().await;
            Ok(confirmation)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Drop the cached list; the next `get_users` re-fetches.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/api/users", self.base_url);
        debug!(url = %url, "Fetching user list");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let users: Vec<User> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user list: {}", e))
            })?;

            debug!(count = users.len(), "Fetched user list");
            Ok(users)
        } else {
            Err(error_from_response(response).await)
        }
    }
}

/// Decode a failure response into a `ClientError::Server`.
///
/// Error bodies carry `{"success": false, "error": <message>}`; anything
/// else falls back to the raw text.
async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    ClientError::Server { status, message }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(RosterClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(RosterClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(RosterClient::new(ClientConfig::new("")).is_err());
        assert!(RosterClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(RosterClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            RosterClient::new(ClientConfig::new("https://example.com/")).expect("valid url");
        assert_eq!(client.url(), "https://example.com");
    }
}
