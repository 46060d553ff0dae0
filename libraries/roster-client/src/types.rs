//! Types for the Roster client.

use roster_core::UserId;
use serde::{Deserialize, Serialize};

/// Connection settings for a Roster server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server base URL, e.g. `http://localhost:8080`
    pub url: String,
}

impl ClientConfig {
    /// Create a config with the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Health check response from the server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerHealth {
    pub status: String,
    pub version: String,
}

/// Confirmation returned by a successful delete.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: UserId,
}

/// `{"success": false, "error": ...}` body returned on failures.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
