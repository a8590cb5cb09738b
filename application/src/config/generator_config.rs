//! Generator configuration — explicit collaborator settings.
//!
//! [`GeneratorConfig`] carries everything a [`TextGenerator`] adapter needs
//! to reach the service. It is always passed in explicitly; nothing in the
//! core reads credentials or endpoints from ambient process state.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for a text-generation adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Model identifier, in the service's naming scheme.
    pub model: String,
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Bearer token for the service. Never serialized; deserializing a
    /// config without one leaves it empty for the caller to fill in.
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Per-request timeout enforced by the adapter, not the core.
    pub request_timeout: Option<Duration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "mistralai/mistral-7b-instruct".to_string(),
            endpoint: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            api_key: String::new(),
            request_timeout: Some(Duration::from_secs(60)),
        }
    }
}

impl GeneratorConfig {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}
