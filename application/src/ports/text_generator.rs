//! Text generator port
//!
//! Defines the narrow interface to the external text-generation service.
//! The core never constructs prompts, opens connections, or retries —
//! adapters own all of that, configured by an explicit
//! [`GeneratorConfig`](crate::config::GeneratorConfig) value.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while obtaining a completion.
///
/// Every variant means the same thing to the recovery pipeline — there is
/// no usable body, so recovery cannot start — but the distinctions matter
/// to operators reading logs.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("service returned status {status}: {detail}")]
    BadStatus { status: u16, detail: String },

    #[error("response body was empty")]
    EmptyBody,

    #[error("timeout")]
    Timeout,

    #[error("other error: {0}")]
    Other(String),
}

/// Gateway to the text-generation service.
///
/// The application layer consumes exactly one operation: prompt in, raw
/// reply body out. Implementations (HTTP adapters, test stubs) live outside
/// this crate.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the raw reply body.
    async fn complete(&self, prompt: &str) -> Result<String, GeneratorError>;
}
