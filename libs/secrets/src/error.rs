//! Error types for the secrets library

use thiserror::Error;

/// Errors that can occur when working with secrets
#[derive(Error, Debug)]
pub enum SecretsError {
    /// Secret not found
    #[error("Secret not found: {0}")]
    NotFound(String),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvError(String),
}
