//! # Secrets Library
//!
//! Resolves injected values (credentials, keys, connection strings) from an
//! ordered chain of providers. Nothing here holds a literal credential: every
//! value comes from the process environment or from a store the host injects.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SecretsClient                           │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │  1. Try each provider in order (injected first)     │   │
//! │  │  2. Provider error → log, try the next one          │   │
//! │  │  3. Nothing found → None / SecretsError::NotFound   │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use secrets::SecretsClient;
//!
//! let client = SecretsClient::env_only();
//!
//! // Required value
//! let key = client.get_secret("SECRET_KEY")?;
//!
//! // Optional value
//! let api_key = client.get_secret_optional("SENDGRID_API_KEY")?;
//! ```

mod error;
mod provider;

pub mod providers;

pub use error::SecretsError;
pub use provider::SecretsProvider;
pub use secrecy::{ExposeSecret, SecretString};

use providers::EnvProvider;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for resolving secrets through an ordered provider chain
#[derive(Clone)]
pub struct SecretsClient {
    providers: Vec<Arc<dyn SecretsProvider>>,
}

impl SecretsClient {
    /// Create a client that asks `providers` in the given order
    pub fn new(providers: Vec<Arc<dyn SecretsProvider>>) -> Self {
        Self { providers }
    }

    /// Create a client that only uses environment variables
    pub fn env_only() -> Self {
        Self::new(vec![Arc::new(EnvProvider::new())])
    }

    /// Put `provider` in front of the existing chain
    pub fn with_primary(mut self, provider: Arc<dyn SecretsProvider>) -> Self {
        self.providers.insert(0, provider);
        self
    }

    /// Names of the configured providers, in resolution order
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Get a secret by key. Fails with `NotFound` if no provider has it.
    pub fn get_secret(&self, key: &str) -> Result<SecretString, SecretsError> {
        self.get_secret_optional(key)?
            .ok_or_else(|| SecretsError::NotFound(key.to_string()))
    }

    /// Get a secret by key, returning `None` if not found
    ///
    /// A failing provider does not stop the lookup. Its error is only
    /// returned when no later provider has the key.
    pub fn get_secret_optional(&self, key: &str) -> Result<Option<SecretString>, SecretsError> {
        let mut last_error = None;

        for provider in &self.providers {
            match provider.get_secret(key) {
                Ok(Some(value)) => {
                    debug!(key = %key, provider = provider.name(), "Secret retrieved");
                    return Ok(Some(value));
                }
                Ok(None) => {
                    debug!(
                        key = %key,
                        provider = provider.name(),
                        "Secret not found, trying next provider"
                    );
                }
                Err(e) => {
                    warn!(
                        key = %key,
                        provider = provider.name(),
                        error = %e,
                        "Failed to get secret, trying next provider"
                    );
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => {
                debug!(key = %key, "Secret not found in any provider");
                Ok(None)
            }
        }
    }

    /// Get a non-secret value as a plain string
    pub fn get_value_optional(&self, key: &str) -> Result<Option<String>, SecretsError> {
        Ok(self
            .get_secret_optional(key)?
            .map(|s| s.expose_secret().clone()))
    }

    /// Check if a secret exists in any provider
    pub fn has_secret(&self, key: &str) -> bool {
        matches!(self.get_secret_optional(key), Ok(Some(_)))
    }
}

impl std::fmt::Debug for SecretsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsClient")
            .field("providers", &self.provider_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use crate::providers::StaticProvider;

    mock! {
        pub Provider {}

        impl SecretsProvider for Provider {
            fn get_secret(&self, key: &str) -> Result<Option<SecretString>, SecretsError>;
            fn name(&self) -> &'static str;
        }
    }

    #[test]
    fn test_env_only_client() {
        std::env::set_var("TEST_SECRET_123", "test_value");

        let client = SecretsClient::env_only();
        let secret = client.get_secret_optional("TEST_SECRET_123").unwrap();

        assert!(secret.is_some());
        assert_eq!(secret.unwrap().expose_secret(), "test_value");

        std::env::remove_var("TEST_SECRET_123");
    }

    #[test]
    fn test_missing_secret_returns_none() {
        let client = SecretsClient::env_only();
        let secret = client
            .get_secret_optional("NONEXISTENT_SECRET_KEY_12345")
            .unwrap();

        assert!(secret.is_none());
    }

    #[test]
    fn test_missing_required_secret_is_not_found() {
        let client = SecretsClient::new(vec![Arc::new(StaticProvider::new())]);

        let err = client.get_secret("SECRET_KEY").unwrap_err();
        assert!(matches!(err, SecretsError::NotFound(ref key) if key == "SECRET_KEY"));
    }

    #[test]
    fn test_has_secret() {
        let client = SecretsClient::new(vec![Arc::new(
            StaticProvider::new().with("TEST_HAS_SECRET", "value"),
        )]);

        assert!(client.has_secret("TEST_HAS_SECRET"));
        assert!(!client.has_secret("NONEXISTENT_KEY"));
    }

    #[test]
    fn test_primary_provider_wins() {
        let client = SecretsClient::new(vec![Arc::new(
            StaticProvider::new().with("SHARED", "fallback"),
        )])
        .with_primary(Arc::new(StaticProvider::new().with("SHARED", "primary")));

        let value = client.get_value_optional("SHARED").unwrap();
        assert_eq!(value.as_deref(), Some("primary"));
        assert_eq!(client.provider_names(), vec!["static", "static"]);
    }

    #[test]
    fn test_failing_provider_falls_through() {
        let mut failing = MockProvider::new();
        failing
            .expect_get_secret()
            .withf(|key| key == "SECRET_KEY")
            .times(1)
            .returning(|_| Err(SecretsError::EnvError("boom".to_string())));
        failing.expect_name().return_const("failing");

        let client = SecretsClient::new(vec![
            Arc::new(failing),
            Arc::new(StaticProvider::new().with("SECRET_KEY", "abc")),
        ]);

        let secret = client.get_secret("SECRET_KEY").unwrap();
        assert_eq!(secret.expose_secret(), "abc");
    }

    #[test]
    fn test_error_surfaces_when_nothing_found() {
        let mut failing = MockProvider::new();
        failing
            .expect_get_secret()
            .returning(|_| Err(SecretsError::EnvError("invalid UTF-8".to_string())));
        failing.expect_name().return_const("failing");

        let client = SecretsClient::new(vec![
            Arc::new(StaticProvider::new()),
            Arc::new(failing),
        ]);

        let err = client.get_secret_optional("POSTGRES_PW").unwrap_err();
        assert!(matches!(err, SecretsError::EnvError(_)));
    }

    #[test]
    fn test_debug_lists_provider_names_only() {
        let client = SecretsClient::new(vec![Arc::new(
            StaticProvider::new().with("SECRET_KEY", "do-not-print"),
        )]);

        let rendered = format!("{client:?}");
        assert!(rendered.contains("static"));
        assert!(!rendered.contains("do-not-print"));
    }
}
