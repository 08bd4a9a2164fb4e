//! Trait definition for secrets providers

use secrecy::SecretString;

use crate::SecretsError;

/// Trait for secrets providers
///
/// Implement this trait to plug in another secret store (e.g. a value
/// injected by the orchestrator or mounted by a vault agent).
pub trait SecretsProvider: Send + Sync {
    /// Get a secret by key
    ///
    /// Returns `Ok(Some(secret))` if found, `Ok(None)` if not found,
    /// or `Err` if there was an error accessing the provider.
    /// Empty values are reported as not found.
    fn get_secret(&self, key: &str) -> Result<Option<SecretString>, SecretsError>;

    /// Get the provider name (for logging)
    fn name(&self) -> &'static str;
}
