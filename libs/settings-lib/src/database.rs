use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::constants::{DATABASE_SCHEME, POSTGRES_PASSWORD, POSTGRES_USER};
use crate::errors::SettingsError;

/// Where the effective database URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseUrlSource {
    /// The override variable was set and non-empty
    Environment,
    /// Assembled from the credential parts
    Credentials,
}

/// Discrete parts the connection string is assembled from.
#[derive(Debug, Clone)]
pub struct DatabaseCredentials {
    pub host: String,
    pub user: Option<String>,
    pub password: Option<SecretString>,
    pub name: String,
}

impl DatabaseCredentials {
    /// `postgresql://{user}:{password}@{host}/{name}`, substituted verbatim.
    pub fn connection_string(&self) -> Result<SecretString, SettingsError> {
        let user = self
            .user
            .as_deref()
            .ok_or(SettingsError::MissingSecret(POSTGRES_USER))?;
        let password = self
            .password
            .as_ref()
            .ok_or(SettingsError::MissingSecret(POSTGRES_PASSWORD))?;

        Ok(SecretString::new(format!(
            "{DATABASE_SCHEME}://{user}:{password}@{host}/{name}",
            password = password.expose_secret(),
            host = self.host,
            name = self.name,
        )))
    }
}

/// Pick the effective URL: a non-empty override wins, otherwise the
/// credentials are formatted. Exactly one source is ever used.
pub fn resolve_database_url(
    override_url: Option<SecretString>,
    credentials: &DatabaseCredentials,
) -> Result<(SecretString, DatabaseUrlSource), SettingsError> {
    match override_url {
        Some(url) if !url.expose_secret().is_empty() => Ok((url, DatabaseUrlSource::Environment)),
        _ => Ok((
            credentials.connection_string()?,
            DatabaseUrlSource::Credentials,
        )),
    }
}
