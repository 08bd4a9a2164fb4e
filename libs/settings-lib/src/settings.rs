use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::database::{DatabaseCredentials, DatabaseUrlSource};
use crate::tier::{Tier, TierOverrides};

/// Debug flag of the base record, before any tier override.
pub const BASE_DEBUG_ENABLED: bool = true;

const REDACTED: &str = "[REDACTED]";

/// Immutable configuration record for one process.
///
/// Built once by [`crate::SettingsProvider::load`]; there are no setters.
/// `Debug` never prints secret values.
#[derive(Debug, Clone)]
pub struct Settings {
    pub(crate) tier: Tier,
    pub(crate) debug_enabled: bool,
    pub(crate) database: DatabaseCredentials,
    pub(crate) database_url: SecretString,
    pub(crate) database_url_source: DatabaseUrlSource,
    pub(crate) conference_id: u32,
    pub(crate) secret_key: SecretString,
    pub(crate) queue_connection_string: SecretString,
    pub(crate) queue_name: String,
    pub(crate) admin_email: String,
    pub(crate) notification_api_key: SecretString,
}

impl Settings {
    pub(crate) fn apply_overrides(mut self, overrides: TierOverrides) -> Self {
        if let Some(debug_enabled) = overrides.debug_enabled {
            self.debug_enabled = debug_enabled;
        }
        self
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn db_host(&self) -> &str {
        &self.database.host
    }

    pub fn db_user(&self) -> Option<&str> {
        self.database.user.as_deref()
    }

    pub fn db_password(&self) -> Option<&SecretString> {
        self.database.password.as_ref()
    }

    pub fn db_name(&self) -> &str {
        &self.database.name
    }

    /// Effective connection string, exposed for the database client.
    pub fn database_url(&self) -> &str {
        self.database_url.expose_secret()
    }

    pub fn database_url_source(&self) -> DatabaseUrlSource {
        self.database_url_source
    }

    pub fn conference_id(&self) -> u32 {
        self.conference_id
    }

    pub fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }

    pub fn queue_connection_string(&self) -> &SecretString {
        &self.queue_connection_string
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    pub fn notification_api_key(&self) -> &SecretString {
        &self.notification_api_key
    }

    pub fn has_notification_api_key(&self) -> bool {
        !self.notification_api_key.expose_secret().is_empty()
    }

    /// Redacted view, safe to log or print.
    pub fn summary(&self) -> SettingsSummary {
        SettingsSummary {
            tier: self.tier,
            debug_enabled: self.debug_enabled,
            db_host: self.database.host.clone(),
            db_user: self.database.user.clone(),
            db_name: self.database.name.clone(),
            database_url: redact(self.database_url()),
            database_url_source: self.database_url_source,
            conference_id: self.conference_id,
            secret_key: redact(self.secret_key.expose_secret()),
            queue_connection_string: redact(self.queue_connection_string.expose_secret()),
            queue_name: self.queue_name.clone(),
            admin_email: self.admin_email.clone(),
            notification_api_key: redact(self.notification_api_key.expose_secret()),
        }
    }
}

fn redact(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}

fn secret_eq(a: &SecretString, b: &SecretString) -> bool {
    a.expose_secret() == b.expose_secret()
}

impl PartialEq for Settings {
    fn eq(&self, other: &Self) -> bool {
        let password_eq = match (&self.database.password, &other.database.password) {
            (Some(a), Some(b)) => secret_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        self.tier == other.tier
            && self.debug_enabled == other.debug_enabled
            && self.database.host == other.database.host
            && self.database.user == other.database.user
            && password_eq
            && self.database.name == other.database.name
            && secret_eq(&self.database_url, &other.database_url)
            && self.database_url_source == other.database_url_source
            && self.conference_id == other.conference_id
            && secret_eq(&self.secret_key, &other.secret_key)
            && secret_eq(&self.queue_connection_string, &other.queue_connection_string)
            && self.queue_name == other.queue_name
            && self.admin_email == other.admin_email
            && secret_eq(&self.notification_api_key, &other.notification_api_key)
    }
}

impl Eq for Settings {}

/// Serializable, secret-free view of [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSummary {
    pub tier: Tier,
    pub debug_enabled: bool,
    pub db_host: String,
    pub db_user: Option<String>,
    pub db_name: String,
    pub database_url: String,
    pub database_url_source: DatabaseUrlSource,
    pub conference_id: u32,
    pub secret_key: String,
    pub queue_connection_string: String,
    pub queue_name: String,
    pub admin_email: String,
    pub notification_api_key: String,
}
