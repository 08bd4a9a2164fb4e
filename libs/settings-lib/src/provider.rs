use secrecy::SecretString;
use secrets::{SecretsClient, SecretsError};
use tracing::{debug, info, warn};

use crate::constants::{
    ADMIN_EMAIL_ADDRESS, CONFERENCE_ID, DATABASE_URL_OVERRIDE, DEFAULT_ADMIN_EMAIL,
    DEFAULT_CONFERENCE_ID, DEFAULT_POSTGRES_DB, DEFAULT_POSTGRES_HOST, DEFAULT_QUEUE_NAME,
    POSTGRES_DB, POSTGRES_HOST, POSTGRES_PASSWORD, POSTGRES_USER, SECRET_KEY,
    SENDGRID_API_KEY, SERVICE_BUS_CONNECTION_STRING, SERVICE_BUS_QUEUE_NAME,
};
use crate::database::{resolve_database_url, DatabaseCredentials};
use crate::errors::SettingsError;
use crate::settings::{Settings, BASE_DEBUG_ENABLED};
use crate::tier::Tier;

/// Builds [`Settings`] from the values a [`SecretsClient`] can resolve.
#[derive(Debug, Clone)]
pub struct SettingsProvider {
    secrets: SecretsClient,
}

impl SettingsProvider {
    pub fn new(secrets: SecretsClient) -> Self {
        Self { secrets }
    }

    /// Provider backed by the process environment only
    pub fn from_env() -> Self {
        Self::new(SecretsClient::env_only())
    }

    /// Parse `tier` and load the record for it.
    pub fn load(&self, tier: &str) -> Result<Settings, SettingsError> {
        let tier: Tier = tier.parse()?;
        self.load_tier(tier)
    }

    /// Base record first, then the tier's overrides on top.
    pub fn load_tier(&self, tier: Tier) -> Result<Settings, SettingsError> {
        let settings = self.base(tier)?.apply_overrides(tier.overrides());

        info!(
            tier = %tier,
            debug_enabled = settings.debug_enabled(),
            database_url_source = ?settings.database_url_source(),
            conference_id = settings.conference_id(),
            "settings loaded"
        );

        Ok(settings)
    }

    fn base(&self, tier: Tier) -> Result<Settings, SettingsError> {
        let override_url = self.secrets.get_secret_optional(DATABASE_URL_OVERRIDE)?;

        let has_override = override_url.is_some();
        if has_override {
            debug!(variable = DATABASE_URL_OVERRIDE, "using database url override");
        }

        let database = DatabaseCredentials {
            host: self.value_or(POSTGRES_HOST, DEFAULT_POSTGRES_HOST)?,
            user: self.credential(POSTGRES_USER, has_override, |key| {
                self.secrets.get_value_optional(key)
            })?,
            password: self.credential(POSTGRES_PASSWORD, has_override, |key| {
                self.secrets.get_secret_optional(key)
            })?,
            name: self.value_or(POSTGRES_DB, DEFAULT_POSTGRES_DB)?,
        };

        let (database_url, database_url_source) = resolve_database_url(override_url, &database)?;

        Ok(Settings {
            tier,
            debug_enabled: BASE_DEBUG_ENABLED,
            database,
            database_url,
            database_url_source,
            conference_id: self.conference_id()?,
            secret_key: self.required(SECRET_KEY)?,
            queue_connection_string: self.required(SERVICE_BUS_CONNECTION_STRING)?,
            queue_name: self.value_or(SERVICE_BUS_QUEUE_NAME, DEFAULT_QUEUE_NAME)?,
            admin_email: self.value_or(ADMIN_EMAIL_ADDRESS, DEFAULT_ADMIN_EMAIL)?,
            notification_api_key: self
                .secrets
                .get_secret_optional(SENDGRID_API_KEY)?
                .unwrap_or_else(|| SecretString::new(String::new())),
        })
    }

    /// Credential parts only matter when the URL is derived from them.
    /// Under an override a read failure is logged and the part left empty.
    fn credential<T>(
        &self,
        key: &str,
        has_override: bool,
        read: impl FnOnce(&str) -> Result<Option<T>, SecretsError>,
    ) -> Result<Option<T>, SettingsError> {
        match read(key) {
            Ok(value) => Ok(value),
            Err(e) if has_override => {
                warn!(
                    variable = key,
                    error = %e,
                    "ignoring unreadable credential, database url override is set"
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn required(&self, key: &'static str) -> Result<SecretString, SettingsError> {
        self.secrets
            .get_secret_optional(key)?
            .ok_or(SettingsError::MissingSecret(key))
    }

    fn value_or(&self, key: &str, default: &str) -> Result<String, SettingsError> {
        Ok(self
            .secrets
            .get_value_optional(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    fn conference_id(&self) -> Result<u32, SettingsError> {
        let Some(raw) = self.secrets.get_value_optional(CONFERENCE_ID)? else {
            return Ok(DEFAULT_CONFERENCE_ID);
        };

        match raw.trim().parse() {
            Ok(id) => Ok(id),
            Err(_) => {
                warn!(
                    variable = CONFERENCE_ID,
                    value = %raw,
                    default = DEFAULT_CONFERENCE_ID,
                    "ignoring invalid conference id"
                );
                Ok(DEFAULT_CONFERENCE_ID)
            }
        }
    }
}

impl Default for SettingsProvider {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Load settings for `tier` from the process environment.
pub fn load(tier: &str) -> Result<Settings, SettingsError> {
    SettingsProvider::from_env().load(tier)
}
