use secrets::SecretsError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("unknown tier '{0}', expected 'development' or 'production'")]
    UnknownTier(String),

    #[error("required setting {0} is not set")]
    MissingSecret(&'static str),

    #[error(transparent)]
    Secrets(#[from] SecretsError),
}
