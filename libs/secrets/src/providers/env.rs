//! Process environment as a secret source

use std::env::{self, VarError};

use secrecy::SecretString;

use super::non_empty;
use crate::{SecretsError, SecretsProvider};

/// Reads `key` from the process environment at lookup time.
#[derive(Debug, Default)]
pub struct EnvProvider;

impl EnvProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SecretsProvider for EnvProvider {
    fn get_secret(&self, key: &str) -> Result<Option<SecretString>, SecretsError> {
        match env::var(key) {
            Ok(value) => Ok(non_empty(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(SecretsError::EnvError(format!(
                "'{key}' is not valid UTF-8"
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "environment"
    }
}
