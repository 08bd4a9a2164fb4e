//! In-memory secrets provider
//!
//! Holds a fixed set of values handed over at construction. Hosts that pull
//! credentials from their own secret store inject them through this provider,
//! and tests use it to supply fixtures without touching the process
//! environment.

use std::collections::HashMap;

use secrecy::SecretString;

use super::non_empty;
use crate::{SecretsError, SecretsProvider};

#[derive(Default)]
pub struct StaticProvider {
    values: HashMap<String, String>,
}

impl std::fmt::Debug for StaticProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("StaticProvider").field("keys", &keys).finish()
    }
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a value (builder style)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StaticProvider
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SecretsProvider for StaticProvider {
    fn get_secret(&self, key: &str) -> Result<Option<SecretString>, SecretsError> {
        Ok(self.values.get(key).cloned().and_then(non_empty))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
