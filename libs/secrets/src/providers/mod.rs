//! Secrets provider implementations

mod env;
mod fixed;

pub use env::EnvProvider;
pub use fixed::StaticProvider;

use secrecy::SecretString;

/// Every provider treats an empty value as not set.
pub(crate) fn non_empty(value: String) -> Option<SecretString> {
    (!value.is_empty()).then(|| SecretString::new(value))
}
