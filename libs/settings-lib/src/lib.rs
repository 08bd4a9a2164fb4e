//! Tier-selected settings for the conference application.
//!
//! A base record is built from injected values, then the deployment tier's
//! overrides are applied. The database URL comes either from the
//! `SQLALCHEMY_DATABASE_URI` override or from the credential parts.

pub mod constants;
pub mod database;
pub mod errors;
pub mod provider;
pub mod settings;
pub mod tier;

pub use database::{DatabaseCredentials, DatabaseUrlSource};
pub use errors::SettingsError;
pub use provider::{load, SettingsProvider};
pub use settings::{Settings, SettingsSummary};
pub use tier::{Tier, TierOverrides};
