use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::SettingsError;

/// Deployment tier a settings record is loaded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Development,
    Production,
}

/// Fields a tier replaces on the base record. `None` keeps the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierOverrides {
    pub debug_enabled: Option<bool>,
}

impl Tier {
    pub const ALL: [Tier; 2] = [Tier::Development, Tier::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Development => "development",
            Tier::Production => "production",
        }
    }

    pub fn overrides(&self) -> TierOverrides {
        match self {
            Tier::Development => TierOverrides {
                debug_enabled: Some(true),
            },
            Tier::Production => TierOverrides {
                debug_enabled: Some(false),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Tier::Production)
    }
}

impl FromStr for Tier {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| SettingsError::UnknownTier(s.to_string()))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tiers() {
        assert_eq!("development".parse::<Tier>().unwrap(), Tier::Development);
        assert_eq!("production".parse::<Tier>().unwrap(), Tier::Production);
        assert_eq!(" Production ".parse::<Tier>().unwrap(), Tier::Production);
    }

    #[test]
    fn test_parse_unknown_tier() {
        let err = "staging".parse::<Tier>().unwrap_err();
        assert!(matches!(err, SettingsError::UnknownTier(ref t) if t == "staging"));

        assert!("".parse::<Tier>().is_err());
        assert!("dev".parse::<Tier>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_override_table() {
        assert_eq!(Tier::Development.overrides().debug_enabled, Some(true));
        assert_eq!(Tier::Production.overrides().debug_enabled, Some(false));
        assert!(Tier::Production.is_production());
        assert!(!Tier::Development.is_production());
    }
}
