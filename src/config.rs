// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Environment configuration.

use std::{env, error::Error, fmt};

use crate::render::BoundsPolicy;

pub const BOUNDS_POLICY_ENV: &str = "GRIDSKETCH_BOUNDS_POLICY";

/// Settings read from the environment. Unset variables leave the field empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub bounds_policy: Option<BoundsPolicy>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, ConfigError> {
        let value = match lookup(BOUNDS_POLICY_ENV) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnv {
                    name: BOUNDS_POLICY_ENV.to_string(),
                    value: "<non-unicode>".to_string(),
                });
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let policy = parse_bounds_policy(trimmed).ok_or_else(|| ConfigError::InvalidEnv {
            name: BOUNDS_POLICY_ENV.to_string(),
            value: format!("{trimmed} (expected `error` or `ignore`)"),
        })?;

        Ok(Self {
            bounds_policy: Some(policy),
        })
    }

    /// The configured policy, or [`BoundsPolicy::Error`].
    pub fn bounds_policy_or_default(&self) -> BoundsPolicy {
        self.bounds_policy.unwrap_or_default()
    }
}

pub fn parse_bounds_policy(value: &str) -> Option<BoundsPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" | "strict" => Some(BoundsPolicy::Error),
        "ignore" | "clip" => Some(BoundsPolicy::Ignore),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use std::env::VarError;

    use super::{parse_bounds_policy, Config, ConfigError, BOUNDS_POLICY_ENV};
    use crate::render::BoundsPolicy;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Result<String, VarError> {
        move |name: &str| {
            assert_eq!(name, BOUNDS_POLICY_ENV);
            value.map(str::to_owned).ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn unset_or_blank_env_is_empty_config() {
        assert_eq!(Config::from_lookup(lookup(None)).unwrap(), Config::default());
        assert_eq!(Config::from_lookup(lookup(Some("  "))).unwrap(), Config::default());
        assert_eq!(Config::default().bounds_policy_or_default(), BoundsPolicy::Error);
    }

    #[test]
    fn parses_policy_case_insensitively() {
        let config = Config::from_lookup(lookup(Some(" Ignore "))).unwrap();
        assert_eq!(config.bounds_policy, Some(BoundsPolicy::Ignore));
        assert_eq!(parse_bounds_policy("ERROR"), Some(BoundsPolicy::Error));
        assert_eq!(parse_bounds_policy("clip"), Some(BoundsPolicy::Ignore));
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = Config::from_lookup(lookup(Some("sometimes"))).unwrap_err();
        let ConfigError::InvalidEnv { name, value } = err;
        assert_eq!(name, BOUNDS_POLICY_ENV);
        assert!(value.starts_with("sometimes"));
    }
}
