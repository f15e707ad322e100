//! Match configuration.
//!
//! A `MatchConfig` carries everything the session collaborator decides
//! before play starts: grid size (and the range it must fall in), the two
//! display names, and an optional RNG seed. It can be loaded from TOML:
//!
//! ```toml
//! size = 4
//! player1 = "ada"
//! player2 = "grace"
//! seed = 7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Match settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Grid side length.
    pub size: usize,

    /// Smallest allowed `size`.
    pub min_size: usize,

    /// Largest allowed `size`.
    pub max_size: usize,

    /// Display name for the first seat.
    pub player1: String,

    /// Display name for the second seat.
    pub player2: String,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            size: 3,
            min_size: 3,
            max_size: 5,
            player1: "Player 1".to_string(),
            player2: "Player 2".to_string(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable for a match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size == 0 {
            return Err(ConfigError::Validation("min_size must be > 0".to_string()));
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::Validation(format!(
                "min_size ({}) must not exceed max_size ({})",
                self.min_size, self.max_size
            )));
        }
        if !(self.min_size..=self.max_size).contains(&self.size) {
            return Err(ConfigError::Validation(format!(
                "size must be between {} and {}, got {}",
                self.min_size, self.max_size, self.size
            )));
        }
        for (field, name) in [("player1", &self.player1), ("player2", &self.player2)] {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{field} name must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Trim a display name and capitalise it: first letter upper case, the
/// rest lower case.
///
/// ```
/// use dice_clash::core::normalize_name;
///
/// assert_eq!(normalize_name("  aDA "), "Ada");
/// assert_eq!(normalize_name(""), "");
/// ```
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.size, 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = MatchConfig::from_toml_str("size = 5\nplayer1 = \"ada\"").unwrap();
        assert_eq!(config.size, 5);
        assert_eq!(config.player1, "ada");
        assert_eq!(config.player2, "Player 2");
        assert_eq!(config.max_size, 5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_size_out_of_range_rejected() {
        let err = MatchConfig::from_toml_str("size = 6").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("between 3 and 5"));
    }

    #[test]
    fn test_custom_bounds() {
        let config = MatchConfig::from_toml_str("size = 8\nmax_size = 10").unwrap();
        assert_eq!(config.size, 8);

        let err = MatchConfig::from_toml_str("min_size = 6\nmax_size = 4").unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = MatchConfig::from_toml_str("player2 = \"   \"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: player2 name must not be empty"
        );
    }

    #[test]
    fn test_bad_toml() {
        let err = MatchConfig::from_toml_str("size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/dice_clash.toml");
        assert!(matches!(
            MatchConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
        assert_eq!(MatchConfig::load_or_default(path).unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("grace"), "Grace");
        assert_eq!(normalize_name("HOPPER"), "Hopper");
        assert_eq!(normalize_name(" élodie"), "Élodie");
    }
}
