//! CLI configuration.
//!
//! Loaded from a YAML file given with `--config`. Without the flag the
//! defaults apply: strict password policy, reason codes as output.
//!
//! ```yaml
//! password_policy:
//!   min_length: 10
//!   require_upper: true
//!   require_lower: true
//!   require_digit: false
//! locale: tr
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use eczane_core::PasswordPolicy;

/// How rejection reasons are rendered in text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Locale-independent codes such as `TOO_SHORT`.
    #[default]
    Code,
    /// Turkish messages as shown by the web client.
    Tr,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub password_policy: PasswordPolicy,
    pub locale: Locale,
}

impl CliConfig {
    /// Load configuration from `path`, or return defaults when no path is
    /// given.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FileNotFound`] if the path does not exist,
    /// [`ConfigError::Io`] for other read failures and
    /// [`ConfigError::YamlParse`] for malformed YAML or an invalid policy.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("no config file given; using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn no_path_gives_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.password_policy, PasswordPolicy::strict());
        assert_eq!(config.locale, Locale::Code);
    }

    #[test]
    fn full_file_is_honoured() {
        let file = write_config(
            "password_policy:\n  min_length: 10\n  require_upper: true\n  require_lower: true\n  require_digit: false\nlocale: tr\n",
        );
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(
            config.password_policy,
            PasswordPolicy::new(10, true, true, false).unwrap()
        );
        assert_eq!(config.locale, Locale::Tr);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("locale: tr\n");
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.password_policy, PasswordPolicy::strict());
        assert_eq!(config.locale, Locale::Tr);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn zero_min_length_is_a_parse_error() {
        let file = write_config("password_policy:\n  min_length: 0\n");
        let err = CliConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::YamlParse { .. }));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let file = write_config("colour: blue\n");
        assert!(matches!(
            CliConfig::load(Some(file.path())).unwrap_err(),
            ConfigError::YamlParse { .. }
        ));
    }
}
