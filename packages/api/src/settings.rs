//! # Application settings
//!
//! Layered with the `config` crate, later sources winning:
//!
//! 1. built-in defaults (placeholder backend, data directory under the OS data dir)
//! 2. `nexlance.toml` in the working directory, if present
//! 3. environment variables prefixed `NEXLANCE_`, sections split by `__`
//!
//! ```toml
//! [backend]
//! url = "https://abcd.supabase.co"
//! anon_key = "eyJhbGciOi..."
//!
//! [storage]
//! dir = "/var/lib/nexlance"
//! ```
//!
//! The same keys as environment variables: `NEXLANCE_BACKEND__URL`,
//! `NEXLANCE_BACKEND__ANON_KEY`, `NEXLANCE_STORAGE__DIR`. [`Settings::new`] also
//! loads a `.env` file first, so those can live there during development.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use store::config::{PLACEHOLDER_ANON_KEY, PLACEHOLDER_URL};
use store::BackendConfig;

pub type SettingsError = ConfigError;

const CONFIG_FILE: &str = "nexlance.toml";
const ENV_PREFIX: &str = "NEXLANCE";

/// Where local state is kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Storage {
    pub dir: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nexlance")
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Settings {
    pub backend: BackendConfig,
    pub storage: Storage,
}

impl Settings {
    /// Load from `.env`, `nexlance.toml` and the process environment.
    pub fn new() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::load(Path::new(CONFIG_FILE), Environment::with_prefix(ENV_PREFIX))
    }

    /// Load with an explicit optional config file and environment source.
    pub fn load(file: &Path, env: Environment) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .set_default("backend.url", PLACEHOLDER_URL)?
            .set_default("backend.anon_key", PLACEHOLDER_ANON_KEY)?
            .set_default("storage.dir", default_data_dir().to_string_lossy().into_owned())?
            .add_source(
                File::from(file)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(env.prefix_separator("_").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults_are_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("missing.toml"), env(&[])).unwrap();
        assert_eq!(settings.backend, BackendConfig::default());
        assert!(!settings.backend.is_configured());
        assert!(settings.storage.dir.ends_with("nexlance"));
    }

    #[test]
    fn test_file_then_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nexlance.toml");
        fs::write(
            &path,
            r#"
[backend]
url = "https://abcd.supabase.co"
anon_key = "from-file"

[storage]
dir = "/tmp/nexlance-file"
"#,
        )
        .unwrap();

        let settings = Settings::load(&path, env(&[])).unwrap();
        assert_eq!(settings.backend.url, "https://abcd.supabase.co");
        assert_eq!(settings.backend.anon_key, "from-file");
        assert!(settings.backend.is_configured());
        assert_eq!(settings.storage.dir, PathBuf::from("/tmp/nexlance-file"));

        let settings = Settings::load(
            &path,
            env(&[
                ("NEXLANCE_BACKEND__ANON_KEY", "from-env"),
                ("NEXLANCE_STORAGE__DIR", "/tmp/nexlance-env"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.backend.url, "https://abcd.supabase.co");
        assert_eq!(settings.backend.anon_key, "from-env");
        assert_eq!(settings.storage.dir, PathBuf::from("/tmp/nexlance-env"));
    }
}
