//! duocal configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INVITE_PREFIX, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use crate::error::{DuocalError, DuocalResult};

fn default_invite_prefix() -> String {
    DEFAULT_INVITE_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    DEFAULT_SERVER_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_SERVER_PORT
}

/// Configuration at ~/.config/duocal/config.toml
///
/// Every key can be overridden from the environment with a `DUOCAL_` prefix;
/// nested keys use a double underscore (`DUOCAL_SERVER__PORT=8080`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuocalConfig {
    #[serde(default = "default_invite_prefix")]
    pub invite_prefix: String,

    /// IANA zone name. Falls back to the system zone, then UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Start new sessions with a sample event
    #[serde(default = "default_true")]
    pub seed_welcome_event: bool,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DuocalConfig {
    fn default() -> Self {
        DuocalConfig {
            invite_prefix: default_invite_prefix(),
            timezone: None,
            seed_welcome_event: true,
            server: ServerConfig::default(),
        }
    }
}

impl DuocalConfig {
    pub fn config_path() -> DuocalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DuocalError::Config("Could not determine config directory".into()))?
            .join("duocal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file just means defaults.
    pub fn load() -> DuocalResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> DuocalResult<Self> {
        Self::load_with_env(path, environment())
    }

    /// Load `path` with `env` layered on top of it.
    fn load_with_env(path: &Path, env: Environment) -> DuocalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| DuocalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DuocalError::Config(e.to_string()))
    }

    /// Zone used for day boundaries and draft clock times.
    pub fn time_zone(&self) -> DuocalResult<Tz> {
        match &self.timezone {
            Some(name) => parse_time_zone(name),
            None => Ok(system_time_zone()),
        }
    }

    pub fn save(&self, path: &Path) -> DuocalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DuocalError::Serialization(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| DuocalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DuocalResult<()> {
        let contents = format!(
            "\
# duocal configuration

# Prefix of generated invite codes:
# invite_prefix = \"{}\"

# Time zone for the calendar (defaults to the system zone):
# timezone = \"Europe/Berlin\"

# Start each session with a sample event:
# seed_welcome_event = true

# [server]
# host = \"{}\"
# port = {}
",
            DEFAULT_INVITE_PREFIX, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DuocalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DuocalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// `DUOCAL_INVITE_PREFIX`, `DUOCAL_SERVER__PORT`, ...
fn environment() -> Environment {
    Environment::with_prefix("DUOCAL")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn parse_time_zone(name: &str) -> DuocalResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DuocalError::UnknownTimeZone(name.to_string()))
}

/// The system zone, or UTC when it can't be determined.
pub fn system_time_zone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(Tz::UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DuocalConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.invite_prefix, "LOVE");
        assert!(config.seed_welcome_event);
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "invite_prefix = \"US\"\ntimezone = \"Asia/Tokyo\"\nseed_welcome_event = false\n\n[server]\nport = 8080\n",
        )
        .unwrap();

        let config = DuocalConfig::load_from(&path).unwrap();
        assert_eq!(config.invite_prefix, "US");
        assert!(!config.seed_welcome_event);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.time_zone().unwrap(), chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        DuocalConfig::create_default_config(&path).unwrap();
        let config = DuocalConfig::load_from(&path).unwrap();

        assert_eq!(config.invite_prefix, DuocalConfig::default().invite_prefix);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = DuocalConfig {
            timezone: Some("Europe/Lisbon".into()),
            ..DuocalConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(DuocalConfig::load_from(&path).unwrap(), config);
    }

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "invite_prefix = \"US\"\n\n[server]\nhost = \"0.0.0.0\"\nport = 8080\n",
        )
        .unwrap();

        let env = env_from(&[
            ("DUOCAL_INVITE_PREFIX", "KISS"),
            ("DUOCAL_SERVER__PORT", "9090"),
        ]);
        let config = DuocalConfig::load_with_env(&path, env).unwrap();

        assert_eq!(config.invite_prefix, "KISS");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn environment_without_prefix_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_from(&[("INVITE_PREFIX", "KISS"), ("SERVER__PORT", "9090")]);
        let config = DuocalConfig::load_with_env(&dir.path().join("config.toml"), env).unwrap();

        assert_eq!(config.invite_prefix, "LOVE");
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let config = DuocalConfig {
            timezone: Some("Mars/Olympus_Mons".into()),
            ..DuocalConfig::default()
        };
        assert!(matches!(
            config.time_zone(),
            Err(DuocalError::UnknownTimeZone(_))
        ));
    }
}
