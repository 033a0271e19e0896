//! User configuration.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::{EventsError, EventsResult};

static DEFAULT_MIRROR_DIR: &str = "~/.bristol-events";
static DEFAULT_REMOTE_URL: &str = "https://github.com/bristol/events.git";
const DEFAULT_DAYS: u64 = 7;

fn default_mirror_dir() -> String {
    DEFAULT_MIRROR_DIR.to_string()
}

fn default_remote_url() -> String {
    DEFAULT_REMOTE_URL.to_string()
}

fn default_days() -> u64 {
    DEFAULT_DAYS
}

/// Configuration at ~/.config/bristol-events/config.toml
///
/// The file is optional; every key has a default.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// Where the events repository is cloned to
    #[serde(default = "default_mirror_dir")]
    pub mirror_dir: String,

    /// Git remote of the events repository
    #[serde(default = "default_remote_url")]
    pub remote_url: String,

    /// How many days ahead the default listing covers
    #[serde(default = "default_days")]
    pub days: u64,
}

impl Default for EventsConfig {
    fn default() -> Self {
        EventsConfig {
            mirror_dir: default_mirror_dir(),
            remote_url: default_remote_url(),
            days: default_days(),
        }
    }
}

impl EventsConfig {
    pub fn config_path() -> EventsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventsError::Config("Could not determine config directory".into()))?
            .join("bristol-events");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if the file doesn't exist.
    pub fn load() -> EventsResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> EventsResult<Self> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| EventsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventsError::Config(e.to_string()))
    }

    /// Resolve `mirror_dir`, expanding environment variables and a leading `~`.
    ///
    /// The home directory is only looked up when the path starts with `~`.
    pub fn mirror_root(&self) -> EventsResult<PathBuf> {
        self.mirror_root_with(dirs::home_dir)
    }

    fn mirror_root_with(
        &self,
        home_dir: impl FnOnce() -> Option<PathBuf>,
    ) -> EventsResult<PathBuf> {
        let expanded = shellexpand::env(&self.mirror_dir)
            .map_err(|e| EventsError::Config(format!("mirror_dir: {e}")))?;

        let rest = match &*expanded {
            "~" => "",
            path => match path.strip_prefix("~/") {
                Some(rest) => rest,
                None => return Ok(PathBuf::from(path)),
            },
        };

        let home = home_dir().ok_or(EventsError::HomeDirUnavailable)?;
        Ok(if rest.is_empty() { home } else { home.join(rest) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EventsConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.mirror_dir, "~/.bristol-events");
        assert_eq!(config.remote_url, "https://github.com/bristol/events.git");
        assert_eq!(config.days, 7);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "mirror_dir = \"/srv/events\"\ndays = 14\n").unwrap();

        let config = EventsConfig::load_from(&path).unwrap();

        assert_eq!(config.mirror_dir, "/srv/events");
        assert_eq!(config.days, 14);
        assert_eq!(config.remote_url, "https://github.com/bristol/events.git");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "days = \"a fortnight\"\n").unwrap();

        let err = EventsConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, EventsError::Config(_)));
    }

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/alex"))
    }

    #[test]
    fn test_mirror_root_expands_tilde() {
        let config = EventsConfig::default();
        assert_eq!(
            config.mirror_root_with(home).unwrap(),
            PathBuf::from("/home/alex/.bristol-events")
        );
    }

    #[test]
    fn test_mirror_root_keeps_absolute_paths_without_home() {
        let config = EventsConfig {
            mirror_dir: "/srv/events".to_string(),
            ..EventsConfig::default()
        };
        assert_eq!(
            config.mirror_root_with(|| None).unwrap(),
            PathBuf::from("/srv/events")
        );
    }

    #[test]
    fn test_mirror_root_needs_home_for_tilde() {
        let config = EventsConfig::default();
        let err = config.mirror_root_with(|| None).unwrap_err();
        assert!(matches!(err, EventsError::HomeDirUnavailable));
    }

    #[test]
    fn test_mirror_root_unset_variable_is_config_error() {
        let config = EventsConfig {
            mirror_dir: "$BRISTOL_EVENTS_UNSET_TEST_VARIABLE/events".to_string(),
            ..EventsConfig::default()
        };
        let err = config.mirror_root_with(home).unwrap_err();
        assert!(matches!(err, EventsError::Config(_)));
    }
}
