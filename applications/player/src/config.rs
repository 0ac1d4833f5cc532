/// Player configuration
use crate::error::{PlayerError, Result};
use eptss_playlist::{PlaylistOptions, ShuffleStrategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "eptss-player.toml";

/// Environment prefix, e.g. `EPTSS__PLAYBACK__AUTO_PLAY_NEXT=false`
pub const ENV_PREFIX: &str = "EPTSS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_auto_play_next")]
    pub auto_play_next: bool,

    #[serde(default)]
    pub shuffle_strategy: ShuffleStrategy,

    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl PlayerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `eptss-player.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with EPTSS__)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: PlayerConfig = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(PlayerError::Config(
                "logging.filter must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl PlaybackSettings {
    /// Controller options for these settings
    pub fn playlist_options(&self) -> PlaylistOptions {
        PlaylistOptions {
            auto_play_next: self.auto_play_next,
            shuffle_strategy: self.shuffle_strategy,
            seed: self.seed,
        }
    }
}

// Default values
fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        auto_play_next: default_auto_play_next(),
        shuffle_strategy: ShuffleStrategy::default(),
        seed: None,
    }
}

fn default_auto_play_next() -> bool {
    true
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_filter(),
    }
}

fn default_filter() -> String {
    "eptss_player=info,eptss_playlist=info".to_string()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playback: default_playback(),
            logging: default_logging(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        default_playback()
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        default_logging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_controller_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.playback.playlist_options(), PlaylistOptions::default());
        assert_eq!(config.logging.filter, "eptss_player=info,eptss_playlist=info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_filter_is_rejected() {
        let mut config = PlayerConfig::default();
        config.logging.filter = "  ".to_string();
        assert!(matches!(config.validate(), Err(PlayerError::Config(_))));
    }

    #[test]
    fn toml_rendering_names_sections() {
        let mut config = PlayerConfig::default();
        config.playback.seed = Some(9);
        config.playback.shuffle_strategy = ShuffleStrategy::Order;

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[playback]"));
        assert!(rendered.contains("shuffle_strategy = \"order\""));
        assert!(rendered.contains("seed = 9"));
        assert!(rendered.contains("[logging]"));
    }
}
