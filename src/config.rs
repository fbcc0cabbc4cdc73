use crate::consts;
use crate::game::{Field, GameOptions};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Dimensions of the play field
    pub(crate) field: Field,

    /// Number of game loop iterations per second
    pub(crate) tick_rate: NonZeroU32,

    /// Whether each direction key moves the snake straight away on top of the
    /// regular per-tick move
    pub(crate) double_move: bool,

    /// How long to leave "GAME OVER" on screen before exiting, in milliseconds
    pub(crate) game_over_delay_ms: u64,

    /// File to write logs to; no logs are written if this is unset
    pub(crate) log_file: Option<PathBuf>,

    /// Log filter to use when `RUST_LOG` is not set
    pub(crate) log_level: String,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snake-arcade").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    pub(crate) fn game_options(&self) -> GameOptions {
        GameOptions {
            field: self.field,
            double_move: self.double_move,
        }
    }

    pub(crate) fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            field: Field::default(),
            tick_rate: consts::TICK_RATE,
            double_move: false,
            game_over_delay_ms: u64::try_from(consts::GAME_OVER_DELAY.as_millis())
                .unwrap_or(u64::MAX),
            log_file: None,
            log_level: String::from("info"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("should create temp file");
        file.write_all(content.as_bytes())
            .expect("should write temp file");
        file
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.tick_rate.get(), 15);
        assert_eq!(config.game_over_delay(), Duration::from_secs(3));
        assert_eq!(config.game_options(), GameOptions::default());
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn empty_file() {
        let file = write_config("");
        assert_eq!(
            Config::load(file.path(), false).expect("config should load"),
            Config::default()
        );
    }

    #[test]
    fn full_file() {
        let file = write_config(concat!(
            "tick-rate = 30\n",
            "double-move = true\n",
            "game-over-delay-ms = 0\n",
            "log-file = \"/tmp/snake.log\"\n",
            "log-level = \"debug\"\n",
            "\n",
            "[field]\n",
            "width = 800\n",
            "height = 400\n",
            "border = 0\n",
        ));
        let config = Config::load(file.path(), false).expect("config should load");
        assert_eq!(
            config,
            Config {
                field: Field::new(800, 400, 0).expect("field should be valid"),
                tick_rate: NonZeroU32::new(30).expect("rate should be nonzero"),
                double_move: true,
                game_over_delay_ms: 0,
                log_file: Some(PathBuf::from("/tmp/snake.log")),
                log_level: String::from("debug"),
            }
        );
        assert!(config.game_options().double_move);
        assert_eq!(config.game_over_delay(), Duration::ZERO);
    }

    #[test]
    fn partial_field() {
        let file = write_config("[field]\nwidth = 400\n");
        let config = Config::load(file.path(), false).expect("config should load");
        assert_eq!(
            config.field,
            Field::new(400, consts::GAME_HEIGHT, consts::BOARD_LINE_WIDTH)
                .expect("field should be valid")
        );
    }

    #[test]
    fn missing_file_allowed() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("config.toml");
        assert_eq!(
            Config::load(&path, true).expect("config should load"),
            Config::default()
        );
    }

    #[test]
    fn missing_file_not_allowed() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn zero_tick_rate() {
        let file = write_config("tick-rate = 0\n");
        assert!(matches!(
            Config::load(file.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn tiny_field() {
        let file = write_config("[field]\nwidth = 20\nheight = 20\n");
        let Err(ConfigError::Parse(e)) = Config::load(file.path(), false) else {
            panic!("tiny field should fail to parse");
        };
        assert!(
            e.to_string()
                .contains("field width must be between 150 and 10000, got 20"),
            "{e}"
        );
    }
}
