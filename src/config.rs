use crate::consts;
use crate::game::Grid;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Geometry of the board
    pub(crate) grid: Grid,

    /// Time between movements of the snake
    pub(crate) tick_period: Duration,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(consts::APP_DIR).join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized or were out of range.
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
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid: Grid::new(consts::CELL_SIZE, consts::GRID_WIDTH, consts::GRID_HEIGHT),
            tick_period: consts::TICK_PERIOD,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    cell_size: u16,
    grid_width: u16,
    grid_height: u16,
    tick_period_ms: u64,
}

impl Default for RawConfig {
    fn default() -> RawConfig {
        let config = Config::default();
        RawConfig {
            cell_size: config.grid.cell_size(),
            grid_width: config.grid.width(),
            grid_height: config.grid.height(),
            tick_period_ms: u64::try_from(config.tick_period.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = InvalidConfig;

    fn try_from(value: RawConfig) -> Result<Config, InvalidConfig> {
        if value.cell_size == 0 {
            return Err(InvalidConfig::ZeroCellSize);
        }
        if value.grid_width == 0 || value.grid_height == 0 {
            return Err(InvalidConfig::ZeroGrid);
        }
        let grid = Grid::new(value.cell_size, value.grid_width, value.grid_height);
        // Room for a one-cell snake and one piece of food
        if grid.cell_count() < 2 {
            return Err(InvalidConfig::GridTooSmall);
        }
        if value.tick_period_ms == 0 {
            return Err(InvalidConfig::ZeroTickPeriod);
        }
        Ok(Config {
            grid,
            tick_period: Duration::from_millis(value.tick_period_ms),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidConfig {
    #[error("cell-size must be at least 1")]
    ZeroCellSize,
    #[error("grid-width and grid-height must be at least 1")]
    ZeroGrid,
    #[error("the grid must have at least two cells")]
    GridTooSmall,
    #[error("tick-period-ms must be at least 1")]
    ZeroTickPeriod,
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
    use rstest::rstest;
    use std::error::Error as _;

    #[test]
    fn empty_file_gives_defaults() {
        let config = toml::from_str::<Config>("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid, Grid::new(40, 30, 20));
        assert_eq!(config.tick_period, Duration::from_millis(100));
    }

    #[test]
    fn full_file() {
        let src = concat!(
            "cell-size = 16\n",
            "grid-width = 40\n",
            "grid-height = 25\n",
            "tick-period-ms = 80\n",
        );
        let config = toml::from_str::<Config>(src).unwrap();
        assert_eq!(
            config,
            Config {
                grid: Grid::new(16, 40, 25),
                tick_period: Duration::from_millis(80),
            }
        );
    }

    #[test]
    fn partial_file() {
        let config = toml::from_str::<Config>("grid-width = 12\n").unwrap();
        assert_eq!(config.grid, Grid::new(40, 12, 20));
        assert_eq!(config.tick_period, consts::TICK_PERIOD);
    }

    #[rstest]
    #[case("cell-size = 0\n", InvalidConfig::ZeroCellSize)]
    #[case("grid-width = 0\n", InvalidConfig::ZeroGrid)]
    #[case("grid-height = 0\n", InvalidConfig::ZeroGrid)]
    #[case("grid-width = 1\ngrid-height = 1\n", InvalidConfig::GridTooSmall)]
    #[case("tick-period-ms = 0\n", InvalidConfig::ZeroTickPeriod)]
    fn invalid_values(#[case] src: &str, #[case] err: InvalidConfig) {
        let e = toml::from_str::<Config>(src).unwrap_err();
        assert!(
            e.to_string().contains(&err.to_string()),
            "unexpected error: {e}"
        );
    }

    #[test]
    fn unknown_key() {
        assert!(toml::from_str::<Config>("difficulty = 3\n").is_err());
    }

    #[test]
    fn load_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "tick-period-ms = 250\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.tick_period, Duration::from_millis(250));
        assert_eq!(config.grid, Config::default().grid);
    }

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("nonexistent.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_not_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("nonexistent.toml");
        let e = Config::load(&path, false).unwrap_err();
        assert!(matches!(e, ConfigError::Read(_)), "{e:?}");
    }

    #[test]
    fn load_invalid() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "grid-width = \"wide\"\n").unwrap();
        let e = Config::load(&path, false).unwrap_err();
        assert!(matches!(e, ConfigError::Parse(_)), "{e:?}");
        assert!(e.source().is_some());
    }
}
