//! Configuration file handling.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use typecov_chart::ComboUniverse;

use crate::cli::Cli;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "typecov.toml";

/// Team file used when neither the CLI nor the config names one
pub const DEFAULT_INPUT_FILE: &str = "poke_input.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Report settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Team file
    pub input: PathBuf,

    /// Output format
    pub format: OutputFormat,

    /// Skip the intro banner and team listing
    pub quiet: bool,

    /// Print the global combo index before the report
    pub dump_index: bool,

    /// Combo universe settings
    pub chart: ChartSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Keep combinations no real creature uses
    pub include_unused: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-aligned text tables (default)
    #[default]
    Table,
    /// JSON document
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            format: OutputFormat::Table,
            quiet: false,
            dump_index: false,
            chart: ChartSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command-line overrides.
    pub fn apply(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.input = input.clone();
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self.quiet |= cli.quiet;
        self.dump_index |= cli.dump_index;
        self.chart.include_unused |= cli.include_unused;
    }

    /// Combo universe selected by the chart settings
    pub fn universe(&self) -> ComboUniverse {
        if self.chart.include_unused {
            ComboUniverse::unrestricted()
        } else {
            ComboUniverse::standard()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("poke_input.txt"));
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.universe().len(), 306);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "input = \"team.txt\"").unwrap();
        writeln!(file, "format = \"json\"").unwrap();
        writeln!(file, "[chart]").unwrap();
        writeln!(file, "include_unused = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("team.txt"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.quiet);
        assert_eq!(config.universe().len(), 324);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"xml\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_discover_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            Config::discover(Some(&path)),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();
        let cli = Cli::try_parse_from(["typecov", "mine.txt", "-f", "json", "--dump-index"]).unwrap();
        config.apply(&cli);

        assert_eq!(config.input, PathBuf::from("mine.txt"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.dump_index);
        assert!(!config.chart.include_unused);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }
}
