//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use url::Url;

use crate::api::DEFAULT_BASE_URL;
use crate::app::PaletteDefaults;
use crate::models::{SchemeMode, SeedColor, SeedColorError, DEFAULT_SEED};

/// Terminal color scheme generator backed by The Color API
#[derive(Debug, Parser)]
#[command(name = "chroma-tui", version, about)]
pub struct Args {
    /// Starting seed color, with or without a leading '#'
    #[arg(short, long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Scheme mode: monochrome, monochrome-dark, monochrome-light, analogic,
    /// complement, analogic-complement, triad or quad
    #[arg(short, long, default_value = "analogic")]
    pub mode: SchemeMode,

    /// Number of colors to request
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub count: u32,

    /// Base URL of the color scheme service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds (default: none)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Fetch one scheme, print it and exit without the TUI
    #[arg(long)]
    pub print: bool,

    /// With --print, emit the decoded scheme as JSON
    #[arg(long, requires = "print")]
    pub json: bool,

    /// Log file (default: <cache dir>/chroma-tui/chroma-tui.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid --seed: {0}")]
    Seed(#[from] SeedColorError),
    #[error("invalid --base-url '{url}': {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("--base-url must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub seed: SeedColor,
    pub mode: SchemeMode,
    pub count: u32,
    pub base_url: Url,
    pub timeout: Option<Duration>,
    pub print: bool,
    pub json: bool,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn defaults(&self) -> PaletteDefaults {
        PaletteDefaults {
            seed: self.seed.clone(),
            mode: self.mode,
            count: self.count,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let seed = SeedColor::parse(&args.seed)?;
        let base_url = Url::parse(&args.base_url).map_err(|source| ConfigError::BaseUrl {
            url: args.base_url.clone(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base_url.scheme().to_string()));
        }

        Ok(Config {
            seed,
            mode: args.mode,
            count: args.count,
            base_url,
            timeout: args.timeout_secs.map(Duration::from_secs),
            print: args.print,
            json: args.json,
            log_file: args.log_file,
            verbose: args.verbose,
        })
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> Result<Config, ConfigError> {
    Config::try_from(Args::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(argv: &[&str]) -> Result<Config, ConfigError> {
        let mut full = vec!["chroma-tui"];
        full.extend_from_slice(argv);
        Config::try_from(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.defaults(), PaletteDefaults::default());
        assert_eq!(config.base_url.as_str(), "https://www.thecolorapi.com/");
        assert!(config.timeout.is_none());
        assert!(!config.print);
    }

    #[test]
    fn test_seed_is_normalized() {
        let config = config(&["--seed", "ff8800", "--mode", "triad", "-n", "3"]).unwrap();
        assert_eq!(config.seed.as_str(), "#FF8800");
        assert_eq!(config.mode, SchemeMode::Triad);
        assert_eq!(config.count, 3);
    }

    #[test]
    fn test_invalid_seed_rejected() {
        assert!(matches!(config(&["--seed", "#12"]), Err(ConfigError::Seed(_))));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            config(&["--base-url", "not a url"]),
            Err(ConfigError::BaseUrl { .. })
        ));
        assert!(matches!(
            config(&["--base-url", "ftp://example.com"]),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_count_range_enforced() {
        assert!(Args::try_parse_from(["chroma-tui", "--count", "0"]).is_err());
        assert!(Args::try_parse_from(["chroma-tui", "--count", "51"]).is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Args::try_parse_from(["chroma-tui", "--mode", "pastel"]).is_err());
    }

    #[test]
    fn test_json_requires_print() {
        assert!(Args::try_parse_from(["chroma-tui", "--json"]).is_err());
        let config = config(&["--print", "--json", "--timeout-secs", "4"]).unwrap();
        assert!(config.print && config.json);
        assert_eq!(config.timeout, Some(Duration::from_secs(4)));
    }
}
