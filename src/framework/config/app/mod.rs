use std::path::Path;

use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::words::WordSource;

mod bot;
pub use bot::BotConfig;

const ENV_PREFIX: &str = "HANGBOT";

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub bot: BotConfig,
    pub words: WordsConfig,
    pub logs: LogsConfig,
}

impl AppConfig {
    /// Reads the TOML file at `path` (if it exists), then `HANGBOT_*` overrides.
    ///
    /// Nested keys are separated by a double underscore in the environment,
    /// e.g. `HANGBOT_BOT__PREFIX`.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            warn!("config file not found, using defaults and environment");
        }

        let config = ::config::Config::builder()
            .add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        info!("config loaded");
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(Error::Serialize)
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("file read error: {0}")]
    #[event(level = ERROR)]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    #[event(level = ERROR)]
    Parse(::config::ConfigError),

    #[error("couldn't write config as toml: {0}")]
    #[event(level = ERROR)]
    Serialize(toml::ser::Error),
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct WordsConfig {
    pub default_source: WordSource,
    pub timeout_secs: u64,
    pub retry_secs: u64,
    pub user_agent: String,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            default_source: WordSource::default(),
            timeout_secs: 20,
            retry_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_owned(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LogsConfig {
    flavor_texts: Vec<String>,
}

impl LogsConfig {
    pub fn flavor_text(&self) -> Option<&str> {
        let flavor_text = self
            .flavor_texts
            .iter()
            .choose(&mut rand::thread_rng())
            .map(|s| s.as_str());

        if flavor_text.is_none() {
            warn!("no flavor texts provided in config :(");
        }

        flavor_text
    }
}
