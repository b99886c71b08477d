//! Random words from the web.

use std::{fmt, str::FromStr, time::Duration};

use backoff::ExponentialBackoffBuilder;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

mod error;
pub use error::Error;

mod urban_dictionary;
mod wiktionary;

use crate::framework::config::WordsConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSource {
    #[default]
    Wiktionary,
    UrbanDictionary,
}

impl WordSource {
    pub const ALL: [Self; 2] = [Self::Wiktionary, Self::UrbanDictionary];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wiktionary => "wiktionary",
            Self::UrbanDictionary => "urbandictionary",
        }
    }

    /// Parses a command argument, falling back to `default` when it's blank.
    pub fn from_arg(arg: Option<&str>, default: Self) -> Result<Self, UnknownSource> {
        match arg.map(str::trim) {
            None | Some("") => Ok(default),
            Some(name) => name.parse(),
        }
    }

    async fn fetch_once(self, client: &reqwest::Client) -> Result<String, Error> {
        match self {
            Self::Wiktionary => wiktionary::random(client).await,
            Self::UrbanDictionary => urban_dictionary::random(client).await,
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown word source `{0}`")]
pub struct UnknownSource(pub String);

impl FromStr for WordSource {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSource(s.to_owned()))
    }
}

fn non_blank(word: String, url: &str) -> Result<String, Error> {
    let trimmed = word.trim();

    if trimmed.is_empty() {
        Err(Error::BlankWord(url.to_owned()))
    } else {
        Ok(trimmed.to_owned())
    }
}

#[derive(Debug, Clone)]
pub struct WordsClient {
    client: reqwest::Client,
    retry_for: Duration,
}

impl WordsClient {
    pub fn new(config: &WordsConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            retry_for: Duration::from_secs(config.retry_secs),
        })
    }

    /// Fetches a word, retrying transient failures for a while.
    #[instrument(skip(self))]
    pub async fn fetch(&self, source: WordSource) -> Result<String, Error> {
        let policy = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(self.retry_for))
            .build();

        let word = backoff::future::retry_notify(
            policy,
            move || async move { source.fetch_once(&self.client).await.map_err(Error::backoff) },
            |err, after: Duration| warn!(%err, ?after, "word fetch failed, retrying"),
        )
        .await?;

        info!(%source, "fetched word");
        Ok(word)
    }
}
