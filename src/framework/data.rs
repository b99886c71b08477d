use poise::serenity_prelude::ChannelId;
use tracing::info;

use crate::{commands::hangman::CustomWordRequests, games::hangman::GameStore, words::WordsClient};

pub mod error;
pub use error::Error as DataError;

pub type Result<T, E = DataError> = std::result::Result<T, E>;

#[derive(Debug, Clone)]
pub struct PoiseData {
    pub(crate) config: super::config::Config,

    games: GameStore<ChannelId>,
    custom_words: CustomWordRequests,
    words: WordsClient,
}

impl PoiseData {
    pub(crate) fn new(config: super::config::Config) -> Result<Self> {
        let words = WordsClient::new(&config.words)?;
        info!(
            default_source = %config.words.default_source,
            timeout_secs = config.words.timeout_secs,
            "word client ready"
        );

        Ok(Self {
            config,
            games: GameStore::new(),
            custom_words: CustomWordRequests::default(),
            words,
        })
    }

    pub(crate) const fn config(&self) -> &super::config::Config {
        &self.config
    }

    pub(crate) const fn games(&self) -> &GameStore<ChannelId> {
        &self.games
    }

    pub(crate) const fn custom_words(&self) -> &CustomWordRequests {
        &self.custom_words
    }

    pub(crate) const fn words(&self) -> &WordsClient {
        &self.words
    }
}
