use poise::serenity_prelude::{ActivityData, ChannelId, GuildId};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct BotConfig {
    prefix: String,
    testing_server: Option<GuildId>,
    activity: Option<String>,
    status_channel: Option<ChannelId>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_owned(),
            testing_server: None,
            activity: None,
            status_channel: None,
        }
    }
}

impl BotConfig {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn testing_server(&self) -> Option<GuildId> {
        if self.testing_server.is_none() {
            debug!("no testing server set in config, registering commands globally");
        }

        self.testing_server
    }

    pub fn status_channel(&self) -> Option<ChannelId> {
        self.status_channel
    }

    pub fn activity(&self) -> Option<ActivityData> {
        let Some(activity) = &self.activity else {
            debug!("no bot.activity provided in config, defaulting to none");
            return None;
        };

        if activity.is_empty() {
            warn!("bot.activity provided in config as empty string, defaulting to none");
            return None;
        }

        let parsed = if let Some(name) = activity.strip_prefix("playing ") {
            ActivityData::playing(name)
        } else if let Some(name) = activity.strip_prefix("listening to ") {
            ActivityData::listening(name)
        } else if let Some(name) = activity.strip_prefix("watching ") {
            ActivityData::watching(name)
        } else if let Some(name) = activity.strip_prefix("competing in ") {
            ActivityData::competing(name)
        } else {
            error!("bot.activity in config could not be parsed - must start with `playing`, `listening to`, `watching` or `competing in`");
            warn!("disabling bot activity");
            return None;
        };

        debug!(
            "bot.activity parsed as {:?}: {}",
            parsed.kind, parsed.name
        );
        info!("successfully parsed bot activity from config");

        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::ActivityType;

    use super::BotConfig;

    fn with_activity(activity: &str) -> BotConfig {
        BotConfig {
            activity: Some(activity.to_owned()),
            ..BotConfig::default()
        }
    }

    #[test]
    fn parses_activity_kinds() {
        let cases = [
            ("playing hangman", ActivityType::Playing, "hangman"),
            ("listening to guesses", ActivityType::Listening, "guesses"),
            ("watching the gallows", ActivityType::Watching, "the gallows"),
            ("competing in spelling", ActivityType::Competing, "spelling"),
        ];

        for (text, kind, name) in cases {
            let activity = with_activity(text).activity().expect("valid activity");
            assert_eq!(activity.kind, kind);
            assert_eq!(activity.name, name);
        }
    }

    #[test]
    fn rejects_unknown_activity() {
        assert!(with_activity("dancing").activity().is_none());
        assert!(with_activity("").activity().is_none());
        assert!(BotConfig::default().activity().is_none());
    }
}
