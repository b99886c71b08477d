use poise::serenity_prelude::{CacheHttp, ChannelId, Message, UserId};

use crate::errors::SendMessageError;

pub trait ChannelIdExt {
    async fn say_ext(
        self,
        cache_http: impl CacheHttp,
        content: impl Into<String>,
    ) -> Result<Message, SendMessageError>;
}

impl ChannelIdExt for ChannelId {
    async fn say_ext(
        self,
        cache_http: impl CacheHttp,
        content: impl Into<String>,
    ) -> Result<Message, SendMessageError> {
        self.say(cache_http, content)
            .await
            .map_err(SendMessageError::from)
    }
}

pub trait UserIdExt {
    /// Opens (or reuses) a private channel with the user and says `content` there.
    async fn direct_message_ext(
        self,
        cache_http: impl CacheHttp,
        content: impl Into<String>,
    ) -> Result<Message, SendMessageError>;
}

impl UserIdExt for UserId {
    async fn direct_message_ext(
        self,
        cache_http: impl CacheHttp,
        content: impl Into<String>,
    ) -> Result<Message, SendMessageError> {
        let channel = self
            .create_dm_channel(&cache_http)
            .await
            .map_err(SendMessageError::from)?;

        channel.id.say_ext(cache_http, content).await
    }
}
