use poise::CreateReply;

use crate::{
    errors::{CommandError, SendMessageError},
    PoiseData,
};

pub type Context<'a> = poise::Context<'a, PoiseData, CommandError>;

pub type Command = poise::Command<PoiseData, CommandError>;
pub type CommandResult = Result<(), CommandError>;

pub trait ContextExt {
    /// Replies to the invoking message.
    async fn reply_ext(&self, text: impl Into<String>) -> Result<(), SendMessageError>;
}

impl ContextExt for Context<'_> {
    async fn reply_ext(&self, text: impl Into<String>) -> Result<(), SendMessageError> {
        let builder = CreateReply::default().reply(true).content(text);
        self.send(builder).await.map_err(SendMessageError::from)?;

        Ok(())
    }
}
