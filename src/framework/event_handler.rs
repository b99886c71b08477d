use std::{future::Future, pin::Pin};

use poise::{
    serenity_prelude::{self as serenity, FullEvent, Message},
    FrameworkContext,
};
use tracing::trace;

use crate::{commands::hangman::read_custom_word, errors::CommandError, PoiseData};

async fn event_handler(
    serenity_ctx: &serenity::Context,
    event: &FullEvent,
    framework_ctx: FrameworkContext<'_, PoiseData, CommandError>,
    data: &PoiseData,
) -> Result<(), CommandError> {
    let prefix = data.config().bot.prefix();

    // commands sent in private are handled by the framework, not here
    let filter_private_msg = move |msg: &Message| {
        msg.guild_id.is_none()
            && !msg.author.bot
            && msg.author.id != framework_ctx.bot_id
            && !msg.content.starts_with(prefix)
    };

    if let FullEvent::Message { new_message: msg } = event {
        if filter_private_msg(msg) {
            trace!(?msg.id, "private message captured");
            read_custom_word(serenity_ctx, data, msg).await?;
        }
    }

    Ok(())
}

pub fn poise<'a>(
    serenity_ctx: &'a serenity::Context,
    event: &'a FullEvent,
    framework_ctx: FrameworkContext<'a, PoiseData, CommandError>,
    data: &'a PoiseData,
) -> Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>> {
    Box::pin(event_handler(serenity_ctx, event, framework_ctx, data))
}
