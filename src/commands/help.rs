use tracing::instrument;

use crate::{
    commands::LogCommands,
    utils::{
        poise::{CommandResult, ContextExt},
        Context,
    },
};

fn usage(prefix: &str) -> String {
    format!(
        "Use the `{prefix}newgame` command to start a game of Hangman! \
         Then, use the `{prefix}guess` command to guess a letter or digit, \
         or the `{prefix}stopgame` command to stop the game."
    )
}

/// explains how to play
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    aliases("start"),
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn help(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    ctx.reply_ext(usage(ctx.prefix())).await?;

    Ok(())
}
