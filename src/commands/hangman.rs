use std::{collections::HashMap, sync::Arc};

use poise::serenity_prelude::{self as serenity, ChannelId, Message, UserId};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::{
    commands::LogCommands,
    games::hangman::{AlreadyInProgress, Game, LetterUnit, Outcome, State},
    utils::{
        poise::{CommandResult, ContextExt},
        serenity::channel::{ChannelIdExt, UserIdExt},
        Context,
    },
    words::WordSource,
    PoiseData,
};

const GAME_IN_PROGRESS: &str = "There's already a game in progress.";
const NO_GAME_IN_PROGRESS: &str = "There's no game in progress.";
const ASK_FOR_WORD: &str = "What word do you want to use?";
const NO_PRIVATE_CHAT: &str = "I wasn't able to talk to you in a private chat. \
    Make sure you've opened a private chat with me so you can secretly send me the word to play with.";
const SENT_PRIVATE_MESSAGE: &str =
    "I sent you a private message. Please send me the word to play with over there.";
const EMPTY_WORD: &str = "That message was empty. Please send me the word to play with.";
const GAME_IN_TARGET_CHANNEL: &str = "It looks like there's already a game going on in that channel.";
const NOTHING_TO_GUESS: &str = "Please guess some letters or digits.";

/// The reply for a game's board after a start or a guess.
fn announcement(outcome: &Outcome) -> String {
    match outcome.state {
        State::Continue => outcome.board.clone(),
        State::Win => format!("You win!\n\n{}", outcome.board),
        State::Lose => format!(
            "You lose! The word was `{}`.\n\n{}",
            outcome.word, outcome.board
        ),
    }
}

fn source_help(default: WordSource) -> String {
    let sources = WordSource::ALL
        .iter()
        .map(|source| format!("`{source}`"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Please give one of the following word sources: {sources}. \
         If nothing is given, `{default}` will be used by default."
    )
}

fn guessable(text: &str) -> Vec<char> {
    text.chars()
        .filter(|&ch| LetterUnit::new(ch).is_guessable())
        .collect()
}

/// Users who asked for a custom game, and the channel it should be played in.
#[derive(Debug, Clone, Default)]
pub struct CustomWordRequests(Arc<Mutex<HashMap<UserId, ChannelId>>>);

impl CustomWordRequests {
    /// Records that `user` will send a word for `channel`, replacing any older request.
    pub async fn request(&self, user: UserId, channel: ChannelId) {
        if let Some(previous) = self.0.lock().await.insert(user, channel) {
            debug!(%user, %previous, "replaced pending custom word request");
        }
    }

    pub async fn is_pending(&self, user: UserId) -> bool {
        self.0.lock().await.contains_key(&user)
    }

    pub async fn take(&self, user: UserId) -> Option<ChannelId> {
        self.0.lock().await.remove(&user)
    }
}

/// starts a game of hangman with a random word
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn newgame(
    ctx: Context<'_>,
    #[description = "where the word comes from: wiktionary or urbandictionary"]
    source: Option<String>,
) -> CommandResult {
    ctx.log_command().await;

    let data = ctx.data();
    let channel = ctx.channel_id();

    if data.games().contains(&channel).await {
        ctx.reply_ext(GAME_IN_PROGRESS).await?;
        return Ok(());
    }

    let default = data.config().words.default_source;
    let Ok(source) = WordSource::from_arg(source.as_deref(), default) else {
        ctx.reply_ext(source_help(default)).await?;
        return Ok(());
    };

    let _typing = ctx.defer_or_broadcast().await?;
    let word = data.words().fetch(source).await?;

    match data.games().start(channel, Game::new(word)).await {
        Ok(outcome) => {
            info!(%channel, %source, "new game");
            ctx.reply_ext(announcement(&outcome)).await?;
        }
        Err(AlreadyInProgress(_)) => {
            ctx.reply_ext(GAME_IN_PROGRESS).await?;
        }
    }

    Ok(())
}

/// starts a game of hangman with a word you send in private
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn newcustomgame(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    let data = ctx.data();
    let channel = ctx.channel_id();

    if data.games().contains(&channel).await {
        ctx.reply_ext(GAME_IN_PROGRESS).await?;
        return Ok(());
    }

    let author = ctx.author().id;

    if let Err(err) = author
        .direct_message_ext(ctx.serenity_context(), ASK_FOR_WORD)
        .await
    {
        warn!(%err, %author, "couldn't reach user in private");
        ctx.reply_ext(NO_PRIVATE_CHAT).await?;
        return Ok(());
    }

    data.custom_words().request(author, channel).await;
    ctx.reply_ext(SENT_PRIVATE_MESSAGE).await?;

    Ok(())
}

/// Starts a custom game from a private message, if its author asked for one.
#[instrument(skip_all, fields(author = %msg.author.id))]
pub async fn read_custom_word(
    ctx: &serenity::Context,
    data: &PoiseData,
    msg: &Message,
) -> CommandResult {
    let author = msg.author.id;
    let word = msg.content.trim();

    if word.is_empty() {
        if data.custom_words().is_pending(author).await {
            msg.channel_id.say_ext(ctx, EMPTY_WORD).await?;
        }

        return Ok(());
    }

    let Some(channel) = data.custom_words().take(author).await else {
        return Ok(());
    };

    match data.games().start(channel, Game::new(word)).await {
        Ok(outcome) => {
            info!(%channel, "new custom game");
            channel.say_ext(ctx, announcement(&outcome)).await?;
        }
        Err(AlreadyInProgress(_)) => {
            msg.channel_id.say_ext(ctx, GAME_IN_TARGET_CHANNEL).await?;
        }
    }

    Ok(())
}

/// guesses one or more letters or digits
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn guess(
    ctx: Context<'_>,
    #[rest]
    #[description = "letters or digits to guess, in order"]
    letters: Option<String>,
) -> CommandResult {
    ctx.log_command().await;

    let data = ctx.data();
    let channel = ctx.channel_id();

    if !data.games().contains(&channel).await {
        ctx.reply_ext(NO_GAME_IN_PROGRESS).await?;
        return Ok(());
    }

    let letters = guessable(letters.as_deref().unwrap_or_default());
    if letters.is_empty() {
        ctx.reply_ext(NOTHING_TO_GUESS).await?;
        return Ok(());
    }

    let reply = match data.games().guess(&channel, letters).await {
        Some(outcome) => {
            if outcome.state.is_finished() {
                info!(%channel, state = ?outcome.state, "game over");
            }

            announcement(&outcome)
        }
        None => NO_GAME_IN_PROGRESS.to_owned(),
    };

    ctx.reply_ext(reply).await?;

    Ok(())
}

/// cancels the game in this channel
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn stopgame(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    let reply = match ctx.data().games().stop(&ctx.channel_id()).await {
        Some(game) => format!("Okay, the game is cancelled. The word was `{}`.", game.word()),
        None => NO_GAME_IN_PROGRESS.to_owned(),
    };

    ctx.reply_ext(reply).await?;

    Ok(())
}
