use poise::PrefixFrameworkOptions;
use tracing::{info, trace};
use tracing_unwrap::ResultExt;

use crate::{
    commands,
    errors::{self, CommandError},
    utils::serenity::channel::ChannelIdExt,
};

use super::{data::PoiseData, event_handler};

pub fn build(data: PoiseData) -> poise::Framework<PoiseData, CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(data.config.bot.prefix().to_string()),
                ..Default::default()
            },
            on_error: errors::handle_framework_error,
            event_handler: event_handler::poise,
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                let http = ctx.http.clone();

                let commands = framework.options().commands.as_ref();

                if let Some(guild_id) = data.config.bot.testing_server() {
                    poise::builtins::register_in_guild(&http, commands, guild_id)
                        .await
                        .expect_or_log("registering commands in guild should not fail");
                } else {
                    poise::builtins::register_globally(&http, commands)
                        .await
                        .expect_or_log("registering commands globally should not fail");
                }

                ctx.set_activity(data.config.bot.activity());

                info!(user = %ready.user.name, guilds = ready.guilds.len(), "connected");
                trace!("finished setup, accepting commands");

                if let Some(status_channel) = data.config.bot.status_channel() {
                    status_channel.say_ext(&http, "ready!").await?;
                }

                Ok(data)
            })
        })
        .build()
}
