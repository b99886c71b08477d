use std::path::PathBuf;

#[derive(clap::Parser, Debug, Clone)]
#[command(version, about = "a hangman bot for discord")]
pub struct Cli {
    /// TOML config file; a missing file means defaults plus environment
    #[arg(long, env = "HANGBOT_CONFIG", default_value = "hangbot.toml")]
    pub config: PathBuf,

    /// discord bot token
    #[arg(short, long, env = "HANGBOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn subcommand(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(clap::Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// print the effective configuration and exit
    Config,

    /// run the bot
    #[default]
    Start,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::{Cli, Command};

    #[test]
    fn starts_by_default() {
        let cli = Cli::parse_from(["hangbot", "--token", "abc"]);

        assert_eq!(cli.subcommand(), Command::Start);
        assert_eq!(cli.token.as_deref(), Some("abc"));
    }

    #[test]
    fn reads_subcommand_and_config_path() {
        let cli = Cli::parse_from(["hangbot", "--config", "other.toml", "config"]);

        assert_eq!(cli.subcommand(), Command::Config);
        assert_eq!(cli.config.to_str(), Some("other.toml"));
    }

    #[test]
    fn command_line_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
