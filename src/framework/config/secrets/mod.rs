use std::fmt;

#[derive(Clone)]
pub struct Secrets {
    bot_token: String,
}

impl Secrets {
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    /// The token comes from `--token` or `HANGBOT_TOKEN` (a `.env` file counts).
    #[tracing::instrument(skip_all, name = "secrets")]
    pub fn load(cli: &crate::cli::Cli) -> Result<Self, Error> {
        match cli.token.as_deref().map(str::trim) {
            Some("") => Err(Error::MissingToken("blank")),
            Some(token) => Ok(Self {
                bot_token: token.to_owned(),
            }),
            None => Err(Error::MissingToken("missing")),
        }
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("bot_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("bot token is {0}; pass --token or set HANGBOT_TOKEN")]
    #[event(level = ERROR)]
    MissingToken(&'static str),
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Error, Secrets};
    use crate::Cli;

    fn secrets(args: &[&str]) -> Result<Secrets, Error> {
        let cli = Cli::parse_from(["hangbot"].iter().chain(args));
        Secrets::load(&cli)
    }

    #[test]
    fn token_is_trimmed_and_hidden() {
        let secrets = secrets(&["--token", " abc \n"]).expect("token given");

        assert_eq!(secrets.bot_token(), "abc");
        assert!(!format!("{secrets:?}").contains("abc"));
    }

    #[test]
    fn blank_token_is_refused() {
        assert!(matches!(
            secrets(&["-t", "   "]),
            Err(Error::MissingToken("blank"))
        ));
    }
}
