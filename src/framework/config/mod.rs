mod app;
use std::ops::Deref;

pub use app::{AppConfig as Config, WordsConfig};

mod secrets;
pub use secrets::Secrets;

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("problem loading config file: {0}")]
    App(#[from] app::Error),

    #[error("problem loading secrets: {0}")]
    Secrets(#[from] secrets::Error),
}

#[derive(Debug, Clone)]
pub struct ConfigSetup {
    pub app: Config,
    secrets: Secrets,
}

impl ConfigSetup {
    #[tracing::instrument(skip_all, name = "config")]
    pub fn load(cli: &crate::Cli) -> Result<Self, Error> {
        let app = Config::load(&cli.config)?;
        let secrets = Secrets::load(cli)?;

        Ok(Self { app, secrets })
    }

    pub fn token(&self) -> &str {
        self.secrets.bot_token()
    }

    pub fn finish(self) -> Config {
        self.app
    }
}

/// The configuration `start` would run with, as TOML. The token is never printed.
pub fn effective_toml(cli: &crate::Cli) -> Result<String, Error> {
    let toml = Config::load(&cli.config)?.to_toml()?;
    let token = match Secrets::load(cli) {
        Ok(_) => "<redacted>",
        Err(_) => "<not set>",
    };

    Ok(format!("{toml}\n# token: {token}\n"))
}

impl Deref for ConfigSetup {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.app
    }
}
