#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("couldn't build http client: {0}")]
    #[event(level = ERROR)]
    Http(#[from] reqwest::Error),
}
