#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("error from reqwest: {0}")]
    #[event(level = WARN)]
    Reqwest(#[from] reqwest::Error),

    #[error("malformed json: {0}")]
    #[event(level = ERROR)]
    Json(#[from] serde_json::Error),

    #[error("no heading found on {0}")]
    #[event(level = ERROR)]
    MissingHeading(String),

    #[error("no entries in response from {0}")]
    #[event(level = WARN)]
    EmptyList(String),

    #[error("blank word from {0}")]
    #[event(level = WARN)]
    BlankWord(String),
}

impl Error {
    /// Connection trouble and server errors are worth retrying, nothing else is.
    pub fn backoff(self) -> backoff::Error<Self> {
        let transient = match &self {
            Self::Reqwest(err) => !err
                .status()
                .is_some_and(|status| status.is_client_error()),
            Self::EmptyList(_) => true,
            _ => false,
        };

        if transient {
            backoff::Error::transient(self)
        } else {
            backoff::Error::permanent(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn parse_errors_are_permanent() {
        let err = Error::MissingHeading("https://example.com".to_owned()).backoff();
        assert!(matches!(err, backoff::Error::Permanent(_)));

        let err = Error::BlankWord("https://example.com".to_owned()).backoff();
        assert!(matches!(err, backoff::Error::Permanent(_)));
    }

    #[test]
    fn empty_list_is_retried() {
        let err = Error::EmptyList("https://example.com".to_owned()).backoff();
        assert!(matches!(err, backoff::Error::Transient { .. }));
    }
}
