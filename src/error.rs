use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("a quote for mortgage {0} already exists")]
    DuplicateKey(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{service} request failed: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    #[error("mortgage {0} already has an insurance quote")]
    AlreadyQuoted(String),

    #[error("quote worker is not running")]
    QueueClosed,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QuoteError {
    pub fn upstream(service: &'static str, message: impl ToString) -> Self {
        Self::Upstream {
            service,
            message: message.to_string(),
        }
    }
}
