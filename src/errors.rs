use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeckQuizError>;

#[derive(Debug, Error)]
pub enum DeckQuizError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {url}: server answered {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Unexpected page format: {0}")]
    SourceFormat(String),

    #[error("Invalid deck {code}: deck has {total} cards, expected {expected}")]
    InvalidDeck {
        code: String,
        total: u64,
        expected: u32,
    },

    #[error("Failed to process image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unable to load font {path}: {reason}")]
    Font { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Request was cancelled")]
    Cancelled,
}

impl DeckQuizError {
    pub fn source_format(message: impl Into<String>) -> Self {
        DeckQuizError::SourceFormat(message.into())
    }

    /// Status a web front end should answer with for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            DeckQuizError::SourceFormat(_) | DeckQuizError::InvalidDeck { .. } => 400,
            DeckQuizError::Fetch { .. } | DeckQuizError::FetchStatus { .. } => 502,
            DeckQuizError::Cancelled => 499,
            _ => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
