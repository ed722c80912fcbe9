use thiserror::Error;

/// Every failure the quiz core can report. None of them is fatal: the view
/// layer turns them into a message and lets the user re-trigger the action.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("network error: {0}")]
    Network(String),
    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl QuizError {
    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            QuizError::Validation(e) => e.user_message().to_owned(),
            QuizError::Upstream(e) => e.user_message().to_owned(),
            QuizError::Network(_) => {
                "Network error while fetching data. Please check your connection.".to_owned()
            }
            QuizError::Precondition(e) => e.to_string(),
            QuizError::Storage(_) => "Could not save your quiz history.".to_owned(),
            QuizError::Config(msg) => format!("Configuration error: {msg}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid topic")]
    InvalidTopic,
    #[error("invalid difficulty")]
    InvalidDifficulty,
    #[error("invalid question count")]
    InvalidCount,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::InvalidTopic => "Please select a valid topic category.",
            ValidationError::InvalidDifficulty => "Please select a valid difficulty level.",
            ValidationError::InvalidCount => "Please select a valid number of questions.",
        }
    }
}

/// Open Trivia DB `response_code` values other than success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(i64),
}

impl ResponseCode {
    /// `None` for `0` (success).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => None,
            1 => Some(ResponseCode::NoResults),
            2 => Some(ResponseCode::InvalidParameter),
            3 => Some(ResponseCode::TokenNotFound),
            4 => Some(ResponseCode::TokenEmpty),
            5 => Some(ResponseCode::RateLimit),
            other => Some(ResponseCode::Unknown(other)),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ResponseCode::NoResults => 1,
            ResponseCode::InvalidParameter => 2,
            ResponseCode::TokenNotFound => 3,
            ResponseCode::TokenEmpty => 4,
            ResponseCode::RateLimit => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    /// Fine-grained description, kept for the logs.
    pub fn describe(&self) -> &'static str {
        match self {
            ResponseCode::NoResults => "No questions found. Try different settings.",
            ResponseCode::InvalidParameter => "Invalid request parameters.",
            ResponseCode::TokenNotFound => "Could not return a token.",
            ResponseCode::TokenEmpty => "Token has returned all possible questions.",
            ResponseCode::RateLimit => "Too many requests. Please wait a moment.",
            ResponseCode::Unknown(_) => "Unknown response code.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("empty response from the trivia API")]
    NullResponse,
    #[error("trivia API returned response code {}: {}", .0.code(), .0.describe())]
    ResponseCode(ResponseCode),
    #[error("trivia API returned no questions")]
    EmptyResults,
    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl UpstreamError {
    pub fn user_message(&self) -> &'static str {
        match self {
            UpstreamError::NullResponse | UpstreamError::Malformed(_) => {
                "Invalid response from server."
            }
            UpstreamError::ResponseCode(_) => {
                "No questions found for this selection. Please try different settings."
            }
            UpstreamError::EmptyResults => "No questions available. Please try again later.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    #[error("select an answer before continuing")]
    NoSelection,
    #[error("the quiz is not accepting answers")]
    NotAnswering,
    #[error("\"{0}\" is not an option for this question")]
    UnknownOption(String),
    #[error("the quiz has not finished yet")]
    NotFinished,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode history: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("browser storage unavailable: {0}")]
    Unavailable(String),
}
