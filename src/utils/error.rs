use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoresError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown league: {code}")]
    UnknownLeague { code: String },

    #[error("Malformed record: {reason}")]
    MalformedRecord { reason: String },

    #[error("Upstream returned status {status}")]
    UpstreamUnavailable { status: u16 },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },
}

impl ScoresError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }

    /// 給使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) | Self::UpstreamUnavailable { .. } => {
                ":disappointed: The scores service is unavailable right now".to_string()
            }
            Self::UnknownLeague { code } => format!("Unknown league `{}`.", code),
            Self::InvalidCommand { message } => message.clone(),
            Self::MissingConfigError { field } if field == "api.token" => {
                "No API Token detected. Please visit http://api.football-data.org/ and get an \
                 API Token, which will be used to get access to the data"
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoresError>;
