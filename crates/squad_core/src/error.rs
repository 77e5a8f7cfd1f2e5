use thiserror::Error;

/// Rejections raised by roster validation before a split is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Player at index {index} has an empty id")]
    EmptyId { index: usize },

    #[error("Invalid name for player {id}: {reason}")]
    InvalidName { id: String, reason: String },

    #[error("Invalid rating for player {id}: {rating}. Must be between 1 and 100")]
    InvalidRating { id: String, rating: u8 },

    #[error("Invalid attribute {attribute} for player {id}: {value}. Must be between 0 and 100")]
    InvalidAttribute { id: String, attribute: String, value: u8 },

    #[error("Duplicate player id: {id}")]
    DuplicateId { id: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid JSON request: {0}")]
    InvalidJson(String),

    #[error("Unsupported schema version: {found} (expected {expected})")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Player {id} has no rating and no attributes to derive one from")]
    MissingRating { id: String },

    #[error("Roster rejected: {0}")]
    Roster(#[from] RosterError),

    #[error("Config rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "INVALID_JSON",
            ApiError::UnsupportedSchema { .. } => "UNSUPPORTED_SCHEMA",
            ApiError::MissingRating { .. } => "MISSING_RATING",
            ApiError::Roster(_) => "INVALID_ROSTER",
            ApiError::Config(_) => "INVALID_CONFIG",
            ApiError::Serialization(_) => "SERIALIZATION",
        }
    }

    /// Client-side mistakes, as opposed to failures producing the response.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ApiError::Serialization(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ApiError::InvalidJson(err.to_string())
        } else {
            ApiError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
