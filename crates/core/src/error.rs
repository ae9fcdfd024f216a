use crate::types::DbId;

/// Broad failure class, used by callers that only care about who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The submitted movie record is unusable as-is.
    Validation,
    /// The write would break a uniqueness rule.
    Conflict,
    /// The addressed movie does not exist.
    NotFound,
    /// Anything the catalog did not anticipate.
    Internal,
}

/// Stable error codes exposed on the wire, one per failure condition.
///
/// The code string, HTTP status and [`ErrorKind`] of each entry are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MissingTitle,
    MissingStar,
    MissingReleaseDate,
    DuplicateMovie,
    MovieNotFound,
    DuplicateStar,
    UnknownError,
    InvalidDate,
    MalformedRequest,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingTitle => "MOV001",
            ErrorCode::MissingStar => "MOV002",
            ErrorCode::MissingReleaseDate => "MOV003",
            ErrorCode::DuplicateMovie => "MOV004",
            ErrorCode::MovieNotFound => "MOV005",
            ErrorCode::DuplicateStar => "MOV006",
            ErrorCode::UnknownError => "MOV007",
            ErrorCode::InvalidDate => "MOV008",
            ErrorCode::MalformedRequest => "MOV009",
        }
    }

    /// HTTP status number the transport should answer with.
    pub const fn http_status(self) -> u16 {
        match self.kind() {
            ErrorKind::Validation => 400,
            ErrorKind::Conflict => 409,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }

    pub const fn kind(self) -> ErrorKind {
        match self {
            ErrorCode::MissingTitle
            | ErrorCode::MissingStar
            | ErrorCode::MissingReleaseDate
            | ErrorCode::DuplicateStar
            | ErrorCode::InvalidDate
            | ErrorCode::MalformedRequest => ErrorKind::Validation,
            ErrorCode::DuplicateMovie => ErrorKind::Conflict,
            ErrorCode::MovieNotFound => ErrorKind::NotFound,
            ErrorCode::UnknownError => ErrorKind::Internal,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Title is required, it cannot be empty")]
    MissingTitle,

    #[error("At least one star is required")]
    MissingStar,

    #[error("Release date is required")]
    MissingReleaseDate,

    #[error("Release date '{0}' must use the YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("Movie with title:'{title}' and release_date:'{release_date}' already exists")]
    DuplicateMovie { title: String, release_date: String },

    #[error("Movie with id {0} not found")]
    MovieNotFound(DbId),

    #[error("Star list contains duplicate stars")]
    DuplicateStar,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::MissingTitle => ErrorCode::MissingTitle,
            CoreError::MissingStar => ErrorCode::MissingStar,
            CoreError::MissingReleaseDate => ErrorCode::MissingReleaseDate,
            CoreError::InvalidDate(_) => ErrorCode::InvalidDate,
            CoreError::DuplicateMovie { .. } => ErrorCode::DuplicateMovie,
            CoreError::MovieNotFound(_) => ErrorCode::MovieNotFound,
            CoreError::DuplicateStar => ErrorCode::DuplicateStar,
            CoreError::Internal(_) => ErrorCode::UnknownError,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.code().kind()
    }

    /// Message safe to show to clients. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            CoreError::Internal(_) => "An unknown error occurred".to_string(),
            other => other.to_string(),
        }
    }
}
