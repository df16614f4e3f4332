use crate::{
    date_time::FormatError,
    dto::output::Envelope,
    repository,
    service::{IdentityError, StorageError},
};
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jwt_auth::error::IssueError;
use strum::AsRefStr;

///
/// Category of the error visible to the caller.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    PayloadTooLarge,
    ServerError,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("validation error: {0}")]
    Validation(#[from] FormatError),

    #[error("unauthenticated: {0}")]
    Unauthenticated(&'static str),

    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("ticket not exist")]
    TicketNotExist,

    #[error("schedule not exist")]
    ScheduleNotExist,

    #[error("user not exist")]
    UserNotExist,

    #[error("user already registered")]
    UserAlreadyRegistered,

    #[error("session token error: {0}")]
    SessionToken(#[from] IssueError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    #[error("unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRequest(_) | Error::Validation(_) => ErrorKind::BadRequest,
            Error::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            Error::Unauthenticated(_) => ErrorKind::Unauthorized,
            Error::Identity(err) => match err {
                IdentityError::Malformed(_) | IdentityError::MissingSubject => {
                    ErrorKind::Unauthorized
                }
                IdentityError::UpstreamStatus(_)
                | IdentityError::Parse(_)
                | IdentityError::MissingField => ErrorKind::BadRequest,
                IdentityError::UpstreamUnreachable(_) => ErrorKind::ServerError,
            },
            Error::TicketNotExist | Error::ScheduleNotExist | Error::UserNotExist => {
                ErrorKind::NotFound
            }
            Error::UserAlreadyRegistered => ErrorKind::Conflict,
            Error::SessionToken(_)
            | Error::Storage(_)
            | Error::Database(_)
            | Error::Unexpected(_) => ErrorKind::ServerError,
        }
    }

    ///
    /// Message sent to the caller.
    /// Details of server side failures are only logged.
    ///
    pub fn message(&self) -> String {
        match self {
            Error::InvalidRequest(message) => message.clone(),
            Error::PayloadTooLarge => "request body too large".to_string(),
            Error::Validation(err) => err.to_string(),
            Error::Unauthenticated(_) => "authentication required".to_string(),
            Error::Identity(err) => match err {
                IdentityError::Malformed(_) | IdentityError::MissingSubject => {
                    "identity token is not valid".to_string()
                }
                IdentityError::UpstreamStatus(_) => {
                    "identity provider rejected access token".to_string()
                }
                IdentityError::Parse(_) | IdentityError::MissingField => {
                    "identity provider returned incomplete profile".to_string()
                }
                IdentityError::UpstreamUnreachable(_) => "internal server error".to_string(),
            },
            Error::TicketNotExist => "ticket not found".to_string(),
            Error::ScheduleNotExist => "schedule not found".to_string(),
            Error::UserNotExist => "user not registered".to_string(),
            Error::UserAlreadyRegistered => "user already registered".to_string(),
            Error::SessionToken(_)
            | Error::Storage(_)
            | Error::Database(_)
            | Error::Unexpected(_) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let kind = self.kind();
        tracing::warn!(err = %self, kind = kind.as_ref());

        Envelope::empty(kind.status_code(), self.message()).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge,
            _ => Error::InvalidRequest(rejection.body_text()),
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}
