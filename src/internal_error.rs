use log::{error, warn};
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use thiserror::Error;

use std::sync::PoisonError;

#[derive(Debug, Error)]
pub enum InternalError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] rocket::figment::Error),
    #[error("Connection lock poisoned: {0}")]
    Poisoned(String),
    /// Input rejected before anything is persisted. The message is shown to the user as is.
    #[error("{0}")]
    Validation(String),
}

impl<T> From<PoisonError<T>> for InternalError {
    fn from(e: PoisonError<T>) -> InternalError {
        InternalError::Poisoned(e.to_string())
    }
}

impl From<&str> for InternalError {
    fn from(s: &str) -> InternalError {
        InternalError::Validation(s.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for InternalError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'o> {
        match self {
            InternalError::Validation(message) => {
                warn!("Rejected {}: {}", request.uri(), message);
                (Status::BadRequest, message).respond_to(request)
            }
            e => {
                error!("{} failed: {}", request.uri(), e);
                Err(Status::InternalServerError)
            }
        }
    }
}

pub type InternalResult<T> = Result<T, InternalError>;
