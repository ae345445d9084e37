//! Base request reading: turns text commands into catalogue entries.

pub mod parse;
pub mod reader;

pub use parse::CommandDescription;
pub use reader::{read_base_requests, read_request_count, InputReader};

use crate::models::types::CatalogueError;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid distance: {0}")]
    InvalidDistance(String),

    #[error("Invalid request count: {0:?}")]
    InvalidRequestCount(String),

    #[error("Input ended after {read} of {expected} requests")]
    UnexpectedEof { read: usize, expected: usize },

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;
