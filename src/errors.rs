use crate::quiz::models::QuizPhase;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizError {
    #[error("`{operation}` is not allowed while the game is {phase}")]
    InvalidStateTransition {
        operation: &'static str,
        phase: QuizPhase,
    },
    #[error("coordinate ({lat}, {lng}) is out of range")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("the site catalog is empty")]
    EmptyCatalog,
    #[error("site #{index} is not in the catalog")]
    UnknownSite { index: usize },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read the catalog file `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse the catalog (line {line})")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog record #{index} is invalid")]
    InvalidRecord {
        index: usize,
        #[source]
        source: QuizError,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("maximum distance must be a positive number of kilometers, got {0}")]
    MaxDistance(f64),
    #[error("a game must have between 1 and {max} quizzes, got {got}")]
    QuizzesPerGame { got: u64, max: u64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for the list of commands")]
    Unknown(String),
    #[error("`{0}` expects a latitude and a longitude")]
    MissingCoordinates(&'static str),
    #[error("`{0}` is not a number")]
    BadNumber(String),
    #[error("`{0}` takes no arguments")]
    UnexpectedArguments(&'static str),
    #[error(transparent)]
    Coordinate(#[from] QuizError),
}
