//! Unified application error type.
//! Library operations that validate user input return a `Rejection`;
//! everything that reaches the CLI is folded into `AppError`.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// An operation refused by the planner. State is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    // ---------------------------
    // Intake
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    // ---------------------------
    // Checklist
    // ---------------------------
    #[error("Item name cannot be empty")]
    EmptyItemName,

    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("No item with id '{0}'")]
    UnknownItem(String),

    // ---------------------------
    // State machine
    // ---------------------------
    #[error("A packing list is already open; go back to start a new trip")]
    NotInIntake,

    #[error("No packing list yet; submit your trip first")]
    NotReviewing,

    #[error("{0} is not available yet")]
    Unavailable(&'static str),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid trip type: {0}")]
    InvalidTripType(String),

    #[error("Invalid travel style: {0}")]
    InvalidTravelStyle(String),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    #[error("Unknown field: {0}")]
    InvalidField(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error(transparent)]
    Rejected(#[from] Rejection),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
