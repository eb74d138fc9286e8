use std::io;

/// Calendar related errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid month: {0}")]
    InvalidMonth(u32),

    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
