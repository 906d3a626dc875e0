use sea_orm::DbErr;
use thiserror::Error;

/// An error raised while bringing the data layer up or using it
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// The time zone name is unknown, or a time could not be converted
    #[error("Time zone error: {0}")]
    Timezone(String),
    /// Error from the database layer
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl From<jiff::Error> for Error {
    fn from(e: jiff::Error) -> Self {
        Self::Timezone(e.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
