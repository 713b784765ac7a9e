use thiserror::Error;

use crate::config::ConfigError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type LexResult<T> = Result<T, Error>;
