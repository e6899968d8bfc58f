use thiserror::Error;

use crate::combat::CombatError;

/// Failures while assembling or running a fight for a request.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error(transparent)]
    Combat(#[from] CombatError),
    #[error("Character source request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Character source rejected id {id}: {message}")]
    Upstream { id: String, message: String },
    #[error("Character id {0:?} is not a number")]
    InvalidId(String),
    #[error("Could not read character ids: {0}")]
    Scrape(String),
    #[error("A fight needs {required} distinct characters, the source lists {available}")]
    NotEnoughCharacters { required: usize, available: usize },
}
