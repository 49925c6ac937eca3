use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The alphabet must contain exactly 26 letters, found {0}")]
    AlphabetLength(usize),

    #[error("The alphabet must contain only letters from A to Z, found {0:?}")]
    AlphabetCharacter(char),

    #[error("The alphabet must not contain any letter more than once, {0:?} is repeated")]
    AlphabetRepetition(char),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
