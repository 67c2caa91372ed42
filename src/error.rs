use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid column {column} (expected 0..{})", BOARD_WIDTH)]
    InvalidColumn { column: u32 },

    #[error("column {column} is full ({} discs)", BOARD_HEIGHT)]
    ColumnFull { column: u32 },

    #[error("invalid board code {code}: {reason}")]
    InvalidEncoding { code: String, reason: &'static str },

    #[error("'{character}' is not a column number")]
    InvalidColumnCharacter { character: char },

    #[error("invalid variation '{variation}' at move {index}: {source}")]
    InvalidVariation {
        variation: String,
        index: usize,
        #[source]
        source: Box<Error>,
    },
}
