pub mod benchmark;
pub mod board;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod status;

pub use board::{Board, Disc, LastMove};
pub use encoding::BoardCode;
pub use error::{Error, Result};
pub use status::Status;
