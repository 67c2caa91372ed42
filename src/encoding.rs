//! Board codes: the disc layout packed into one integer.
//!
//! The code is read as base-3 digits, least significant first. Columns are written in order,
//! each as its discs from the bottom up (digit 0 or 1, the disc value) followed by a 2 that closes
//! the column. The ply and the last move are not stored. A full board needs `CODE_DIGITS` digits,
//! which is more than a u64 can hold.

use crate::board::{Board, Disc};
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::{Error, Result};
use num_traits::FromPrimitive;

pub type BoardCode = u128;

const RADIX: BoardCode = 3;
const COLUMN_END: BoardCode = 2;

pub fn encode(board: &Board) -> BoardCode {
    let mut code: BoardCode = 0;
    let mut weight: BoardCode = 1;
    for x in 0..BOARD_WIDTH {
        for disc in board.column(x) {
            code += BoardCode::from(disc.value()) * weight;
            weight *= RADIX;
        }
        code += COLUMN_END * weight;
        weight *= RADIX;
    }
    code
}

pub fn decode(code: BoardCode) -> Result<Board> {
    let invalid = |reason| Error::InvalidEncoding {
        code: code.to_string(),
        reason,
    };

    let mut board = Board::empty();
    let mut column = 0;
    let mut remaining = code;
    while remaining > 0 {
        let digit = remaining % RADIX;
        remaining /= RADIX;

        if column >= BOARD_WIDTH {
            return Err(invalid("digits after the last column"));
        }
        if digit == COLUMN_END {
            column += 1;
            continue;
        }
        if board.get_height(column) >= BOARD_HEIGHT {
            return Err(invalid("column overflows the board height"));
        }
        // digit is 0 or 1 here
        let disc = Disc::from_u64(digit as u64).ok_or_else(|| invalid("unknown disc value"))?;
        board.push_disc(column, disc);
    }

    if board.get_height(column) > 0 {
        return Err(invalid("last column is not terminated"));
    }
    if column < BOARD_WIDTH {
        return Err(invalid("fewer columns than the board has"));
    }
    Ok(board)
}
