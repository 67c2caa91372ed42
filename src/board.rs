use std::fmt;
use std::fmt::Formatter;

use crate::constants::{BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};
use crate::encoding::{self, BoardCode};
use crate::error::{Error, Result};
use crate::status::Status;
use num_derive::FromPrimitive;

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// How many discs in a line win the game
const RUN_LENGTH: i32 = 4;

/// Line directions as (dx, dy), in scan order: horizontal, vertical, descending diagonal and
/// ascending diagonal. "Descending" walks up-right from the start cell, "ascending" down-right.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A placed disc. The discriminant is the disc value used in the board code.
#[derive(FromPrimitive, Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Disc {
    /// Player 1, moves first
    White = 0,
    /// Player 2
    Red = 1,
}

impl Disc {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn to_char(self) -> char {
        match self {
            Disc::White => 'O',
            Disc::Red => 'X',
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct LastMove {
    pub disc: Disc,
    pub column: u32,
}

/// The full state of a game: the discs in every column, the ply and the most recent move.
///
/// Columns live in a fixed-size array so the whole board is `Copy`. A copy never shares storage
/// with the original, which keeps `children` down to one stack copy per legal move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    /// cells[x][y] with y = 0 at the bottom. Only the first heights[x] entries are meaningful.
    cells: [[Disc; HEIGHT]; WIDTH],
    heights: [u8; WIDTH],
    ply: u32,
    last_move: Option<LastMove>,
}

impl Board {
    pub fn empty() -> Board {
        Board {
            cells: [[Disc::White; HEIGHT]; WIDTH],
            heights: [0; WIDTH],
            ply: 0,
            last_move: None,
        }
    }

    /// An independent copy of another board, including its ply and last move.
    pub fn copy_of(other: &Board) -> Board {
        *other
    }

    /// Rebuilds the disc layout stored in a board code. The ply is the number of discs and the
    /// last move is unknown.
    pub fn from_code(code: BoardCode) -> Result<Board> {
        encoding::decode(code)
    }

    /// Parses a decimal board code. Anything other than a non-negative integer is rejected.
    pub fn from_code_string(code: &str) -> Result<Board> {
        let code = code.trim();
        let value = code.parse::<BoardCode>().map_err(|_| Error::InvalidEncoding {
            code: code.to_string(),
            reason: "not a non-negative integer",
        })?;
        Board::from_code(value)
    }

    /// Plays a variation such as "4453", where every character is a 1-based column number.
    pub fn from_variation(variation: &str) -> Result<Board> {
        let mut board = Board::empty();
        for (index, ch) in variation.trim().chars().enumerate() {
            let result = match ch.to_digit(10) {
                Some(digit) if digit > 0 => board.play(digit - 1),
                _ => Err(Error::InvalidColumnCharacter { character: ch }),
            };
            result.map_err(|source| Error::InvalidVariation {
                variation: variation.trim().to_string(),
                index,
                source: Box::new(source),
            })?;
        }
        Ok(board)
    }

    /// Drops the disc of the player to move into a column. On error the board is unchanged.
    pub fn play(&mut self, column: u32) -> Result<()> {
        if column >= BOARD_WIDTH {
            return Err(Error::InvalidColumn { column });
        }
        if !self.can_play(column) {
            return Err(Error::ColumnFull { column });
        }

        let disc = self.current_disc();
        self.push_disc(column, disc);
        self.last_move = Some(LastMove { disc, column });
        Ok(())
    }

    /// Returns the board after a move without touching this one.
    pub fn after_move(&self, column: u32) -> Result<Board> {
        let mut board = *self;
        board.play(column)?;
        Ok(board)
    }

    /// Every legal move paired with the board it leads to, in ascending column order.
    pub fn children(&self) -> Vec<(u32, Board)> {
        let mut children = Vec::with_capacity(WIDTH);
        for column in 0..BOARD_WIDTH {
            if self.can_play(column) {
                let mut child = *self;
                let disc = child.current_disc();
                child.push_disc(column, disc);
                child.last_move = Some(LastMove { disc, column });
                children.push((column, child));
            }
        }
        children
    }

    pub fn legal_moves(&self) -> Vec<u32> {
        (0..BOARD_WIDTH).filter(|&column| self.can_play(column)).collect()
    }

    /// Appends a disc without touching the last move. Callers check that the column has room.
    pub(crate) fn push_disc(&mut self, column: u32, disc: Disc) {
        let x = column as usize;
        let y = self.heights[x] as usize;
        debug_assert!(y < HEIGHT, "Column {} is full", column);
        self.cells[x][y] = disc;
        self.heights[x] += 1;
        self.ply += 1;
    }

    /// The number of discs on the board
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// The disc of the player to move, derived from the parity of the ply
    pub fn current_disc(&self) -> Disc {
        if self.ply % 2 == 0 {
            Disc::White
        } else {
            Disc::Red
        }
    }

    /// The discs of a column from bottom to top. Out of range columns are empty.
    pub fn column(&self, column: u32) -> &[Disc] {
        if column >= BOARD_WIDTH {
            return &[];
        }
        let x = column as usize;
        &self.cells[x][..self.heights[x] as usize]
    }

    pub fn get_height(&self, column: u32) -> u32 {
        self.column(column).len() as u32
    }

    pub fn can_play(&self, column: u32) -> bool {
        column < BOARD_WIDTH && self.get_height(column) < BOARD_HEIGHT
    }

    /// The disc at column x and row y (0 is the bottom row), or None for an empty or off-board
    /// cell.
    pub fn get_disc_at(&self, x: u32, y: u32) -> Option<Disc> {
        self.column(x).get(y as usize).copied()
    }

    fn disc_at_offset(&self, x: i32, y: i32) -> Option<Disc> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get_disc_at(x as u32, y as u32)
    }

    pub fn is_full(&self) -> bool {
        self.ply == BOARD_CELLS
    }

    /// Scans the board column by column, bottom to top, and reports the first line of four found.
    pub fn status(&self) -> Status {
        for x in 0..BOARD_WIDTH {
            for (y, &disc) in self.column(x).iter().enumerate() {
                for &(dx, dy) in DIRECTIONS.iter() {
                    if self.has_line(x as i32, y as i32, dx, dy, disc) {
                        return Status::from_winner(disc);
                    }
                }
            }
        }

        if self.is_full() {
            Status::Draw
        } else {
            Status::Ongoing
        }
    }

    fn has_line(&self, x: i32, y: i32, dx: i32, dy: i32, disc: Disc) -> bool {
        (1..RUN_LENGTH).all(|step| self.disc_at_offset(x + dx * step, y + dy * step) == Some(disc))
    }

    pub fn to_code(&self) -> BoardCode {
        encoding::encode(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

fn write_separator(f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "+")?;
    for _ in 0..BOARD_WIDTH {
        write!(f, "---+")?;
    }
    writeln!(f)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_separator(f)?;
        for y in (0..BOARD_HEIGHT).rev() {
            write!(f, "|")?;
            for x in 0..BOARD_WIDTH {
                match self.get_disc_at(x, y) {
                    Some(disc) => write!(f, " {} |", disc.to_char())?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            write_separator(f)?;
        }
        Ok(())
    }
}
