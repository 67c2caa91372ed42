use crate::board::Disc;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

/// The terminal classification of a board. The discriminants are the numeric status codes
/// reported by the command line tool and the wasm binding.
#[derive(FromPrimitive, ToPrimitive, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    Ongoing = -1,
    Draw = 0,
    Player1Wins = 1,
    Player2Wins = 2,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Ongoing
    }

    pub fn from_winner(disc: Disc) -> Status {
        match disc {
            Disc::White => Status::Player1Wins,
            Disc::Red => Status::Player2Wins,
        }
    }

    pub fn winner(self) -> Option<Disc> {
        match self {
            Status::Player1Wins => Some(Disc::White),
            Status::Player2Wins => Some(Disc::Red),
            Status::Ongoing | Status::Draw => None,
        }
    }

    pub fn code(self) -> i32 {
        // every discriminant fits in an i32
        self.to_i32().unwrap_or_default()
    }

    pub fn from_code(code: i32) -> Option<Status> {
        Status::from_i32(code)
    }

    pub fn to_char(self) -> char {
        match self {
            Status::Ongoing => '?',
            Status::Draw => '=',
            Status::Player1Wins => 'O',
            Status::Player2Wins => 'X',
        }
    }
}
