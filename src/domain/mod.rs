mod board;
mod cell;
mod game;

pub use board::{BOARD_SIZE, Board, WinningLine};
pub use cell::{Cell, Player};
pub use game::{GameState, MoveError, MoveOutcome, Status};
