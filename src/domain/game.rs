use super::{BOARD_SIZE, Board, Player, WinningLine};
use thiserror::Error;

/// Ways a move can be rejected. All variants are recoverable; the
/// controller treats each one as a silent no-op.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum MoveError {
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("game is already over")]
    GameAlreadyOver,
    #[error("cell coordinates are out of bounds")]
    OutOfBounds,
}

/// Where the game stands after the latest move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    InProgress,
    Won { player: Player, line: WinningLine },
    Tied,
}

/// Result of a successful move: who placed the symbol and the status
/// the move produced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub placed: Player,
    pub status: Status,
}

/// GameState holds the board and the turn/termination state.
/// Mutated only through `apply_move` and `reset`; pure and deterministic.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: Status,
}

impl GameState {
    /// Create a fresh game: empty board, X to move
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: Status::InProgress,
        }
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the game has reached a terminal state
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, Status::InProgress)
    }

    /// Place the current player's symbol at (row, col).
    ///
    /// On success the cell is written, termination is evaluated, and the
    /// turn passes to the opponent only if the game continues. On any
    /// error the state is left untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds);
        }
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.board.get(row, col).is_some_and(|cell| cell.is_empty()) {
            return Err(MoveError::CellOccupied);
        }

        let placed = self.current_player;
        self.board.set(row, col, placed.cell());
        self.status = self.evaluate_termination();
        if !self.is_over() {
            self.current_player = placed.opponent();
        }

        Ok(MoveOutcome {
            placed,
            status: self.status,
        })
    }

    /// Check all eight triples, then the tie condition
    fn evaluate_termination(&self) -> Status {
        if let Some((player, line)) = self.board.winner() {
            Status::Won { player, line }
        } else if self.board.is_full() {
            Status::Tied
        } else {
            Status::InProgress
        }
    }

    /// Reinitialize to the starting state. Valid from any state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
