// Domain layer - Core game rules
pub mod domain;

// Application layer - Coordination and animation
pub mod application;

// Infrastructure layer - UI, rendering, input, audio
pub mod ui;
pub mod rendering;
pub mod input;
pub mod audio;

// Re-exports for convenience
pub use domain::{BOARD_SIZE, Board, Cell, GameState, MoveError, MoveOutcome, Player, Status, WinningLine};
pub use application::{GameController, GamePiece};
pub use ui::Button;
