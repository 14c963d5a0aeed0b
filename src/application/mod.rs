mod controller;
mod piece;

pub use controller::GameController;
pub use piece::GamePiece;
