use super::GamePiece;
use crate::audio::{Cue, SoundBank};
use crate::domain::{GameState, Status};
use crate::ui;

/// GameController wires pointer input to the game rules and owns the
/// animated pieces. The game state, the piece list, and the sound bank
/// are all mutated from the single input call within a frame.
pub struct GameController {
    game: GameState,
    pieces: Vec<GamePiece>,
    sounds: SoundBank,
}

impl GameController {
    pub fn new(sounds: SoundBank) -> Self {
        Self {
            game: GameState::new(),
            pieces: Vec::new(),
            sounds,
        }
    }

    pub const fn game(&self) -> &GameState {
        &self.game
    }

    pub fn pieces(&self) -> &[GamePiece] {
        &self.pieces
    }

    /// Dispatch a pointer press at screen coordinates.
    ///
    /// The restart button works in every state. Board clicks only count
    /// while the game is in progress; clicks that miss the board, hit an
    /// occupied cell, or arrive after the game ended change nothing.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) {
        if ui::restart_contains(x, y) {
            self.restart();
            return;
        }
        if self.game.is_over() {
            return;
        }
        let Some((row, col)) = ui::cell_at(x, y) else {
            return;
        };
        let Ok(outcome) = self.game.apply_move(row, col) else {
            return;
        };

        self.pieces.push(GamePiece::new(outcome.placed, row, col));
        self.sounds.play(Cue::Move);
        match outcome.status {
            Status::Won { .. } => self.sounds.play(Cue::Win),
            Status::Tied => self.sounds.play(Cue::Tie),
            Status::InProgress => {}
        }
    }

    /// Advance every live piece by one animation step
    pub fn update(&mut self) {
        for piece in &mut self.pieces {
            piece.update();
        }
    }

    /// Fresh game: empty board, X to move, no pieces on screen
    pub fn restart(&mut self) {
        self.game.reset();
        self.pieces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Player, WinningLine};
    use crate::ui::{RESTART_X, RESTART_Y, cell_center};

    fn controller() -> GameController {
        GameController::new(SoundBank::silent())
    }

    fn click_cell(controller: &mut GameController, row: usize, col: usize) {
        let (x, y) = cell_center(row, col);
        controller.handle_pointer_down(x, y);
    }

    #[test]
    fn test_click_places_piece_and_flips_turn() {
        let mut controller = controller();
        click_cell(&mut controller, 1, 1);

        assert_eq!(controller.game().board().get(1, 1), Some(Cell::X));
        assert_eq!(controller.game().current_player(), Player::O);
        assert_eq!(controller.pieces().len(), 1);
        assert_eq!(controller.pieces()[0].symbol(), Player::X);
        assert_eq!(controller.pieces()[0].cell(), (1, 1));
    }

    #[test]
    fn test_click_on_occupied_cell_is_ignored() {
        let mut controller = controller();
        click_cell(&mut controller, 0, 0);
        click_cell(&mut controller, 0, 0);

        assert_eq!(controller.game().board().get(0, 0), Some(Cell::X));
        assert_eq!(controller.game().current_player(), Player::O);
        assert_eq!(controller.pieces().len(), 1);
    }

    #[test]
    fn test_click_off_board_is_ignored() {
        let mut controller = controller();
        controller.handle_pointer_down(5.0, 5.0);
        controller.handle_pointer_down(0.0, ui::SCREEN_HEIGHT - 1.0);

        assert_eq!(controller.game(), &GameState::new());
        assert!(controller.pieces().is_empty());
    }

    #[test]
    fn test_win_flow_then_board_clicks_do_nothing() {
        let mut controller = controller();
        // X takes row 0, O fills row 1
        for &(row, col) in &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            click_cell(&mut controller, row, col);
        }

        assert_eq!(
            controller.game().status(),
            Status::Won {
                player: Player::X,
                line: WinningLine::Row(0),
            }
        );
        assert_eq!(controller.pieces().len(), 5);

        click_cell(&mut controller, 2, 2);
        assert_eq!(controller.game().board().get(2, 2), Some(Cell::Empty));
        assert_eq!(controller.pieces().len(), 5);
    }

    #[test]
    fn test_restart_mid_game() {
        let mut controller = controller();
        click_cell(&mut controller, 0, 0);
        click_cell(&mut controller, 1, 1);

        controller.handle_pointer_down(RESTART_X + 1.0, RESTART_Y + 1.0);

        assert_eq!(controller.game(), &GameState::new());
        assert!(controller.pieces().is_empty());
    }

    #[test]
    fn test_restart_after_win() {
        let mut controller = controller();
        for &(row, col) in &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            click_cell(&mut controller, row, col);
        }
        assert!(controller.game().is_over());

        controller.handle_pointer_down(RESTART_X + 10.0, RESTART_Y + 10.0);
        assert_eq!(controller.game().status(), Status::InProgress);
        assert_eq!(controller.game().current_player(), Player::X);
        assert!(controller.pieces().is_empty());

        // Play continues normally on the fresh board
        click_cell(&mut controller, 2, 2);
        assert_eq!(controller.game().board().get(2, 2), Some(Cell::X));
    }

    #[test]
    fn test_update_advances_all_pieces() {
        let mut controller = controller();
        click_cell(&mut controller, 0, 0);
        click_cell(&mut controller, 2, 2);

        for _ in 0..200 {
            controller.update();
        }
        for piece in controller.pieces() {
            assert!(!piece.is_moving());
            assert_eq!(piece.scale(), 1.0);
            let (row, col) = piece.cell();
            assert_eq!(piece.position(), cell_center(row, col));
        }
    }
}
