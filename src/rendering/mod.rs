use macroquad::prelude::*;

use crate::application::{GameController, GamePiece};
use crate::domain::{BOARD_SIZE, GameState, Player, Status, WinningLine};
use crate::ui::{BOARD_PIXELS, Button, CELL_SIZE, GRID_OFFSET_X, GRID_OFFSET_Y, SCREEN_HEIGHT, SCREEN_WIDTH};

const GRID_LINE_WIDTH: f32 = 3.0;
const PIECE_HALF_SIZE: f32 = 40.0;
const PIECE_STROKE: f32 = 8.0;
const WIN_LINE_WIDTH: f32 = 5.0;
const WIN_LINE_INSET: f32 = 10.0;
const STATUS_FONT_SIZE: u16 = 36;

const X_COLOR: Color = RED;
const O_COLOR: Color = BLUE;
const WIN_COLOR: Color = GREEN;

/// Draw one full frame: board, pieces, win highlight, status line, button
pub fn draw_scene(controller: &GameController, restart_button: &Button, mouse_pos: (f32, f32)) {
    clear_background(WHITE);
    draw_board();
    draw_pieces(controller.pieces());
    if let Status::Won { line, .. } = controller.game().status() {
        draw_winning_line(line);
    }
    draw_status(controller.game());
    restart_button.draw(mouse_pos);
}

/// Draw the grid lines and the outer border
fn draw_board() {
    for i in 1..BOARD_SIZE {
        let x = GRID_OFFSET_X + i as f32 * CELL_SIZE;
        draw_line(x, GRID_OFFSET_Y, x, GRID_OFFSET_Y + BOARD_PIXELS, GRID_LINE_WIDTH, BLACK);

        let y = GRID_OFFSET_Y + i as f32 * CELL_SIZE;
        draw_line(GRID_OFFSET_X, y, GRID_OFFSET_X + BOARD_PIXELS, y, GRID_LINE_WIDTH, BLACK);
    }
    draw_rectangle_lines(
        GRID_OFFSET_X,
        GRID_OFFSET_Y,
        BOARD_PIXELS,
        BOARD_PIXELS,
        GRID_LINE_WIDTH,
        BLACK,
    );
}

fn draw_pieces(pieces: &[GamePiece]) {
    pieces.iter().for_each(draw_piece);
}

/// Draw one piece at its current animation position.
/// Size and stroke width both scale with the grow animation.
fn draw_piece(piece: &GamePiece) {
    let (x, y) = piece.position();
    let size = PIECE_HALF_SIZE * piece.scale();
    let stroke = PIECE_STROKE * piece.scale();

    match piece.symbol() {
        Player::X => {
            draw_line(x - size, y - size, x + size, y + size, stroke, X_COLOR);
            draw_line(x - size, y + size, x + size, y - size, stroke, X_COLOR);
        }
        Player::O => {
            draw_circle_lines(x, y, size, stroke, O_COLOR);
        }
    }
}

/// Highlight the completed triple, inset slightly from the board edge
fn draw_winning_line(line: WinningLine) {
    let near = WIN_LINE_INSET;
    let far = BOARD_PIXELS - WIN_LINE_INSET;
    let (start_x, start_y, end_x, end_y) = match line {
        WinningLine::Row(row) => {
            let y = row as f32 * CELL_SIZE + CELL_SIZE / 2.0;
            (near, y, far, y)
        }
        WinningLine::Column(col) => {
            let x = col as f32 * CELL_SIZE + CELL_SIZE / 2.0;
            (x, near, x, far)
        }
        WinningLine::MainDiagonal => (near, near, far, far),
        WinningLine::AntiDiagonal => (far, near, near, far),
    };

    draw_line(
        GRID_OFFSET_X + start_x,
        GRID_OFFSET_Y + start_y,
        GRID_OFFSET_X + end_x,
        GRID_OFFSET_Y + end_y,
        WIN_LINE_WIDTH,
        WIN_COLOR,
    );
}

/// Status line below the board: whose turn it is, or how the game ended
fn draw_status(game: &GameState) {
    let (text, color) = match game.status() {
        Status::Won { player, .. } => (format!("Player {player} Wins!"), WIN_COLOR),
        Status::Tied => ("It's a Tie!".to_owned(), BLACK),
        Status::InProgress => (format!("Player {}'s Turn", game.current_player()), BLACK),
    };

    let size = measure_text(&text, None, STATUS_FONT_SIZE, 1.0);
    draw_text(
        &text,
        (SCREEN_WIDTH - size.width) / 2.0,
        SCREEN_HEIGHT - 100.0,
        STATUS_FONT_SIZE as f32,
        color,
    );
}
