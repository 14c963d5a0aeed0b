use crate::domain::Player;
use crate::ui;

/// Pixels a piece slides per frame
pub const MOVE_STEP: f32 = 8.0;
/// Scale gained per frame while growing
pub const SCALE_STEP: f32 = 0.05;
/// Off-screen spawn point for new pieces
pub const SPAWN_POSITION: (f32, f32) = (-100.0, -100.0);

const START_SCALE: f32 = 0.1;
const TARGET_SCALE: f32 = 1.0;

/// GamePiece is the animated visual token for one placed symbol.
/// It slides from an off-screen spawn point to its cell center and grows
/// to full scale; both animations are fixed-step and finite.
pub struct GamePiece {
    symbol: Player,
    row: usize,
    col: usize,
    x: f32,
    y: f32,
    target_x: f32,
    target_y: f32,
    scale: f32,
    moving: bool,
}

impl GamePiece {
    /// Spawn a piece targeting the given cell
    pub fn new(symbol: Player, row: usize, col: usize) -> Self {
        let (target_x, target_y) = ui::cell_center(row, col);
        Self {
            symbol,
            row,
            col,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
            target_x,
            target_y,
            scale: START_SCALE,
            moving: true,
        }
    }

    /// Advance the animation by one fixed step.
    ///
    /// Each axis moves independently and snaps once it is within one step
    /// of the target; `moving` clears when both have settled. Scale grows
    /// until it clamps at the target, regardless of position.
    pub fn update(&mut self) {
        if self.moving {
            self.x = step_axis(self.x, self.target_x);
            self.y = step_axis(self.y, self.target_y);
            self.moving = self.x != self.target_x || self.y != self.target_y;
        }

        if self.scale < TARGET_SCALE {
            self.scale = (self.scale + SCALE_STEP).min(TARGET_SCALE);
        }
    }

    pub const fn symbol(&self) -> Player {
        self.symbol
    }

    pub const fn cell(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub const fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub const fn scale(&self) -> f32 {
        self.scale
    }

    pub const fn is_moving(&self) -> bool {
        self.moving
    }
}

fn step_axis(current: f32, target: f32) -> f32 {
    let delta = target - current;
    if delta.abs() < MOVE_STEP {
        target
    } else {
        current + MOVE_STEP * delta.signum()
    }
}
