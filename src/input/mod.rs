use macroquad::prelude::*;

use crate::application::GameController;

/// Forward a left-button press to the controller.
/// Polled once per frame; does nothing while the button is held.
pub fn handle_pointer(controller: &mut GameController, mouse_pos: (f32, f32)) {
    if is_mouse_button_pressed(MouseButton::Left) {
        controller.handle_pointer_down(mouse_pos.0, mouse_pos.1);
    }
}
