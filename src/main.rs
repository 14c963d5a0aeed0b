use macroquad::prelude::*;
use tic_tac_toe::{GameController, audio::SoundBank, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Tic-Tac-Toe".to_owned(),
        window_width: ui::SCREEN_WIDTH as i32,
        window_height: ui::SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let sounds = SoundBank::load().await;
    let mut controller = GameController::new(sounds);
    let restart_button = ui::restart_button();

    loop {
        let mouse_pos = mouse_position();

        input::handle_pointer(&mut controller, mouse_pos);
        controller.update();
        rendering::draw_scene(&controller, &restart_button, mouse_pos);

        next_frame().await;
    }
}
