use macroquad::prelude::*;
use snake_arcade::{
    input::{self, SwipeTracker},
    rendering,
    ui::{self, Button, Slider},
    GameSession,
};

enum Screen {
    Menu,
    Playing(GameSession),
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: 480,
        window_height: 800,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut screen = Screen::Menu;
    let mut swipes = SwipeTracker::new();

    let mut speed_slider = Slider::new(
        0.0,
        0.0,
        ui::WIDGET_WIDTH,
        "Speed",
        ui::SPEED_MIN,
        ui::SPEED_MAX,
        ui::SPEED_MIN,
    );
    let mut start_button = Button::new(0.0, 0.0, ui::WIDGET_WIDTH, ui::BUTTON_HEIGHT, "Start Game");

    loop {
        let mouse_pos = mouse_position();
        let mut next_screen: Option<Screen> = None;

        match &mut screen {
            Screen::Menu => {
                // Reposition every frame so the menu stays centered.
                let x = ui::widget_x();
                let top = ui::menu_top();
                speed_slider.set_position(x, top);
                start_button.set_position(x, top + 60.0);

                speed_slider.update(mouse_pos);
                if start_button.is_clicked(mouse_pos) || is_key_pressed(KeyCode::Enter) {
                    next_screen = Some(Screen::Playing(GameSession::start(
                        screen_width(),
                        screen_height(),
                        speed_slider.value(),
                    )));
                }

                clear_background(Color::from_rgba(26, 128, 182, 255));
                let title = "Snake";
                let title_size = screen_height() / 12.0;
                let measured = measure_text(title, None, title_size as u16, 1.0);
                draw_text(
                    title,
                    (screen_width() - measured.width) / 2.0,
                    screen_height() * 0.25,
                    title_size,
                    WHITE,
                );
                speed_slider.draw(mouse_pos);
                start_button.draw(mouse_pos);
                draw_text(
                    "Swipe or use arrow keys. P pauses, Esc quits to menu.",
                    x,
                    top + 140.0,
                    16.0,
                    Color::from_rgba(220, 220, 220, 255),
                );
            }
            Screen::Playing(session) => {
                if is_key_pressed(KeyCode::Escape) {
                    // Dropping the session joins the worker thread.
                    next_screen = Some(Screen::Menu);
                } else {
                    if is_key_pressed(KeyCode::P) {
                        session.toggle_paused();
                    }
                    if let Some(heading) = swipes.poll().or_else(input::poll_arrow_keys) {
                        session.request_heading_change(heading);
                    }

                    let snapshot = session.snapshot();
                    rendering::draw_frame(&snapshot, session.block_size());
                    if session.is_paused() {
                        rendering::draw_paused_overlay();
                    }
                }
            }
        }

        if let Some(next) = next_screen {
            screen = next;
        }

        next_frame().await;
    }
}
