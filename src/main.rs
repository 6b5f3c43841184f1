mod config;
mod error;
mod font;
mod game;
mod game_state;
mod generator;
mod graphics;
mod grid;
mod input;
mod input_mapping;
mod shape;
mod tile;

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::Config;
use crate::error::GameError;
use crate::font::FontRenderer;
use crate::game::{FrameOutcome, Game};
use crate::graphics::GraphicsRenderer;
use crate::input::InputHandler;

const WIDTH: u32 = 750;
const HEIGHT: u32 = 750;

/// Startup failures are logged before they end the program.
fn fatal(err: impl Into<GameError>) -> GameError {
    let err = err.into();
    log::error!("{}", err);
    err
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::load().map_err(fatal)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(fatal)?;

    let font = FontRenderer::discover(config.font_path.as_deref());
    let mut graphics =
        GraphicsRenderer::new(&window, WIDTH, HEIGHT, font, config.font_size).map_err(fatal)?;

    let mut game = Game::new(&config, WIDTH, HEIGHT);
    let mut input_handler = InputHandler::new();
    log::info!("Starting {}x{} game", WIDTH, HEIGHT);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    input_handler.handle_keyboard_input(&input);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input_handler.handle_mouse_input(state, button);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = graphics.window_pos_to_buffer(position.x, position.y);
                    input_handler.handle_cursor_moved(x, y);
                }
                WindowEvent::Focused(false) => {
                    input_handler.release_all();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let snapshot = input_handler.snapshot(HEIGHT);
                if game.frame(&snapshot) == FrameOutcome::Quit {
                    log::info!("Quit requested after {} moves", game.moves());
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                graphics.render(&game);
                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
