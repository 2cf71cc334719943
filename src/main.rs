//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use canvas_pong::consts::*;
    use canvas_pong::renderer::{CanvasSurface, draw_frame};
    use canvas_pong::sim::{self, GameState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, surface: CanvasSurface) -> Self {
            Self {
                state: GameState::new(seed),
                surface,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// One loop iteration: physics step, AI, render
        fn frame(&mut self, time: f64) {
            let events = sim::step(&mut self.state);
            if let Some(side) = events.point {
                let score = self.state.score;
                log::info!("point for {side:?} ({}-{})", score.player, score.opponent);
            }

            let ball_y = self.state.ball.pos.y;
            let arena = self.state.arena;
            sim::track_ball(&mut self.state.opponent, ball_y, &arena);

            draw_frame(&self.state, &mut self.surface);

            self.track_fps(time);
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 && time > oldest {
                self.fps = (60_000.0 / (time - oldest)).round() as u32;
                if self.frame_index == 0 {
                    log::debug!("{} fps", self.fps);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(ARENA_WIDTH as u32);
        canvas.set_height(ARENA_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let surface = CanvasSurface::new(&canvas);
        let game = Rc::new(RefCell::new(Game::new(seed, surface)));

        log::info!("Game initialized with seed: {seed}");

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - center the player paddle on the pointer. Runs on the
        // browser event queue between loop iterations, so it mutates the
        // shared state directly.
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let local_y = event.client_y() as f32 - rect.top() as f32;
                let mut g = game.borrow_mut();
                let arena = g.state.arena;
                let target = sim::player_target_y(local_y, &g.state.player, &arena);
                g.state.player.y = target;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard - `d` dumps a state snapshot to the console
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "d" | "D") {
                    log::info!("{}", game.borrow().state.snapshot_json());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::sim::{self, GameState};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");

    // Headless demo: a perfect player against the tracker for a stretch of
    // frames, to exercise the sim without a browser
    let mut state = GameState::new(0xC0FFEE);
    for _ in 0..20_000 {
        let events = sim::step(&mut state);
        if let Some(side) = events.point {
            log::info!(
                "point for {side:?} ({}-{})",
                state.score.player,
                state.score.opponent
            );
        }
        let ball_y = state.ball.pos.y;
        let arena = state.arena;
        sim::track_ball(&mut state.opponent, ball_y, &arena);
        state.player.y = sim::player_target_y(ball_y, &state.player, &arena);
    }
    println!(
        "20000 frames: player {} - opponent {}",
        state.score.player, state.score.opponent
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
