//! Sky Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement};

    use sky_dodge::input::InputState;
    use sky_dodge::render::canvas::CanvasSurface;
    use sky_dodge::render::draw_frame;
    use sky_dodge::sim::{GameEvent, GamePhase, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        input: InputState,
        /// True while a frame-callback chain is armed. Exactly one chain
        /// may exist; it disarms itself when the session leaves play.
        raf_active: bool,
    }

    impl Game {
        fn new(state: GameState, surface: CanvasSurface) -> Self {
            Self {
                state,
                surface,
                input: InputState::new(),
                raf_active: false,
            }
        }

        /// Run one frame: tick, render, surface events to the DOM.
        fn frame(&mut self) {
            tick(&mut self.state, &self.input.current);
            self.input.end_tick();
            draw_frame(&self.state, &mut self.surface);

            let events = self.state.take_events();
            if !events.is_empty() {
                self.apply_events(&events);
            }
        }

        fn apply_events(&mut self, events: &[GameEvent]) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                log::warn!("no document, dropping {} event(s)", events.len());
                return;
            };
            for event in events {
                match *event {
                    GameEvent::ScoreChanged(score) => {
                        set_text(&document, "hud-score", &format!("Score: {score}"));
                    }
                    GameEvent::GameOver { score } => {
                        log::info!("game over with score {score}");
                        set_text(&document, "final-score", &score.to_string());
                        set_hidden(&document, "game-over", false);
                        self.surface.show_sprite(false);
                    }
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        match document.get_element_by_id(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => log::warn!("missing element #{id}"),
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        match document.get_element_by_id(id) {
            Some(el) => {
                let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
            }
            None => log::warn!("missing element #{id}"),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Sky Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let sprite = document
            .get_element_by_id("player-sprite")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if sprite.is_none() {
            log::warn!("no player sprite element, using rectangle fallback");
        }

        let surface = CanvasSurface::new(&canvas, sprite).expect("2d context unavailable");
        let state = GameState::new(width, height);
        let game = Rc::new(RefCell::new(Game::new(state, surface)));

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        log::info!("Sky Dodge ready ({width}x{height})");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.key_down(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // start, restart and play-again all take the same transition
        for id in ["start-btn", "restart-btn", "play-again-btn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("missing button #{id}");
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_session(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Reset the session and make sure exactly one frame loop is armed.
    fn start_session(game: &Rc<RefCell<Game>>) {
        let seed = js_sys::Date::now() as u64;
        let arm = {
            let mut g = game.borrow_mut();
            g.state.start(seed);
            g.input = InputState::new();
            g.surface.show_sprite(true);

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                set_hidden(&document, "start-btn", true);
                set_hidden(&document, "restart-btn", false);
                set_hidden(&document, "game-over", true);
                set_text(&document, "hud-score", "Score: 0");
            }

            log::info!("session started with seed {seed}");

            let arm = !g.raf_active;
            g.raf_active = true;
            arm
        };
        if arm {
            request_frame(game.clone());
        }
    }

    fn request_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.frame();

            // Leaving play disarms the chain; no orphaned callback may
            // outlive the session.
            if !matches!(g.state.phase, GamePhase::Running | GamePhase::Paused) {
                g.raf_active = false;
                return;
            }
        }
        request_frame(game);
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Running {
                    g.input.current.pause = true;
                    log::info!("auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Dodge (native) starting...");
    log::info!("native mode has no window - run with `trunk serve` for the playable version");

    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the sim with a scripted input pattern until game over (or a tick
/// cap), printing score changes as they happen.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use sky_dodge::consts::{SURFACE_H, SURFACE_W};
    use sky_dodge::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new(SURFACE_W, SURFACE_H);
    state.start(0x5eed);

    for t in 0..20_000u64 {
        let input = TickInput {
            left: (t / 40) % 2 == 0,
            right: (t / 40) % 2 == 1,
            fire: t % 25 == 0,
            ..Default::default()
        };
        tick(&mut state, &input);

        for event in state.take_events() {
            match event {
                GameEvent::ScoreChanged(score) => println!("tick {t}: score {score}"),
                GameEvent::GameOver { score } => {
                    println!("tick {t}: game over, final score {score}");
                }
            }
        }

        if state.phase == GamePhase::Over {
            break;
        }
    }

    println!("✓ headless demo finished");
}
