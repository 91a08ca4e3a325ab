//! Ninja Brawl entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlAudioElement, HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent};

    use ninja_brawl::audio::AudioManager;
    use ninja_brawl::platform::InputState;
    use ninja_brawl::renderer::{CanvasRenderer, SpriteSheets};
    use ninja_brawl::{GameError, GameLoop, GameResult, Settings};

    fn dom_err(e: JsValue) -> GameError {
        GameError::Dom(format!("{:?}", e))
    }

    fn element<T: JsCast>(document: &Document, id: &str) -> GameResult<T> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::Dom(format!("missing #{}", id)))?
            .dyn_into::<T>()
            .map_err(|_| GameError::Dom(format!("#{} has the wrong element type", id)))
    }

    fn set_display(el: &HtmlElement, value: &str) {
        let _ = el.style().set_property("display", value);
    }

    pub fn run() -> GameResult<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| GameError::Dom(e.to_string()))?;

        log::info!("Ninja Brawl starting...");

        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Dom("no document".into()))?;

        let canvas: HtmlCanvasElement = element(&document, "gameCanvas")?;
        let start_screen: HtmlElement = element(&document, "startScreen")?;
        let start_button: HtmlElement = element(&document, "startButton")?;
        let hit_sound: Option<HtmlAudioElement> = element(&document, "hitSound").ok();

        let settings = Rc::new(RefCell::new(Settings::load()));
        let input = Rc::new(RefCell::new(InputState::new()));
        let audio = Rc::new(RefCell::new(AudioManager::new(hit_sound, &settings.borrow())));

        setup_input_handlers(&canvas, input.clone(), settings.clone(), audio.clone())?;

        // Start button: hide the start screen, show the canvas, run the loop
        {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                set_display(&start_screen, "none");
                set_display(&canvas, "block");
                match start_game(&canvas, input.clone(), audio.clone(), &settings.borrow()) {
                    Ok(()) => log::info!("Ninja Brawl running!"),
                    Err(e) => log::error!("Failed to start game: {}", e),
                }
            });
            start_button
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(dom_err)?;
            closure.forget();
        }

        Ok(())
    }

    fn start_game(
        canvas: &HtmlCanvasElement,
        input: Rc<RefCell<InputState>>,
        audio: Rc<RefCell<AudioManager>>,
        settings: &Settings,
    ) -> GameResult<()> {
        let renderer = CanvasRenderer::new(canvas, SpriteSheets::load()?)?;
        let mut game = GameLoop::builder()
            .renderer(renderer)
            .input(input)
            .audio(audio)
            .settings(settings.clone())
            .build()?;
        game.character_select();

        let handle = game.handle();
        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            log::info!("Page hidden, stopping game loop");
            handle.stop();
        });
        window
            .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        closure.forget();

        request_animation_frame(Rc::new(RefCell::new(game)));
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        input: Rc<RefCell<InputState>>,
        settings: Rc<RefCell<Settings>>,
        audio: Rc<RefCell<AudioManager>>,
    ) -> GameResult<()> {
        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;

        // Keyboard
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "m" || key == "M" {
                    let mut s = settings.borrow_mut();
                    s.muted = !s.muted;
                    s.save();
                    audio.borrow_mut().apply_settings(&s);
                    log::info!("Muted: {}", s.muted);
                    return;
                }
                if key == " " || key.starts_with("Arrow") {
                    event.prevent_default();
                }
                input.borrow_mut().key_down(&key, event.repeat());
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(dom_err)?;
            closure.forget();
        }
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                input.borrow_mut().key_up(&event.key());
            });
            window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
                .map_err(dom_err)?;
            closure.forget();
        }

        // Touch start: every new contact point picks a zone
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let touches = event.changed_touches();
                let mut g = input.borrow_mut();
                for i in 0..touches.length() {
                    if let Some(touch) = touches.get(i) {
                        g.touch_start(touch.client_x() as f64);
                    }
                }
            });
            canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())
                .map_err(dom_err)?;
            closure.forget();
        }
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                input.borrow_mut().touch_end();
            });
            canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())
                .map_err(dom_err)?;
            closure.forget();
        }

        // Window blur releases held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                input.borrow_mut().clear();
            });
            window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
                .map_err(dom_err)?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<GameLoop>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<GameLoop>>) {
        let running = game.borrow_mut().step();
        if running {
            request_animation_frame(game);
        } else {
            log::info!("Game loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Ninja Brawl failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ninja Brawl (native) starting...");
    log::info!("Native mode runs a headless autopilot session - serve index.html for the web version");

    if let Err(e) = headless::run(3) {
        log::error!("Headless session failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ninja_brawl::platform::{CountingAudio, HeadlessRenderer, InputState};
    use ninja_brawl::sim::GameState;
    use ninja_brawl::{GameLoop, GameResult, Settings};

    /// Distance at which the autopilot stops walking and swings
    const STRIKE_DISTANCE: f32 = 40.0;
    const MAX_STEPS: u64 = 100_000;

    /// Press keys the way a player would to reach and hit the first live enemy
    fn autopilot(input: &mut InputState, state: &GameState) {
        input.key_up("ArrowLeft");
        input.key_up("ArrowRight");
        let Some(target) = state.enemies().iter().find(|e| e.alive()) else {
            return;
        };
        let dx = target.x() - state.player.x();
        if dx >= STRIKE_DISTANCE {
            input.key_down("ArrowRight", false);
        } else if -dx >= STRIKE_DISTANCE {
            input.key_down("ArrowLeft", false);
        } else {
            input.key_down(" ", false);
        }
    }

    /// Play until `levels` levels are cleared
    pub fn run(levels: u32) -> GameResult<()> {
        let renderer = Rc::new(RefCell::new(HeadlessRenderer::default()));
        let input = Rc::new(RefCell::new(InputState::new()));
        let audio = Rc::new(RefCell::new(CountingAudio::default()));

        let mut game = GameLoop::builder()
            .renderer(renderer.clone())
            .input(input.clone())
            .audio(audio.clone())
            .settings(Settings::load())
            .build()?;
        game.character_select();

        let handle = game.handle();
        while game.step() {
            let state = game.state();
            if state.progression.level > levels || state.time_ticks >= MAX_STEPS {
                handle.stop();
            }
            autopilot(&mut input.borrow_mut(), state);
        }

        let audio = audio.borrow();
        let state = game.state();
        log::info!(
            "Reached level {} wave {} with score {} after {} ticks ({} frames drawn)",
            state.progression.level,
            state.progression.wave,
            state.progression.score,
            state.time_ticks,
            renderer.borrow().frames
        );
        log::info!(
            "{} hits, {} wave clears, {} level ups",
            audio.hits,
            audio.wave_clears,
            audio.level_ups
        );
        if let Some(hud) = renderer.borrow().last_hud {
            for line in hud.lines() {
                println!("{}", line);
            }
        }
        Ok(())
    }
}
