//! Toyfall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use toyfall::assets::{self, AssetManifest};
    use toyfall::audio::MusicPlayer;
    use toyfall::consts::*;
    use toyfall::input::{Action, InputState};
    use toyfall::renderer::Renderer;
    use toyfall::sim::{GameState, Phase, tick};
    use toyfall::viewport::ViewTransform;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        renderer: Renderer,
        music: MusicPlayer,
        view: ViewTransform,
        last_time: f64,
        /// Previous frame's phase, for edge-triggered timer lifecycle
        last_phase: Phase,
        /// The single live countdown interval, cancelled before any restart
        countdown_handle: Option<i32>,
        /// One-shot splash delay; armed at most once per splash screen
        splash_handle: Option<i32>,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Toyfall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Asset loading is the only awaited operation; the frame loop does
        // not start until everything is in.
        let manifest = AssetManifest::embedded();
        let images = assets::load_all(&manifest).await;
        let music = MusicPlayer::new(&manifest.music);

        // Hide loading indicator now that assets are in
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let view = apply_view(&canvas, &ctx);
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            input: InputState::default(),
            renderer: Renderer::new(canvas.clone(), ctx.clone(), images),
            music,
            view,
            last_time: 0.0,
            last_phase: Phase::Splash,
            countdown_handle: None,
            splash_handle: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        // Handlers go in only after state exists, so early events are
        // simply never delivered
        setup_keyboard_handlers(game.clone());
        setup_pointer_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, &ctx, game.clone());
        setup_blur_handler(game.clone());

        request_animation_frame(game);

        log::info!("Toyfall running!");
    }

    /// Size the backing store for the device pixel ratio and install the
    /// logical-to-device transform. Returns the CSS-pixel view transform
    /// used for pointer mapping.
    fn apply_view(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> ViewTransform {
        let window = web_sys::window().unwrap();
        let css_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let css_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let dpr = window.device_pixel_ratio();

        canvas.set_width((css_w * dpr) as u32);
        canvas.set_height((css_h * dpr) as u32);
        let _ = canvas
            .style()
            .set_property("width", &format!("{}px", css_w));
        let _ = canvas
            .style()
            .set_property("height", &format!("{}px", css_h));

        let view = ViewTransform::fit(css_w as f32, css_h as f32);
        let scale = view.scale as f64 * dpr;
        let _ = ctx.set_transform(
            scale,
            0.0,
            0.0,
            scale,
            view.offset_x as f64 * dpr,
            view.offset_y as f64 * dpr,
        );
        view
    }

    fn setup_keyboard_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().input.press(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key(&event.key()) {
                    game.borrow_mut().input.release(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                handle_pointer(&game, event.client_x() as f32, event.client_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    handle_pointer(&game, x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Route a click/tap: first gesture starts the music, Splash arms the
    /// start delay, Result hits the panel buttons.
    fn handle_pointer(game: &Rc<RefCell<Game>>, css_x: f32, css_y: f32) {
        let (phase, logical) = {
            let mut g = game.borrow_mut();
            g.music.try_start();
            (g.state.phase, g.view.to_logical(css_x, css_y))
        };

        match phase {
            Phase::Splash => {
                if game.borrow_mut().state.acknowledge_splash() {
                    arm_splash_timeout(game);
                }
            }
            Phase::Result => {
                let Some(point) = logical else { return };
                let mut g = game.borrow_mut();
                if RESULT_BACK_BUTTON.contains(point) {
                    g.state.return_to_explore();
                } else if RESULT_AGAIN_BUTTON.contains(point) {
                    g.state.enter_minigame();
                }
            }
            _ => {}
        }
    }

    /// Schedule the one-shot splash delay. `acknowledge_splash` has already
    /// guaranteed this runs at most once per splash screen.
    fn arm_splash_timeout(game: &Rc<RefCell<Game>>) {
        let cb = Closure::once_into_js({
            let game = game.clone();
            move || {
                let mut g = game.borrow_mut();
                g.splash_handle = None;
                g.state.begin_explore();
            }
        });
        let window = web_sys::window().unwrap();
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            SPLASH_DELAY_MS,
        ) {
            Ok(handle) => game.borrow_mut().splash_handle = Some(handle),
            Err(e) => log::warn!("failed to arm splash timeout: {:?}", e),
        }
    }

    fn setup_resize_handler(
        canvas: &HtmlCanvasElement,
        ctx: &CanvasRenderingContext2d,
        game: Rc<RefCell<Game>>,
    ) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().view = apply_view(&canvas, &ctx);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Keys released while the window is unfocused never send keyup, so
    /// drop the whole held set on blur.
    fn setup_blur_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            game.borrow_mut().input.clear();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Start the 1 s countdown interval, cancelling any previous one first
    /// so two runs can never double-decrement.
    fn start_countdown(game: &Rc<RefCell<Game>>) {
        stop_countdown(&mut game.borrow_mut());

        let cb = Closure::<dyn FnMut()>::new({
            let game = game.clone();
            move || {
                game.borrow_mut().state.countdown_tick();
            }
        });
        let window = web_sys::window().unwrap();
        match window
            .set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 1000)
        {
            Ok(handle) => game.borrow_mut().countdown_handle = Some(handle),
            Err(e) => log::warn!("failed to start countdown interval: {:?}", e),
        }
        cb.forget();
    }

    fn stop_countdown(g: &mut Game) {
        if let Some(handle) = g.countdown_handle.take() {
            web_sys::window()
                .unwrap()
                .clear_interval_with_handle(handle);
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
        let entered_minigame = {
            let g = &mut *game.borrow_mut();

            // Elapsed seconds since the previous frame; the tick clamps it
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            tick(&mut g.state, &g.input, dt);

            // Edge-triggered timer lifecycle: the countdown lives exactly
            // as long as the MiniGame phase
            let prev = g.last_phase;
            let current = g.state.phase;
            if current != prev {
                log::info!("phase {:?} -> {:?}", prev, current);
                if prev == Phase::MiniGame {
                    stop_countdown(g);
                }
                g.last_phase = current;
            }

            g.renderer.draw(&g.state);

            current == Phase::MiniGame && prev != Phase::MiniGame
        };

        if entered_minigame {
            start_countdown(&game);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Toyfall (native) starting...");
    log::info!("The browser build is the playable one - run with `trunk serve`");

    headless_smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted run through every phase, exercising the simulation without a
/// browser: splash, explore to the gate, a full mini-game countdown, result.
#[cfg(not(target_arch = "wasm32"))]
fn headless_smoke_run() {
    use toyfall::consts::MINIGAME_DURATION_SECS;
    use toyfall::input::{Action, InputState};
    use toyfall::sim::{GameState, Phase, tick};

    let mut state = GameState::new(0x7051);
    assert!(state.acknowledge_splash());
    state.begin_explore();
    assert_eq!(state.phase, Phase::Explore);

    // Walk right until the gate triggers the mini-game
    let mut input = InputState::default();
    input.press(Action::Right);
    for _ in 0..1200 {
        if state.phase != Phase::Explore {
            break;
        }
        tick(&mut state, &input, 1.0 / 60.0);
    }
    assert_eq!(state.phase, Phase::MiniGame, "gate should have triggered");
    log::info!("entered mini-game at x={:.0}", state.player.pos.x);

    // Sway under the falling toys; tick the countdown once per 60 frames
    let mut frame = 0u32;
    while state.phase == Phase::MiniGame {
        let mut input = InputState::default();
        input.press(if (frame / 120) % 2 == 0 {
            Action::Left
        } else {
            Action::Right
        });
        tick(&mut state, &input, 1.0 / 60.0);
        frame += 1;
        if frame % 60 == 0 {
            state.countdown_tick();
        }
    }
    assert_eq!(state.phase, Phase::Result);
    assert_eq!(frame, MINIGAME_DURATION_SECS * 60);

    println!(
        "Smoke run complete: caught {} toys in {} seconds",
        state.score, MINIGAME_DURATION_SECS
    );

    state.return_to_explore();
    assert_eq!(state.phase, Phase::Explore);
    println!("✓ Phase cycle Splash → Explore → MiniGame → Result → Explore passed");
}
