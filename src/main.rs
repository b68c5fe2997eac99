//! Chime Rings entry point
//!
//! Platform wiring and the animation-frame driver: one simulation tick and
//! one render per frame, spawn requests queued from pointer events.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use chime_rings::Settings;
    use chime_rings::audio::AudioManager;
    use chime_rings::renderer::RenderState;
    use chime_rings::sim::{SimConfig, SimState, tick};

    /// Everything the driver owns
    struct App {
        sim: SimState,
        render_state: Option<RenderState>,
        audio: AudioManager,
        settings: Settings,
        /// Spawn requests collected between frames, drained at the next tick
        pending_spawns: Vec<Vec2>,
        /// CSS pixel to playfield pixel scale
        dpr: f32,
    }

    impl App {
        fn new(sim: SimState, settings: Settings, dpr: f32) -> Self {
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_muted(settings.muted);
            Self {
                sim,
                render_state: None,
                audio,
                settings,
                pending_spawns: Vec::new(),
                dpr,
            }
        }

        /// One animation frame: drain spawns, advance the sim, fire cues, draw.
        fn frame(&mut self) {
            for center in self.pending_spawns.drain(..) {
                self.sim.spawn(center);
            }

            let events = tick(&mut self.sim);
            for bucket in events.cues {
                match self.sim.cue_mapper.resolve(bucket) {
                    Some(note) => self.audio.play(note),
                    None => log::debug!("cue bucket {bucket} out of range, dropped"),
                }
            }

            if let Some(render_state) = &mut self.render_state {
                match render_state.render(&self.sim) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn queue_spawn(&mut self, x: f32, y: f32) {
            // Browsers gate audio on a user gesture; the first spawn is one
            self.audio.resume();
            self.pending_spawns
                .push(Vec2::new(x * self.dpr, y * self.dpr));
        }

        fn toggle_mute(&mut self) {
            let muted = !self.audio.muted();
            self.audio.set_muted(muted);
            self.settings.muted = muted;
            self.settings.save();
            log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Chime Rings starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the backing store to the displayed size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let config = SimConfig::new(width as f32, height as f32);
        let sim = SimState::new(config, seed).expect("invalid simulation config");
        let settings = Settings::load();
        let app = Rc::new(RefCell::new(App::new(sim, settings, dpr as f32)));

        log::info!("Simulation initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Chime Rings running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Click spawns a circle at the pointer
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .queue_spawn(event.offset_x() as f32, event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch spawns too
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    app.borrow_mut().queue_spawn(
                        touch.client_x() as f32 - rect.left() as f32,
                        touch.client_y() as f32 - rect.top() as f32,
                    );
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard: m toggles mute
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "m" | "M") {
                    app.borrow_mut().toggle_mute();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, _time: f64) {
        app.borrow_mut().frame();
        request_animation_frame(app);
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
    log::info!("Chime Rings (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nRunning headless simulation smoke test...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use chime_rings::sim::{SimConfig, SimState, tick};
    use glam::Vec2;

    let config = SimConfig::new(800.0, 600.0);
    let mut state = SimState::new(config, 42).expect("valid simulation config");
    state.spawn(Vec2::new(400.0, 300.0));
    state.spawn(Vec2::new(300.0, 300.0));

    let mut cues = 0;
    for _ in 0..600 {
        cues += tick(&mut state).cues.len();
        for circle in &state.circles {
            assert!(circle.radius >= 0.0, "radius went negative");
        }
    }
    println!(
        "✓ 600 ticks, {} circles, {} cues requested",
        state.circles.len(),
        cues
    );
}
