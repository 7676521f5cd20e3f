//! Bounce Canvas entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use bounce_canvas::platform::FpsCounter;
    use bounce_canvas::renderer::{Canvas2dSurface, Surface};
    use bounce_canvas::sim::Actor;
    use bounce_canvas::{CanvasError, DrawingApp, FrameControl, Settings};

    /// Demo instance holding all state
    struct Demo {
        app: DrawingApp<Canvas2dSurface>,
        settings: Settings,
        fps: FpsCounter,
    }

    impl Demo {
        fn spawn(&mut self, actor: Actor) {
            let added = self.app.add_circles(self.settings.spawn_batch, actor);
            log::info!(
                "Added {} {} circles ({} total)",
                added,
                actor.as_str(),
                self.app.circles().len()
            );
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            if !self.settings.show_fps {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.fps.fps().to_string()));
            }
            if let Some(el) = document.query_selector("#hud-circles .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.app.circles().len().to_string()));
            }
        }
    }

    pub fn run() -> Result<(), CanvasError> {
        let window = web_sys::window().ok_or_else(|| CanvasError::Host("no window".into()))?;
        let surface = Canvas2dSurface::from_element_id("canvas")?;

        fit_canvas(surface.canvas(), &window);
        log::info!("Canvas {}x{}", surface.width(), surface.height());

        let settings = Settings::load();
        let seed = settings.resolve_seed(js_sys::Date::now() as u64);
        let app = DrawingApp::new(surface, &settings, seed);

        let demo = Rc::new(RefCell::new(Demo {
            app,
            settings,
            fps: FpsCounter::new(),
        }));

        setup_input_handlers(demo.clone())?;

        // Start frame loop
        request_animation_frame(demo);

        log::info!("Bounce Canvas running!");
        Ok(())
    }

    /// Match the backing store to the displayed size
    fn fit_canvas(canvas: &HtmlCanvasElement, window: &Window) {
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        if width > 0 && height > 0 && (width, height) != (canvas.width(), canvas.height()) {
            canvas.set_width(width);
            canvas.set_height(height);
        }
    }

    fn setup_input_handlers(demo: Rc<RefCell<Demo>>) -> Result<(), CanvasError> {
        let window = web_sys::window().ok_or_else(|| CanvasError::Host("no window".into()))?;

        // Keyboard: b = bounce batch, g = gravity batch, c = switch click actor, Escape = stop
        {
            let demo = demo.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut d = demo.borrow_mut();
                let key = event.key();
                match key.as_str() {
                    "Escape" => d.app.stop(),
                    "c" | "C" => {
                        d.settings.click_actor = d.settings.click_actor.toggled();
                        log::info!("Click spawns {} circles", d.settings.click_actor.as_str());
                        d.settings.save();
                    }
                    _ => {
                        if let Some(actor) = Actor::from_key(&key) {
                            d.spawn(actor);
                        }
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window resize: refit the canvas; bounds are re-read on the next frame
        {
            let canvas = demo.borrow().app.surface().canvas().clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if let Some(window) = web_sys::window() {
                    fit_canvas(&canvas, &window);
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click spawns a batch of the configured click actor
        {
            let canvas = demo.borrow().app.surface().canvas().clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut d = demo.borrow_mut();
                let actor = d.settings.click_actor;
                d.spawn(actor);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; frame loop not started");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(demo, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(demo: Rc<RefCell<Demo>>, time: f64) {
        let control = {
            let mut d = demo.borrow_mut();
            let control = d.app.redraw();
            d.fps.record(time);
            d.update_hud();
            control
        };

        if control == FrameControl::Continue {
            request_animation_frame(demo);
        } else {
            log::info!("Frame loop ended");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }

    log::info!("Bounce Canvas starting...");
    if let Err(e) = wasm_demo::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Canvas (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use bounce_canvas::platform::HeadlessLoop;
    use bounce_canvas::renderer::Framebuffer;
    use bounce_canvas::sim::Actor;
    use bounce_canvas::{CanvasError, DrawingApp, Settings};

    const USAGE: &str = "usage: bounce-canvas [frames] [snapshot.ppm]";
    const DEFAULT_FRAMES: u64 = 600;
    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;

    pub fn run() -> Result<(), CanvasError> {
        let mut args = std::env::args().skip(1);
        let frames = match args.next() {
            Some(arg) => arg
                .parse::<u64>()
                .map_err(|_| CanvasError::Host(format!("invalid frame count `{arg}`\n{USAGE}")))?,
            None => DEFAULT_FRAMES,
        };
        let snapshot = args.next();

        let settings = Settings::load();
        let clock = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let seed = settings.resolve_seed(clock);

        let mut app = DrawingApp::new(Framebuffer::new(WIDTH, HEIGHT), &settings, seed);
        // Half-way through, drop in a batch of falling circles
        let mut host = HeadlessLoop::new(settings.target_fps).with_max_frames(frames / 2);
        host.run(&mut app);
        app.add_circles(settings.spawn_batch, Actor::Gravity);
        let mut host = HeadlessLoop::new(settings.target_fps).with_max_frames(frames - frames / 2);
        host.run(&mut app);

        log::info!(
            "Drew {} frames of {} circles (seed {})",
            app.frame_count(),
            app.circles().len(),
            app.seed()
        );

        if let Some(path) = snapshot {
            app.surface().write_ppm(&path)?;
            log::info!("Snapshot written to {}", path);
        }
        Ok(())
    }
}
