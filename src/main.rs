//! Flappy Finger entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent};

    use flappy_finger::error::RenderError;
    use flappy_finger::platform::{HostKey, Mailbox, PendingFrame, classify, from_normalized};
    use flappy_finger::renderer::{DrawList, RenderState, Surface, labels};
    use flappy_finger::{FrameRequest, GameConfig, GameLoop};

    /// Latest finger position written by the page's hand tracker
    static HAND: Mailbox = Mailbox::new();

    /// Called by the tracking pipeline with a sample in canvas pixels
    #[wasm_bindgen]
    pub fn submit_finger_sample(x: f32, y: f32) {
        HAND.publish(Vec2::new(x, y));
    }

    /// Called by the tracking pipeline with a landmark in normalized image coordinates
    #[wasm_bindgen]
    pub fn submit_finger_landmark(nx: f32, ny: f32) {
        HAND.publish(from_normalized(nx, ny, &GameConfig::default()));
    }

    /// Text labels layered over the canvas inside `#hud`
    struct PageHud {
        document: Document,
        container: Option<Element>,
        slots: Vec<Element>,
    }

    impl PageHud {
        fn new(document: Document) -> Self {
            let container = document.get_element_by_id("hud");
            if container.is_none() {
                log::warn!("No #hud element, text will not be shown");
            }
            Self {
                document,
                container,
                slots: Vec::new(),
            }
        }

        /// Write the frame's text into the page, hiding unused slots
        fn show(&mut self, frame: &DrawList) {
            let Some(container) = self.container.as_ref() else {
                return;
            };
            let labels = labels(frame);

            while self.slots.len() < labels.len() {
                match self.document.create_element("div") {
                    Ok(el) => {
                        let _ = container.append_child(&el);
                        self.slots.push(el);
                    }
                    Err(e) => {
                        log::warn!("Failed to create HUD label: {:?}", e);
                        break;
                    }
                }
            }

            for (i, el) in self.slots.iter().enumerate() {
                match labels.get(i) {
                    Some(label) => {
                        if el.text_content().as_deref() != Some(label.text.as_str()) {
                            el.set_text_content(Some(&label.text));
                        }
                        let _ = el.set_attribute("style", &label.style);
                    }
                    None => {
                        let _ = el.set_attribute("style", "display:none");
                    }
                }
            }
        }
    }

    /// The canvas with its text overlay. The GPU side is absent until WebGPU
    /// finished initializing.
    struct CanvasSurface {
        render_state: Option<RenderState>,
        hud: PageHud,
    }

    impl Surface for CanvasSurface {
        fn present(&mut self, frame: &DrawList) -> Result<(), RenderError> {
            self.hud.show(frame);
            match self.render_state {
                Some(ref mut render_state) => render_state.present(frame),
                None => Err(RenderError::Unavailable),
            }
        }
    }

    /// Host instance holding the game and its page subscriptions
    struct Host {
        game: GameLoop<&'static Mailbox>,
        surface: CanvasSurface,
        /// Outstanding requestAnimationFrame
        frame: PendingFrame<i32>,
        /// Keydown listener, kept so it can be unregistered
        key_listener: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Finger starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::default();

        // Fixed logical size, scaled for the display
        let dpr = window.device_pixel_ratio();
        let width = (config.surface_width as f64 * dpr) as u32;
        let height = (config.surface_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let logical_size = (config.surface_width, config.surface_height);
        let game = match GameLoop::new(config, &HAND, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Invalid game config: {}", e);
                return;
            }
        };

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let render_state = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas)) {
            Ok(surface) => {
                match instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await
                {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        RenderState::new(surface, &adapter, width, height, logical_size)
                            .await
                            .map_err(|e| log::error!("Renderer unavailable: {}", e))
                            .ok()
                    }
                    Err(e) => {
                        log::error!("No GPU adapter: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                None
            }
        };

        // Without a renderer the game still runs; every frame is a skip
        let host = Rc::new(RefCell::new(Host {
            game,
            surface: CanvasSurface {
                render_state,
                hud: PageHud::new(document),
            },
            frame: PendingFrame::new(),
            key_listener: None,
        }));

        setup_key_handler(host.clone());

        request_animation_frame(host);

        log::info!("Flappy Finger running!");
    }

    fn setup_key_handler(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let handler_host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            match classify(&event.key()) {
                HostKey::Restart => {
                    let needs_frame = {
                        let mut h = handler_host.borrow_mut();
                        let was_halted = h.game.restart();
                        h.frame.needs_request(was_halted)
                    };
                    if needs_frame {
                        request_animation_frame(handler_host.clone());
                    }
                }
                HostKey::Quit => teardown(&handler_host),
                HostKey::Other => {}
            }
        });
        let _ = window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        host.borrow_mut().key_listener = Some(closure);
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let frame_host = host.clone();
        let closure = Closure::once(move |_time: f64| {
            game_loop(frame_host);
        });
        let result = window.request_animation_frame(closure.as_ref().unchecked_ref());
        if let Err(e) = host.borrow_mut().frame.record(result) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        let request = {
            let mut h = host.borrow_mut();
            h.frame.fired();
            let Host { game, surface, .. } = &mut *h;
            game.on_frame(surface)
        };

        if request == FrameRequest::Continue {
            request_animation_frame(host);
        }
    }

    /// Stop scheduling and drop every page subscription
    fn teardown(host: &Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let mut h = host.borrow_mut();

        if let Some(handle) = h.frame.take() {
            let _ = window.cancel_animation_frame(handle);
        }
        if let Some(listener) = h.key_listener.take() {
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                listener.as_ref().unchecked_ref(),
            );
            // Still on the stack of the event being dispatched, so it cannot be dropped here
            listener.forget();
        }
        HAND.clear();

        log::info!(
            "Flappy Finger stopped after {} frames ({} sessions)",
            h.game.frames(),
            h.game.sessions()
        );
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use glam::Vec2;

    use flappy_finger::platform::Mailbox;
    use flappy_finger::renderer::RecordingSurface;
    use flappy_finger::{FrameRequest, GameConfig, GameLoop};

    const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);
    const SAMPLE_INTERVAL: Duration = Duration::from_millis(33);
    /// Stop after 30 seconds of play
    const MAX_FRAMES: u64 = 30 * 60;

    /// Scripted hand: sweeps the finger up and down, independent of the frame rate
    fn spawn_tracker(
        mailbox: Arc<Mailbox>,
        stop: Arc<AtomicBool>,
        config: &GameConfig,
    ) -> thread::JoinHandle<()> {
        let x = config.surface_width / 2.0;
        let mid = config.surface_height / 2.0;
        let amplitude = mid - 3.0 * config.bird_radius;

        thread::spawn(move || {
            let start = Instant::now();
            while !stop.load(Ordering::Relaxed) {
                let t = start.elapsed().as_secs_f32();
                mailbox.publish(Vec2::new(x, mid + amplitude * (t * 1.3).sin()));
                thread::sleep(SAMPLE_INTERVAL);
            }
        })
    }

    pub fn run() -> Result<(), flappy_finger::ConfigError> {
        let config = match std::env::args().nth(1) {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();

        let mailbox = Arc::new(Mailbox::new());
        let stop = Arc::new(AtomicBool::new(false));
        let tracker = spawn_tracker(Arc::clone(&mailbox), Arc::clone(&stop), &config);

        let mut game = GameLoop::new(config, Arc::clone(&mailbox), seed)?;
        let mut surface = RecordingSurface::new();

        while game.frames() < MAX_FRAMES {
            let started = Instant::now();
            if game.on_frame(&mut surface) == FrameRequest::Halt {
                break;
            }
            thread::sleep(FRAME_INTERVAL.saturating_sub(started.elapsed()));
        }

        stop.store(true, Ordering::Relaxed);
        let _ = tracker.join();

        log::info!(
            "Demo finished: score {} after {} frames ({} presented)",
            game.state().score,
            game.frames(),
            surface.presented
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Finger (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
