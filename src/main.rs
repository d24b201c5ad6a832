//! Atom Glow entry point
//!
//! Handles platform-specific initialization and drives the animation
//! loop once per display refresh.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use atom_glow::Palette;
    use atom_glow::render::{CanvasSurface, tick};
    use atom_glow::scene::Scene;
    use atom_glow::settings::Settings;
    use glam::Vec2;

    /// Everything the frame loop and input handlers share
    struct App {
        scene: Scene,
        surface: CanvasSurface,
        /// Skip pointer-driven impulses when the viewer asked for
        /// reduced motion
        reduced_motion: bool,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Atom Glow starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = window_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let scene = Scene::new(seed, width, height, settings.scene_config(), Palette::default());
        let surface = CanvasSurface::new(&canvas).expect("Failed to acquire 2d context");

        log::info!(
            "Scene initialized: seed {seed}, {}x{}, quality {}",
            width,
            height,
            settings.quality.as_str()
        );

        let app = Rc::new(RefCell::new(App {
            scene,
            surface,
            reduced_motion: settings.reduced_motion,
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(canvas, app.clone());

        request_animation_frame(app);

        log::info!("Atom Glow running!");
    }

    fn window_size() -> (f32, f32) {
        let window = web_sys::window().expect("no window");
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as f32;
        (width, height)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                if a.reduced_motion {
                    return;
                }
                let pointer = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                a.scene.set_pointer(pointer);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse leave
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().scene.clear_pointer();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut a = app.borrow_mut();
                    if a.reduced_motion {
                        return;
                    }
                    let rect = canvas_clone.get_bounding_client_rect();
                    let pointer = Vec2::new(
                        touch.client_x() as f32 - rect.left() as f32,
                        touch.client_y() as f32 - rect.top() as f32,
                    );
                    a.scene.set_pointer(pointer);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().scene.clear_pointer();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = window_size();
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            let mut a = app.borrow_mut();
            a.surface.set_size(width, height);
            a.scene.resized(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            let App { scene, surface, .. } = &mut *a;
            tick(scene, surface);
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use atom_glow::render::{RecordingSurface, tick};
    use atom_glow::{Palette, Scene, Settings};

    env_logger::init();

    let settings = Settings::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!("Atom Glow (headless) starting with seed {seed}");

    let mut scene = Scene::new(seed, 800.0, 600.0, settings.scene_config(), Palette::default());
    let mut surface = RecordingSurface::new(800.0, 600.0);

    for _ in 0..600 {
        surface.begin_frame();
        tick(&mut scene, &mut surface);
    }

    println!(
        "rendered {} frames; last frame emitted {} draw commands",
        scene.frame,
        surface.commands.len()
    );
    println!("serve the wasm build for the animated version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
