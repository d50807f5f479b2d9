use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that re-schedules itself every frame until
/// stopped. The callback lives as long as the page.
pub struct AnimationLoop {
    window: web::Window,
    tick: FrameCallback,
    request_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn start(window: web::Window, mut frame: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let tick: FrameCallback = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let request_clone = request_id.clone();
        let running_clone = running.clone();
        let window_tick = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running_clone.get() {
                return;
            }
            frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                request_clone.set(
                    window_tick
                        .request_animation_frame(cb.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }) as Box<dyn FnMut()>));

        let animation = Self {
            window,
            tick,
            request_id,
            running,
        };
        animation.request()?;
        Ok(animation)
    }

    fn request(&self) -> anyhow::Result<()> {
        let tick = self.tick.borrow();
        let cb = tick
            .as_ref()
            .ok_or_else(|| anyhow!("animation callback missing"))?;
        let id = self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("{:?}", e))?;
        self.request_id.set(Some(id));
        Ok(())
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.request_id.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }

    /// Restart a stopped loop; no-op while running.
    pub fn resume(&self) {
        if self.running.replace(true) {
            return;
        }
        if let Err(e) = self.request() {
            log::error!("[waveform] could not resume animation: {:?}", e);
            self.running.set(false);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}
