use fnv::FnvHashMap;
use stage_core::{Callback, Error, Result, Scheduler, TimerId};
use std::cell::{Cell, RefCell};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy)]
enum Kind {
    Interval,
    Timeout,
}

struct Registered {
    handle: i32,
    kind: Kind,
    // kept alive until the timer is cancelled
    _closure: Closure<dyn FnMut()>,
}

/// [`Scheduler`] backed by `setInterval` / `setTimeout` on the window.
pub struct WindowScheduler {
    window: web::Window,
    next_id: Cell<u64>,
    timers: RefCell<FnvHashMap<TimerId, Registered>>,
}

impl WindowScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            next_id: Cell::new(0),
            timers: RefCell::new(FnvHashMap::default()),
        }
    }

    fn register(&self, kind: Kind, delay: Duration, callback: Callback) -> Result<TimerId> {
        let closure = Closure::wrap(callback);
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let function: &js_sys::Function = closure.as_ref().unchecked_ref();
        let handle = match kind {
            Kind::Interval => self
                .window
                .set_interval_with_callback_and_timeout_and_arguments_0(function, millis),
            Kind::Timeout => self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(function, millis),
        }
        .map_err(|e| Error::Schedule(format!("{:?}", e)))?;

        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.timers.borrow_mut().insert(
            id,
            Registered {
                handle,
                kind,
                _closure: closure,
            },
        );
        Ok(id)
    }
}

impl Scheduler for WindowScheduler {
    fn schedule_interval(&self, period: Duration, callback: Callback) -> Result<TimerId> {
        self.register(Kind::Interval, period, callback)
    }

    fn schedule_timeout(&self, delay: Duration, callback: Callback) -> Result<TimerId> {
        self.register(Kind::Timeout, delay, callback)
    }

    fn cancel(&self, id: TimerId) {
        let removed = self.timers.borrow_mut().remove(&id);
        if let Some(timer) = removed {
            match timer.kind {
                Kind::Interval => self.window.clear_interval_with_handle(timer.handle),
                Kind::Timeout => self.window.clear_timeout_with_handle(timer.handle),
            }
        }
    }
}
