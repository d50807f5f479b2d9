use crate::scheduler::{Scheduler, Timer};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Runs an action once the trigger has been quiet for `delay`.
///
/// Each trigger cancels the pending run and starts the wait over, so at most
/// one run is ever pending.
pub struct Debouncer {
    scheduler: Rc<dyn Scheduler>,
    delay: Duration,
    action: Rc<RefCell<dyn FnMut()>>,
    pending: Rc<RefCell<Option<Timer>>>,
}

impl Debouncer {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        delay: Duration,
        action: impl FnMut() + 'static,
    ) -> Self {
        Self {
            scheduler,
            delay,
            action: Rc::new(RefCell::new(action)),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn trigger(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);

        let action = self.action.clone();
        let pending = self.pending.clone();
        let timer = Timer::timeout(
            &self.scheduler,
            self.delay,
            Box::new(move || {
                let fired = pending.borrow_mut().take();
                drop(fired);
                (&mut *action.borrow_mut())();
            }),
        );
        match timer {
            Ok(timer) => *self.pending.borrow_mut() = Some(timer),
            Err(e) => log::warn!("[waveform] debounce timer failed: {}", e),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}
