//! Timer scheduling behind a small trait so playback and resize logic can run
//! against the browser's timers or a hand-driven clock.

use crate::error::Result;
use std::cell::RefCell;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

pub type Callback = Box<dyn FnMut()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Single-threaded timer source.
///
/// Implementations must tolerate `cancel` being called from inside a running
/// callback (including the callback of the timer being cancelled) and for ids
/// that already fired.
pub trait Scheduler {
    fn schedule_interval(&self, period: Duration, callback: Callback) -> Result<TimerId>;
    fn schedule_timeout(&self, delay: Duration, callback: Callback) -> Result<TimerId>;
    fn cancel(&self, id: TimerId);
}

/// Owned handle to a scheduled timer. Dropping it cancels the timer.
pub struct Timer {
    id: TimerId,
    scheduler: Rc<dyn Scheduler>,
}

impl Timer {
    pub fn interval(
        scheduler: &Rc<dyn Scheduler>,
        period: Duration,
        callback: Callback,
    ) -> Result<Self> {
        let id = scheduler.schedule_interval(period, callback)?;
        Ok(Self {
            id,
            scheduler: scheduler.clone(),
        })
    }

    pub fn timeout(
        scheduler: &Rc<dyn Scheduler>,
        delay: Duration,
        callback: Callback,
    ) -> Result<Self> {
        let id = scheduler.schedule_timeout(delay, callback)?;
        Ok(Self {
            id,
            scheduler: scheduler.clone(),
        })
    }

    pub fn id(&self) -> TimerId {
        self.id
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.scheduler.cancel(self.id);
    }
}

impl std::fmt::Debug for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Timer").field(&self.id).finish()
    }
}

struct PendingTimer {
    due: Duration,
    repeat: Option<Duration>,
    // taken out while the callback runs
    callback: Option<Callback>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, PendingTimer>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Timers fire in due order (ties broken by creation order) and the clock
/// jumps to each due time before the callback runs, so a callback observes
/// the same `now()` the browser would have given it.
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of timers that are scheduled and not cancelled.
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.state.borrow().timers.contains_key(&id)
    }

    /// Move the clock forward, firing every timer that comes due. Returns the
    /// number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;
        loop {
            let next = {
                let state = self.state.borrow();
                state
                    .timers
                    .iter()
                    .filter(|(_, t)| t.due <= target && t.callback.is_some())
                    .min_by_key(|(id, t)| (t.due, **id))
                    .map(|(id, _)| *id)
            };
            let Some(id) = next else { break };

            let callback = {
                let mut state = self.state.borrow_mut();
                let due = state.timers.get(&id).map(|t| t.due);
                if let Some(due) = due {
                    state.now = due;
                }
                state.timers.get_mut(&id).and_then(|t| t.callback.take())
            };
            let Some(mut callback) = callback else { break };
            callback();
            fired += 1;

            // Dropping a callback can drop timers it owned, which re-enters
            // `cancel`, so release the borrow first.
            let finished = {
                let mut state = self.state.borrow_mut();
                match state.timers.entry(id) {
                    Entry::Occupied(mut slot) => match slot.get().repeat {
                        Some(period) => {
                            let timer = slot.get_mut();
                            timer.due += period;
                            timer.callback = Some(callback);
                            None
                        }
                        None => {
                            slot.remove();
                            Some(callback)
                        }
                    },
                    Entry::Vacant(_) => Some(callback),
                }
            };
            drop(finished);
        }
        self.state.borrow_mut().now = target;
        fired
    }

    fn insert(&self, delay: Duration, repeat: Option<Duration>, callback: Callback) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId(state.next_id);
        state.next_id += 1;
        let due = state.now + delay;
        state.timers.insert(
            id,
            PendingTimer {
                due,
                repeat,
                callback: Some(callback),
            },
        );
        id
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_interval(&self, period: Duration, callback: Callback) -> Result<TimerId> {
        // browsers clamp zero-length intervals too
        let period = period.max(Duration::from_millis(1));
        Ok(self.insert(period, Some(period), callback))
    }

    fn schedule_timeout(&self, delay: Duration, callback: Callback) -> Result<TimerId> {
        Ok(self.insert(delay, None, callback))
    }

    fn cancel(&self, id: TimerId) {
        let removed = self.state.borrow_mut().timers.remove(&id);
        drop(removed);
    }
}
