//! Enforces that at most one player is running at a time.

use std::cell::{Cell, RefCell};
use std::rc::Weak;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

/// The only capability the coordinator needs from a player.
pub trait Pausable {
    fn pause(&self);
}

struct ActivePlayer {
    id: PlayerId,
    player: Weak<dyn Pausable>,
}

#[derive(Default)]
pub struct PlaybackCoordinator {
    active: RefCell<Option<ActivePlayer>>,
    next_id: Cell<u32>,
}

impl PlaybackCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out an id unique within this coordinator.
    pub fn register(&self) -> PlayerId {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        PlayerId(id)
    }

    pub fn active(&self) -> Option<PlayerId> {
        self.active.borrow().as_ref().map(|a| a.id)
    }

    /// Record `id` as the active player, pausing whichever other player held
    /// the slot first. The previous player's pause has fully completed by the
    /// time the new reference is stored.
    pub fn activate(&self, id: PlayerId, player: Weak<dyn Pausable>) {
        let previous = self.active.borrow_mut().take();
        if let Some(previous) = previous {
            if previous.id != id {
                if let Some(p) = previous.player.upgrade() {
                    log::debug!("[player] {:?} takes over from {:?}", id, previous.id);
                    p.pause();
                }
            }
        }
        *self.active.borrow_mut() = Some(ActivePlayer { id, player });
    }

    /// Clear the active slot, but only if it still belongs to `id`.
    pub fn deactivate(&self, id: PlayerId) {
        let mut active = self.active.borrow_mut();
        if active.as_ref().is_some_and(|a| a.id == id) {
            *active = None;
        }
    }

    /// Pause whatever is playing (page teardown).
    pub fn pause_all(&self) {
        let previous = self.active.borrow_mut().take();
        if let Some(p) = previous.and_then(|a| a.player.upgrade()) {
            p.pause();
        }
    }
}
