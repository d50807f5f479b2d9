//! Simulated playback for one player widget.
//!
//! There is no media backend: while playing, an interval timer advances the
//! elapsed time by [`TICK_INTERVAL`] and the view is refreshed. A player
//! starts paused. Running players are tracked by the shared
//! [`PlaybackCoordinator`] so that starting one pauses any other.

use crate::constants::TICK_INTERVAL;
use crate::coordinator::{Pausable, PlaybackCoordinator, PlayerId};
use crate::scheduler::{Scheduler, Timer};
use crate::tracks::Track;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Visual side effects of a player.
pub trait PlayerView {
    /// Add or remove the "playing" presentation.
    fn show_playing(&self, playing: bool);
    /// `fraction` is elapsed / duration in \[0, 1\]; `remaining` is formatted `M:SS`.
    fn show_progress(&self, fraction: f64, remaining: &str);
}

/// Format seconds as `M:SS`. Fractions are truncated; there is no hour component.
pub fn format_time(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Map a pointer x coordinate over a bar starting at `left` and `width` wide to a
/// ratio in \[0, 1\]. Degenerate bars map to 0.
pub fn pointer_ratio(client_x: f64, left: f64, width: f64) -> f64 {
    if width.is_nan() || width <= 0.0 {
        return 0.0;
    }
    clamp_ratio((client_x - left) / width)
}

#[inline]
fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

// Running is represented by holding the tick timer, so the timer exists iff
// the player is playing.
enum Transport {
    Paused,
    Playing(Timer),
}

struct PlaybackState {
    elapsed: Duration,
    transport: Transport,
}

struct PlayerInner {
    id: PlayerId,
    track: Track,
    coordinator: Rc<PlaybackCoordinator>,
    scheduler: Rc<dyn Scheduler>,
    view: Box<dyn PlayerView>,
    state: RefCell<PlaybackState>,
}

/// Cheap cloneable handle; clones refer to the same player.
#[derive(Clone)]
pub struct Player {
    inner: Rc<PlayerInner>,
}

impl Player {
    pub fn new(
        track: Track,
        coordinator: Rc<PlaybackCoordinator>,
        scheduler: Rc<dyn Scheduler>,
        view: Box<dyn PlayerView>,
    ) -> Self {
        let id = coordinator.register();
        view.show_progress(0.0, &format_time(track.duration));
        Self {
            inner: Rc::new(PlayerInner {
                id,
                track,
                coordinator,
                scheduler,
                view,
                state: RefCell::new(PlaybackState {
                    elapsed: Duration::ZERO,
                    transport: Transport::Paused,
                }),
            }),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.inner.id
    }

    pub fn track(&self) -> &Track {
        &self.inner.track
    }

    pub fn duration(&self) -> Duration {
        self.inner.track.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.inner.state.borrow().elapsed
    }

    pub fn remaining(&self) -> Duration {
        self.duration().saturating_sub(self.elapsed())
    }

    pub fn progress(&self) -> f64 {
        self.inner.progress()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    pub fn play(&self) {
        self.inner.play();
    }

    pub fn pause(&self) {
        self.inner.pause();
    }

    pub fn toggle(&self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to `ratio` of the track. Out-of-range ratios clamp to the ends.
    /// Does not start or stop playback.
    pub fn seek(&self, ratio: f64) {
        let ratio = clamp_ratio(ratio);
        self.inner.state.borrow_mut().elapsed = self.duration().mul_f64(ratio);
        self.inner.render_progress();
    }

    /// Seek from a click on a progress bar.
    pub fn seek_from_pointer(&self, client_x: f64, left: f64, width: f64) {
        self.seek(pointer_ratio(client_x, left, width));
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.inner.id)
            .field("track", &self.inner.track.id)
            .field("elapsed", &self.elapsed())
            .field("playing", &self.is_playing())
            .finish()
    }
}

impl PlayerInner {
    fn is_playing(&self) -> bool {
        matches!(self.state.borrow().transport, Transport::Playing(_))
    }

    fn progress(&self) -> f64 {
        let elapsed = self.state.borrow().elapsed.as_secs_f64();
        (elapsed / self.track.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn play(self: &Rc<Self>) {
        if self.is_playing() {
            return;
        }
        let weak = Rc::downgrade(self);
        let this: Weak<dyn Pausable> = weak.clone();
        self.coordinator.activate(self.id, this);

        let tick = Timer::interval(
            &self.scheduler,
            TICK_INTERVAL,
            Box::new(move || {
                if let Some(player) = weak.upgrade() {
                    player.tick();
                }
            }),
        );
        match tick {
            Ok(timer) => {
                self.state.borrow_mut().transport = Transport::Playing(timer);
                self.view.show_playing(true);
                log::debug!("[player] {:?} playing {}", self.id, self.track.id);
            }
            Err(e) => {
                log::error!("[player] could not start {}: {}", self.track.id, e);
                self.coordinator.deactivate(self.id);
            }
        }
    }

    fn pause(&self) {
        let tick = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut state.transport, Transport::Paused) {
                Transport::Paused => return,
                Transport::Playing(timer) => {
                    if state.elapsed >= self.track.duration {
                        state.elapsed = Duration::ZERO;
                    }
                    timer
                }
            }
        };
        drop(tick);
        self.view.show_playing(false);
        self.coordinator.deactivate(self.id);
        log::debug!("[player] {:?} paused", self.id);
    }

    fn tick(&self) {
        let finished = {
            let mut state = self.state.borrow_mut();
            state.elapsed += TICK_INTERVAL;
            if state.elapsed >= self.track.duration {
                state.elapsed = Duration::ZERO;
                true
            } else {
                false
            }
        };
        if finished {
            log::info!("[player] {} reached the end", self.track.id);
            self.pause();
            return;
        }
        self.render_progress();
    }

    fn render_progress(&self) {
        let remaining = {
            let state = self.state.borrow();
            self.track.duration.saturating_sub(state.elapsed)
        };
        self.view.show_progress(self.progress(), &format_time(remaining));
    }
}

impl Pausable for PlayerInner {
    fn pause(&self) {
        PlayerInner::pause(self);
    }
}
