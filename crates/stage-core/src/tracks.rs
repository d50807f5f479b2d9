use crate::constants::{DEFAULT_TRACKS, DEFAULT_TRACK_DURATION};
use fnv::FnvHashMap;
use std::time::Duration;

/// A track as seen by a player widget: an id and its nominal duration.
///
/// `duration` is always strictly positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub duration: Duration,
}

#[derive(Clone, Debug)]
pub struct TrackRegistry {
    durations: FnvHashMap<String, Duration>,
}

impl Default for TrackRegistry {
    fn default() -> Self {
        Self::with_tracks(
            DEFAULT_TRACKS
                .iter()
                .map(|(id, secs)| (*id, Duration::from_secs(*secs))),
        )
    }
}

impl TrackRegistry {
    /// Build a registry from a custom table. Zero durations fall back to the default.
    pub fn with_tracks<I, S>(tracks: I) -> Self
    where
        I: IntoIterator<Item = (S, Duration)>,
        S: Into<String>,
    {
        let durations = tracks
            .into_iter()
            .map(|(id, duration)| {
                let duration = if duration.is_zero() {
                    DEFAULT_TRACK_DURATION
                } else {
                    duration
                };
                (id.into(), duration)
            })
            .collect();
        Self { durations }
    }

    pub fn duration_of(&self, id: &str) -> Duration {
        self.durations
            .get(id)
            .copied()
            .unwrap_or(DEFAULT_TRACK_DURATION)
    }

    pub fn track(&self, id: &str) -> Track {
        Track {
            id: id.to_string(),
            duration: self.duration_of(id),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.durations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }
}
