use std::time::Duration;

// Shared playback and animation tuning constants used by the web frontend.

// Playback simulation
pub const TICK_INTERVAL: Duration = Duration::from_millis(100); // one simulated tick
pub const DEFAULT_TRACK_DURATION: Duration = Duration::from_secs(180); // unknown track ids

// Nominal durations (seconds) for the tracks on the page
pub const DEFAULT_TRACKS: [(&str, u64); 6] = [
    ("track-01", 187),
    ("track-02", 224),
    ("track-03", 196),
    ("track-04", 210),
    ("track-05", 265),
    ("track-06", 198),
];

// Waveform layout
pub const WAVE_CENTER_RATIO: f64 = 0.55; // center line as a fraction of surface height
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150); // settle delay before re-measuring
