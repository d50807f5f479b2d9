// DOM contract shared by the player widgets and the hero waveform.

// Player widgets
pub const PLAYER_SELECTOR: &str = ".audio-player";
pub const PLAY_BUTTON_SELECTOR: &str = ".player-play";
pub const PROGRESS_BAR_SELECTOR: &str = ".player-progress";
pub const PROGRESS_FILL_SELECTOR: &str = ".player-progress-fill";
pub const TIME_LABEL_SELECTOR: &str = ".player-time";
pub const TRACK_ATTRIBUTE: &str = "data-track";
pub const PLAYING_CLASS: &str = "playing";

// Waveform
pub const WAVEFORM_CANVAS_ID: &str = "waveform-canvas";

// Environment queries, read once at startup
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
