use crate::constants::WAVE_CENTER_RATIO;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(201, 168, 76, 0.12)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f64,
}

/// One periodic function drawn as a single path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub amplitude: f64, // px
    pub frequency: f64, // radians per px
    pub speed: f64,     // radians per frame
    pub phase: f64,     // radians
    pub y_offset: f64,  // px from the shared center line
    pub stroke: StrokeStyle,
}

impl Wave {
    pub fn center_line(&self, height: f64) -> f64 {
        height * WAVE_CENTER_RATIO + self.y_offset
    }

    /// Vertical position of the wave at logical pixel `x` on frame `time`.
    #[inline]
    pub fn sample(&self, x: f64, height: f64, time: u64) -> f64 {
        let angle = x * self.frequency + self.phase + time as f64 * self.speed;
        self.center_line(height) + self.amplitude * angle.sin()
    }
}

const GOLD: (u8, u8, u8) = (201, 168, 76);
const MIST: (u8, u8, u8) = (240, 240, 240);

const fn wave(
    amplitude: f64,
    frequency: f64,
    speed: f64,
    phase: f64,
    y_offset: f64,
    rgb: (u8, u8, u8),
    alpha: f32,
    width: f64,
) -> Wave {
    Wave {
        amplitude,
        frequency,
        speed,
        phase,
        y_offset,
        stroke: StrokeStyle {
            color: Rgba::new(rgb.0, rgb.1, rgb.2, alpha),
            width,
        },
    }
}

/// Back-to-front layers of the hero animation.
pub const DEFAULT_WAVES: [Wave; 4] = [
    wave(50.0, 0.008, 0.015, 0.0, 0.0, GOLD, 0.12, 1.5),
    wave(35.0, 0.012, 0.02, 2.0, 20.0, GOLD, 0.06, 1.0),
    wave(65.0, 0.006, 0.008, 4.0, -30.0, MIST, 0.04, 1.0),
    wave(25.0, 0.015, 0.025, 1.0, 40.0, MIST, 0.03, 0.8),
];

/// Ordered set of waves, drawn first to last.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveSet {
    waves: SmallVec<[Wave; 4]>,
}

impl Default for WaveSet {
    fn default() -> Self {
        Self::new(DEFAULT_WAVES)
    }
}

impl WaveSet {
    pub fn new(waves: impl IntoIterator<Item = Wave>) -> Self {
        Self {
            waves: waves.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wave> {
        self.waves.iter()
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}
