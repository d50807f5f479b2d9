//! Frame-driven waveform animation over an abstract 2D surface.

use crate::waves::{StrokeStyle, WaveSet};
use glam::DVec2;

/// Logical (CSS pixel) size of the drawing surface plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl SurfaceSize {
    /// Negative or non-finite dimensions become 0; a missing ratio becomes 1.
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let sane = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            width: sane(width),
            height: sane(height),
            pixel_ratio,
        }
    }

    pub fn backing_width(&self) -> u32 {
        (self.width * self.pixel_ratio) as u32
    }

    pub fn backing_height(&self) -> u32 {
        (self.height * self.pixel_ratio) as u32
    }
}

/// Minimal 2D drawing API, shaped after the canvas 2D context.
pub trait Surface {
    /// Device-pixel resolution of the backing store.
    fn set_backing_size(&mut self, width: u32, height: u32);
    /// Size the surface occupies on the page, in logical pixels.
    fn set_display_size(&mut self, width: f64, height: f64);
    fn reset_transform(&mut self);
    /// Multiplies onto the current transform.
    fn scale(&mut self, sx: f64, sy: f64);
    fn clear(&mut self, width: f64, height: f64);
    fn stroke_path(&mut self, points: &[DVec2], style: &StrokeStyle);
}

pub struct WaveformRenderer<S: Surface> {
    surface: S,
    waves: WaveSet,
    size: SurfaceSize,
    time: u64,
    visible: bool,
    points: Vec<DVec2>,
}

impl<S: Surface> WaveformRenderer<S> {
    /// Takes ownership of the surface and sizes it. Starts visible at time 0.
    pub fn new(surface: S, waves: WaveSet, size: SurfaceSize) -> Self {
        let mut renderer = Self {
            surface,
            waves,
            size,
            time: 0,
            visible: true,
            points: Vec::new(),
        };
        renderer.resize(size);
        renderer
    }

    /// Re-derive the backing resolution and transform for a new size.
    ///
    /// The transform is reset before scaling, so repeated resizes never
    /// compound the device pixel ratio.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.surface
            .set_backing_size(size.backing_width(), size.backing_height());
        self.surface.set_display_size(size.width, size.height);
        self.surface.reset_transform();
        self.surface.scale(size.pixel_ratio, size.pixel_ratio);
        log::debug!(
            "[waveform] resized to {:.0}x{:.0} @{}x",
            size.width,
            size.height,
            size.pixel_ratio
        );
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn waves(&self) -> &WaveSet {
        &self.waves
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Run one animation frame. Hidden frames draw nothing and leave the clock
    /// untouched. Returns whether anything was drawn.
    pub fn frame(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        let SurfaceSize { width, height, .. } = self.size;
        self.surface.clear(width, height);
        let columns = width.floor() as usize;
        for wave in self.waves.iter() {
            self.points.clear();
            self.points.extend((0..=columns).map(|x| {
                let x = x as f64;
                DVec2::new(x, wave.sample(x, height, self.time))
            }));
            self.surface.stroke_path(&self.points, &wave.stroke);
        }
        self.time = self.time.wrapping_add(1);
        true
    }
}
