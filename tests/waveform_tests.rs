// Host-side tests for the waveform renderer against a recording surface that
// models the canvas transform stack.

use glam::{DAffine2, DVec2};
use stage_core::*;

struct Stroke {
    device_points: Vec<DVec2>,
    style: StrokeStyle,
}

#[derive(Default)]
struct RecordingSurface {
    backing: (u32, u32),
    display: (f64, f64),
    transform: DAffine2,
    clears: usize,
    strokes: Vec<Stroke>,
}

impl Surface for RecordingSurface {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
    }

    fn set_display_size(&mut self, width: f64, height: f64) {
        self.display = (width, height);
    }

    fn reset_transform(&mut self) {
        self.transform = DAffine2::IDENTITY;
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform * DAffine2::from_scale(DVec2::new(sx, sy));
    }

    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }

    fn stroke_path(&mut self, points: &[DVec2], style: &StrokeStyle) {
        self.strokes.push(Stroke {
            device_points: points
                .iter()
                .map(|p| self.transform.transform_point2(*p))
                .collect(),
            style: *style,
        });
    }
}

fn renderer(width: f64, height: f64, ratio: f64) -> WaveformRenderer<RecordingSurface> {
    WaveformRenderer::new(
        RecordingSurface::default(),
        WaveSet::default(),
        SurfaceSize::new(width, height, ratio),
    )
}

#[test]
fn new_renderer_sizes_backing_store_for_device_pixels() {
    let r = renderer(800.0, 400.0, 2.0);
    let s = r.surface();
    assert_eq!(s.backing, (1600, 800));
    assert_eq!(s.display, (800.0, 400.0));
    assert_eq!(s.transform, DAffine2::from_scale(DVec2::splat(2.0)));
    assert_eq!(r.time(), 0);
    assert!(r.is_visible());
}

#[test]
fn time_advances_once_per_drawn_frame() {
    let mut r = renderer(300.0, 200.0, 1.0);
    for _ in 0..3 {
        assert!(r.frame());
    }
    assert_eq!(r.time(), 3);
    assert_eq!(r.surface().clears, 3);
    assert_eq!(r.surface().strokes.len(), 3 * DEFAULT_WAVES.len());
}

#[test]
fn hidden_frames_freeze_and_resume_from_same_phase() {
    let mut r = renderer(300.0, 200.0, 1.0);
    for _ in 0..5 {
        r.frame();
    }
    let strokes_before = r.surface().strokes.len();

    r.set_visible(false);
    for _ in 0..10 {
        assert!(!r.frame());
    }
    assert_eq!(r.time(), 5);
    assert_eq!(r.surface().strokes.len(), strokes_before);

    r.set_visible(true);
    assert!(r.frame());
    assert_eq!(r.time(), 6);

    // the resumed frame is drawn with the frozen counter, not a reset one
    let resumed = &r.surface().strokes[strokes_before];
    let expected = DEFAULT_WAVES[0].sample(0.0, 200.0, 5);
    assert!((resumed.device_points[0].y - expected).abs() < 1e-9);
}

#[test]
fn samples_every_logical_pixel_column() {
    let mut r = renderer(300.5, 200.0, 1.0);
    r.frame();
    for stroke in &r.surface().strokes {
        assert_eq!(stroke.device_points.len(), 301);
        assert_eq!(stroke.device_points[0].x, 0.0);
        assert_eq!(stroke.device_points[300].x, 300.0);
    }
}

#[test]
fn waves_are_drawn_back_to_front_with_their_own_style() {
    let mut r = renderer(100.0, 100.0, 1.0);
    r.frame();
    let styles: Vec<StrokeStyle> = r.surface().strokes.iter().map(|s| s.style).collect();
    let expected: Vec<StrokeStyle> = DEFAULT_WAVES.iter().map(|w| w.stroke).collect();
    assert_eq!(styles, expected);
    assert_eq!(styles[0].color.css(), "rgba(201, 168, 76, 0.12)");
}

#[test]
fn wave_sample_follows_center_line_and_phase() {
    let wave = DEFAULT_WAVES[0];
    // phase 0 at x = 0, t = 0: sits on the center line
    assert!((wave.sample(0.0, 400.0, 0) - 220.0).abs() < 1e-9);

    let offset = DEFAULT_WAVES[2];
    assert!((offset.center_line(400.0) - 190.0).abs() < 1e-9);

    let x = 37.0;
    let t = 12;
    let angle = x * wave.frequency + wave.phase + t as f64 * wave.speed;
    let expected = 0.55 * 400.0 + wave.amplitude * angle.sin();
    assert!((wave.sample(x, 400.0, t) - expected).abs() < 1e-9);
}

#[test]
fn resize_recomputes_backing_resolution() {
    let mut r = renderer(800.0, 400.0, 1.0);
    r.resize(SurfaceSize::new(1024.0, 512.0, 1.5));
    let s = r.surface();
    assert_eq!(s.backing, (1536, 768));
    assert_eq!(s.display, (1024.0, 512.0));
    assert_eq!(r.size().width, 1024.0);
}

#[test]
fn consecutive_resizes_do_not_compound_scale() {
    let mut r = renderer(400.0, 300.0, 2.0);
    r.resize(SurfaceSize::new(400.0, 300.0, 2.0));
    r.resize(SurfaceSize::new(400.0, 300.0, 2.0));
    r.frame();

    let wave = DEFAULT_WAVES[0];
    let x = 10.0;
    let logical_y = wave.sample(x, 300.0, 0);
    let point = r.surface().strokes[0].device_points[10];
    assert!((point.x - x * 2.0).abs() < 0.5);
    assert!((point.y - logical_y * 2.0).abs() < 0.5);
}

#[test]
fn surface_size_sanitizes_inputs() {
    let size = SurfaceSize::new(f64::NAN, -3.0, 0.0);
    assert_eq!(size.width, 0.0);
    assert_eq!(size.height, 0.0);
    assert_eq!(size.pixel_ratio, 1.0);

    let size = SurfaceSize::new(333.3, 100.0, 1.25);
    assert_eq!(size.backing_width(), 416);
    assert_eq!(size.backing_height(), 125);
}

#[test]
fn custom_wave_sets_keep_their_order() {
    let waves = WaveSet::new([DEFAULT_WAVES[3], DEFAULT_WAVES[1]]);
    assert_eq!(waves.len(), 2);
    let mut r = WaveformRenderer::new(
        RecordingSurface::default(),
        waves,
        SurfaceSize::new(50.0, 50.0, 1.0),
    );
    r.frame();
    assert_eq!(r.surface().strokes[0].style, DEFAULT_WAVES[3].stroke);
    assert_eq!(r.surface().strokes[1].style, DEFAULT_WAVES[1].stroke);
}

#[test]
fn reduced_motion_disables_animation() {
    let env = Environment {
        reduced_motion: true,
        coarse_pointer: false,
    };
    assert!(!env.animations_enabled());
    assert!(Environment::default().animations_enabled());
}
