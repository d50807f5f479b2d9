//! Hero waveform: a 2D canvas redrawn every animation frame while on screen.

use crate::constants::WAVEFORM_CANVAS_ID;
use crate::dom;
use crate::frame::AnimationLoop;
use anyhow::anyhow;
use glam::DVec2;
use stage_core::{
    Debouncer, Environment, Scheduler, StrokeStyle, Surface, SurfaceSize, WaveSet,
    WaveformRenderer, RESIZE_DEBOUNCE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_display_size(&mut self, width: f64, height: f64) {
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", width));
        _ = style.set_property("height", &format!("{}px", height));
    }

    fn reset_transform(&mut self) {
        _ = self.ctx.reset_transform();
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        _ = self.ctx.scale(sx, sy);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_path(&mut self, points: &[DVec2], style: &StrokeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&style.color.css());
        self.ctx.set_line_width(style.width);
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }
}

/// Running waveform. Held for the page lifetime so teardown can stop it.
pub struct Waveform {
    animation: AnimationLoop,
    observer: web::IntersectionObserver,
    resize: Rc<Debouncer>,
}

impl Waveform {
    pub fn stop(&self) {
        self.animation.stop();
        self.resize.cancel();
    }

    pub fn resume(&self) {
        self.animation.resume();
    }
}

impl Drop for Waveform {
    fn drop(&mut self) {
        self.animation.stop();
        self.observer.disconnect();
    }
}

fn measure(window: &web::Window, parent: &web::Element) -> SurfaceSize {
    let rect = parent.get_bounding_client_rect();
    SurfaceSize::new(rect.width(), rect.height(), window.device_pixel_ratio())
}

/// Start the hero animation. Returns `Ok(None)` when the page has no canvas
/// or the user prefers reduced motion.
pub fn start(
    window: &web::Window,
    document: &web::Document,
    env: &Environment,
    scheduler: Rc<dyn Scheduler>,
) -> anyhow::Result<Option<Waveform>> {
    if !env.animations_enabled() {
        log::info!("[waveform] reduced motion requested; not animating");
        return Ok(None);
    }
    let Some(canvas) = document
        .get_element_by_id(WAVEFORM_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::debug!("[waveform] no #{} on this page", WAVEFORM_CANVAS_ID);
        return Ok(None);
    };
    let Some(parent) = canvas.parent_element() else {
        log::debug!("[waveform] canvas is detached");
        return Ok(None);
    };
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))?;

    let renderer = Rc::new(RefCell::new(WaveformRenderer::new(
        CanvasSurface { canvas, ctx },
        WaveSet::default(),
        measure(window, &parent),
    )));

    // Freeze the animation while the hero is scrolled out of view
    let r = renderer.clone();
    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    r.borrow_mut().set_visible(entry.is_intersecting());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer = web::IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("{:?}", e))?;
    observer.observe(&parent);
    on_intersect.forget();

    let r = renderer.clone();
    let w = window.clone();
    let resize = Rc::new(Debouncer::new(scheduler, RESIZE_DEBOUNCE, move || {
        r.borrow_mut().resize(measure(&w, &parent));
    }));
    let d = resize.clone();
    dom::add_listener(window, "resize", move |_| d.trigger());

    let r = renderer.clone();
    let animation = AnimationLoop::start(window.clone(), move || {
        r.borrow_mut().frame();
    })?;
    log::info!("[waveform] started with {} waves", renderer.borrow().waves().len());

    Ok(Some(Waveform {
        animation,
        observer,
        resize,
    }))
}
