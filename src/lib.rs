#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use stage_core::{PlaybackCoordinator, Scheduler, TrackRegistry};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod env;
mod frame;
mod players;
mod scheduler;
mod waveform;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stage-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    let environment = env::read(&window);
    let scheduler: Rc<dyn Scheduler> = Rc::new(scheduler::WindowScheduler::new(window.clone()));

    // One coordinator for every widget on the page
    let coordinator = Rc::new(PlaybackCoordinator::new());
    let registry = TrackRegistry::default();
    let players = players::mount_all(&document, &registry, &coordinator, &scheduler)?;
    log::info!("[player] mounted {} players", players.len());

    let waveform = match waveform::start(&window, &document, &environment, scheduler) {
        Ok(w) => w,
        Err(e) => {
            log::error!("[waveform] init error: {:?}", e);
            None
        }
    };

    wire_lifecycle(&window, coordinator, waveform.map(Rc::new));
    Ok(())
}

// Pause playback and stop drawing when the page goes away; a page restored
// from the back/forward cache picks the animation back up.
fn wire_lifecycle(
    window: &web::Window,
    coordinator: Rc<PlaybackCoordinator>,
    waveform: Option<Rc<waveform::Waveform>>,
) {
    let hidden = waveform.clone();
    dom::add_listener(window, "pagehide", move |_| {
        coordinator.pause_all();
        if let Some(w) = &hidden {
            w.stop();
        }
        log::info!("[lifecycle] page hidden; playback paused");
    });
    if let Some(w) = waveform {
        dom::add_listener(window, "pageshow", move |_| w.resume());
    }
}
