use crate::constants::*;
use crate::dom;
use stage_core::{Error, PlaybackCoordinator, Player, PlayerView, Scheduler, TrackRegistry};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The elements of one `.audio-player` widget.
struct PlayerWidget {
    container: web::Element,
    button: web::Element,
    bar: web::Element,
    fill: web::HtmlElement,
    label: web::Element,
}

impl PlayerWidget {
    fn from_container(container: web::Element) -> stage_core::Result<Self> {
        let button = dom::required_child(&container, PLAY_BUTTON_SELECTOR)?;
        let bar = dom::required_child(&container, PROGRESS_BAR_SELECTOR)?;
        let fill = dom::required_child(&container, PROGRESS_FILL_SELECTOR)?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| Error::MissingElement(PROGRESS_FILL_SELECTOR))?;
        let label = dom::required_child(&container, TIME_LABEL_SELECTOR)?;
        Ok(Self {
            container,
            button,
            bar,
            fill,
            label,
        })
    }
}

struct DomPlayerView {
    container: web::Element,
    button: web::Element,
    fill: web::HtmlElement,
    label: web::Element,
}

impl PlayerView for DomPlayerView {
    fn show_playing(&self, playing: bool) {
        for el in [&self.button, &self.container] {
            let classes = el.class_list();
            _ = if playing {
                classes.add_1(PLAYING_CLASS)
            } else {
                classes.remove_1(PLAYING_CLASS)
            };
        }
    }

    fn show_progress(&self, fraction: f64, remaining: &str) {
        _ = self
            .fill
            .style()
            .set_property("width", &format!("{}%", fraction * 100.0));
        self.label.set_text_content(Some(remaining));
    }
}

/// Build a [`Player`] for every widget on the page. Widgets missing a
/// required element are skipped with a warning.
pub fn mount_all(
    document: &web::Document,
    registry: &TrackRegistry,
    coordinator: &Rc<PlaybackCoordinator>,
    scheduler: &Rc<dyn Scheduler>,
) -> anyhow::Result<Vec<Player>> {
    let mut players = Vec::new();
    for container in dom::query_all(document, PLAYER_SELECTOR)? {
        match mount(container, registry, coordinator, scheduler) {
            Ok(player) => players.push(player),
            Err(e) => log::warn!("[player] skipping widget: {}", e),
        }
    }
    Ok(players)
}

fn mount(
    container: web::Element,
    registry: &TrackRegistry,
    coordinator: &Rc<PlaybackCoordinator>,
    scheduler: &Rc<dyn Scheduler>,
) -> stage_core::Result<Player> {
    let PlayerWidget {
        container,
        button,
        bar,
        fill,
        label,
    } = PlayerWidget::from_container(container)?;

    let track_id = container.get_attribute(TRACK_ATTRIBUTE).unwrap_or_default();
    if !registry.contains(&track_id) {
        log::warn!("[player] unknown track '{}'; using default duration", track_id);
    }
    let player = Player::new(
        registry.track(&track_id),
        coordinator.clone(),
        scheduler.clone(),
        Box::new(DomPlayerView {
            container,
            button: button.clone(),
            fill,
            label,
        }),
    );

    let p = player.clone();
    dom::add_listener(&button, "click", move |_| p.toggle());

    let p = player.clone();
    let bar_rect = bar.clone();
    dom::add_listener(&bar, "click", move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            let rect = bar_rect.get_bounding_client_rect();
            p.seek_from_pointer(mouse.client_x() as f64, rect.left(), rect.width());
        }
    });

    Ok(player)
}
