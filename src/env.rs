use crate::constants::{COARSE_POINTER_QUERY, REDUCED_MOTION_QUERY};
use stage_core::Environment;
use web_sys as web;

fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn read(window: &web::Window) -> Environment {
    let env = Environment {
        reduced_motion: media_matches(window, REDUCED_MOTION_QUERY),
        coarse_pointer: media_matches(window, COARSE_POINTER_QUERY),
    };
    log::info!(
        "[env] reduced_motion={} coarse_pointer={}",
        env.reduced_motion,
        env.coarse_pointer
    );
    env
}
