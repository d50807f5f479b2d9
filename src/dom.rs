use anyhow::anyhow;
use stage_core::{Error, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a listener for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// First descendant of `parent` matching `selector`, or a construction error.
pub fn required_child(parent: &web::Element, selector: &'static str) -> Result<web::Element> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or(Error::MissingElement(selector))
}

pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect())
}

/// Resolve once the document has finished parsing.
pub async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
