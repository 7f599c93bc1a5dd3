use crate::constants::HIDDEN_CLASS;
use chase_core::Vector2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong element type: {:?}", id, e))
}

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("failed to add {} listener: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn set_hidden(element: &web::Element, hidden: bool) {
    let cl = element.class_list();
    _ = if hidden {
        cl.add_1(HIDDEN_CLASS)
    } else {
        cl.remove_1(HIDDEN_CLASS)
    };
}

/// Centre of the layout viewport in CSS pixels.
pub fn viewport_center(window: &web::Window) -> Vector2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vector2::new(w as f32 / 2.0, h as f32 / 2.0)
}
