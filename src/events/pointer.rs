use chase_core::{Animator, Message, Vector2};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every pointer move becomes the marker's new target, in viewport CSS pixels.
pub fn wire_pointermove(animator: Rc<RefCell<Animator>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let target = Vector2::new(ev.client_x() as f32, ev.client_y() as f32);
        animator.borrow_mut().apply(Message::SetTarget(target));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
