use crate::marker::MarkerSink;
use chase_core::Animator;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: Rc<RefCell<Animator>>,
    pub marker: MarkerSink,
}

impl FrameContext {
    pub fn frame(&mut self) -> ControlFlow<()> {
        self.animator.borrow_mut().frame(&mut self.marker)
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns a loop started with [`start_loop`].
///
/// The frame callback only holds a weak reference to itself; [`LoopHandle::stop`]
/// releases the callback and the context it captured.
pub struct LoopHandle {
    animator: Rc<RefCell<Animator>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: FrameCallback,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.animator.borrow_mut().stop();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // no frame is pending, so the callback can't be running
        drop(self.tick.borrow_mut().take());
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(mut frame_ctx: FrameContext) -> LoopHandle {
    let handle = LoopHandle {
        animator: frame_ctx.animator.clone(),
        pending: Rc::new(Cell::new(None)),
        tick: Rc::new(RefCell::new(None)),
    };
    let tick_weak = Rc::downgrade(&handle.tick);
    let pending = handle.pending.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending.set(None);
        if frame_ctx.frame().is_break() {
            return;
        }
        // handle dropped: nothing left to reschedule
        let Some(tick) = tick_weak.upgrade() else {
            return;
        };
        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = handle.tick.borrow().as_ref() {
        handle.pending.set(request_frame(cb));
    }
    handle
}
