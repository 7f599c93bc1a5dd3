#![cfg(target_arch = "wasm32")]
use chase_core::{Animator, ControlPanel, MotionConfig, MotionModel};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod labels;
mod marker;

thread_local! {
    static RUNNING_LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chase-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the animation loop; the marker stays where it is.
#[wasm_bindgen]
pub fn stop() {
    RUNNING_LOOP.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let marker = marker::MarkerSink::from_document(&document)?;
    let select: web::HtmlSelectElement =
        dom::element_by_id(&document, constants::MODE_SELECT_ID)?;

    // The page may preselect a model; anything unknown falls back to the default
    let model = select.value().parse::<MotionModel>().unwrap_or_else(|e| {
        log::warn!("[mode] {}, using {}", e, MotionModel::default());
        MotionModel::default()
    });

    let origin = dom::viewport_center(&window);
    let animator = Rc::new(RefCell::new(Animator::new(
        origin,
        MotionConfig::default(),
        model,
    )));
    log::info!(
        "[init] model={} origin=({:.1},{:.1})",
        model,
        origin.x,
        origin.y
    );

    let mut panel = controls::DomControlPanel::new(document.clone());
    panel.apply_visibility(model.controls());

    events::sync_sliders(&document, &animator);
    events::wire_sliders(&document, &animator);
    events::wire_mode_select(select, animator.clone(), panel);
    events::wire_pointermove(animator.clone());

    let handle = frame::start_loop(frame::FrameContext { animator, marker });
    RUNNING_LOOP.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}
