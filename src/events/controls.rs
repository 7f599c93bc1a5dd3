use crate::constants::SLIDER_CLASS;
use crate::controls::DomControlPanel;
use crate::dom;
use crate::labels;
use chase_core::{Animator, ControlPanel, Message, MotionModel, Parameter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A parameter slider together with the label showing its value.
struct Slider {
    input: web::HtmlInputElement,
    label: Option<web::Element>,
    parameter: Parameter,
}

/// Find every `.slider` input and resolve its parameter from the container id
/// two levels up (`<name>-slider`). Sliders that don't resolve are skipped.
fn find_sliders(document: &web::Document) -> Vec<Slider> {
    let collection = document.get_elements_by_class_name(SLIDER_CLASS);
    let mut sliders = Vec::with_capacity(collection.length() as usize);
    for i in 0..collection.length() {
        let Some(input) = collection
            .item(i)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            continue;
        };
        let Some(container) = input.parent_element().and_then(|p| p.parent_element()) else {
            log::warn!("[controls] slider without container");
            continue;
        };
        let id = container.id();
        match labels::variable_from_container_id(&id).parse::<Parameter>() {
            Ok(parameter) => sliders.push(Slider {
                input,
                label: container.first_element_child(),
                parameter,
            }),
            Err(e) => log::warn!("[controls] #{}: {}", id, e),
        }
    }
    sliders
}

fn apply_slider_value(slider: &Slider, animator: &RefCell<Animator>) {
    let raw = slider.input.value();
    if let Some(label) = &slider.label {
        let text = label.text_content().unwrap_or_default();
        label.set_text_content(Some(&labels::format_slider_label(&text, &raw)));
    }
    match slider.parameter.parse_value(&raw) {
        Ok(value) => {
            animator
                .borrow_mut()
                .apply(Message::SetParameter(slider.parameter, value));
        }
        Err(e) => log::warn!("[controls] {}", e),
    }
}

/// Push the sliders' initial values into the animator so page and config agree.
pub fn sync_sliders(document: &web::Document, animator: &RefCell<Animator>) {
    for slider in find_sliders(document) {
        apply_slider_value(&slider, animator);
    }
}

pub fn wire_sliders(document: &web::Document, animator: &Rc<RefCell<Animator>>) {
    for slider in find_sliders(document) {
        let animator = animator.clone();
        let input = slider.input.clone();
        dom::add_listener(&input, "input", move || {
            apply_slider_value(&slider, &animator);
        });
    }
}

pub fn wire_mode_select(
    select: web::HtmlSelectElement,
    animator: Rc<RefCell<Animator>>,
    mut panel: DomControlPanel,
) {
    let target = select.clone();
    dom::add_listener(&target, "change", move || {
        let name = select.value();
        let model = match name.parse::<MotionModel>() {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[mode] {}", e);
                return;
            }
        };
        let controls = animator.borrow_mut().apply(Message::SetModel(model));
        if let Some(controls) = controls {
            panel.apply_visibility(controls);
        }
    });
}
