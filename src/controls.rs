use crate::dom;
use crate::labels;
use chase_core::{ControlPanel, Parameter};
use web_sys as web;

/// Shows and hides the `<name>-slider` containers.
pub struct DomControlPanel {
    document: web::Document,
}

impl DomControlPanel {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl ControlPanel for DomControlPanel {
    fn set_visible(&mut self, parameter: Parameter, visible: bool) {
        let id = labels::container_id(parameter.name());
        match self.document.get_element_by_id(&id) {
            Some(el) => dom::set_hidden(&el, !visible),
            None => log::warn!("[controls] missing #{}", id),
        }
    }
}
