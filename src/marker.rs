use crate::constants::{MARKER_ID, MARKER_RADIUS_PX};
use crate::dom;
use crate::labels;
use chase_core::{RenderSink, Vector2};
use web_sys as web;

/// Render sink that moves the `#circle` element with a CSS transform.
pub struct MarkerSink {
    element: web::HtmlElement,
    radius: f32,
}

impl MarkerSink {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            element: dom::element_by_id(document, MARKER_ID)?,
            radius: MARKER_RADIUS_PX,
        })
    }
}

impl RenderSink for MarkerSink {
    fn render(&mut self, position: Vector2) {
        let transform = labels::marker_transform(position, self.radius);
        if let Err(e) = self.element.style().set_property("transform", &transform) {
            log::error!("marker transform error: {:?}", e);
        }
    }
}
