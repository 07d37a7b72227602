use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

/// Toast con el mensaje vigente
pub fn render_toast(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("toast").text(message).build())
}
