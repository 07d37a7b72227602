// ============================================================================
// VIEWS - Funciones que construyen DOM a partir del estado
// ============================================================================

pub mod auth_form;
pub mod deal_card;
pub mod deals_page;
pub mod toast;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::ElementBuilder;

pub use auth_form::render_auth_form;
pub use deals_page::render_deals_page;
pub use toast::render_toast;

/// Árbol completo: toast + formulario de acceso o listado
pub fn render_app(ctx: &AppContext) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("app-container").build();

    if let Some(message) = ctx.state.notification.current() {
        let toast = render_toast(&message)?;
        container.append_child(&toast)?;
    }

    let body = if ctx.state.is_authenticated() {
        render_deals_page(ctx)?
    } else {
        render_auth_form(ctx)?
    };
    container.append_child(&body)?;

    Ok(container)
}
