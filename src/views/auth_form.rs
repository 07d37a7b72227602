// ============================================================================
// AUTH FORM VIEW - Login / registro
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{alert, on_click, on_input_value, on_submit, ElementBuilder};
use crate::viewmodels::AuthOutcome;

/// Renderizar formulario de acceso
pub fn render_auth_form(ctx: &AppContext) -> Result<Element, JsValue> {
    let form_state = ctx.auth.form();
    let mode = form_state.get_mode();

    let title = ElementBuilder::new("h2")?.text(mode.title()).build();

    let email = ElementBuilder::new("input")?
        .class("auth-input")
        .attr("type", "email")?
        .attr("placeholder", "Email")?
        .attr("value", &form_state.email.borrow())?
        .flag("required", true)?
        .build();
    {
        let form_state = form_state.clone();
        on_input_value(&email, move |value| form_state.set_email(value))?;
    }

    let password = ElementBuilder::new("input")?
        .class("auth-input")
        .attr("type", "password")?
        .attr("placeholder", "Contraseña")?
        .attr("value", &form_state.password.borrow())?
        .flag("required", true)?
        .build();
    {
        let form_state = form_state.clone();
        on_input_value(&password, move |value| form_state.set_password(value))?;
    }

    let submit = ElementBuilder::new("button")?
        .class("auth-btn")
        .attr("type", "submit")?
        .flag("disabled", form_state.get_submitting())?
        .text(mode.submit_label())
        .build();

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .children([email, password, submit])?
        .build();

    {
        let auth = ctx.auth.clone();
        let ctx = ctx.clone();
        on_submit(&form, move || {
            if auth.form().get_submitting() {
                return;
            }
            let auth = auth.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                match auth.submit_form().await {
                    Ok(AuthOutcome::LoggedIn) => {
                        ctx.load_current_page();
                        alert(AuthOutcome::LoggedIn.message());
                    }
                    Ok(outcome) => {
                        crate::rerender_app();
                        alert(outcome.message());
                    }
                    Err(e) => {
                        crate::rerender_app();
                        alert(&e.user_message());
                    }
                }
            });
        })?;
    }

    let switch = ElementBuilder::new("button")?
        .class("auth-switch")
        .attr("type", "button")?
        .text(mode.switch_label())
        .build();
    {
        let auth = ctx.auth.clone();
        on_click(&switch, move |_| {
            auth.toggle_mode();
            crate::rerender_app();
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("auth-box")
        .children([title, form, switch])?
        .build())
}
