// ============================================================================
// STEAM DEALS - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que construyen DOM (sin lógica)
// - ViewModels: lógica de UI
// - Services: SOLO comunicación API
// - State: Rc<RefCell> compartido
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

// Instancia única de App para los re-renders
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Steam Deals - Rust + WASM");

    let app = App::new()?;
    app.render()?;
    let context = app.context().clone();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Fuera del borrow de APP: activate() vuelve a renderizar
    if context.state.is_authenticated() {
        context.activate();
    }

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|cell| match cell.try_borrow() {
        Ok(app) => match app.as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        },
        Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, se omite"),
    });
}
