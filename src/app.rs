// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{get_element_by_id, replace_children, restore_listeners, take_listeners};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::scheduler::BrowserScheduler;
use crate::utils::storage::LocalStorage;
use crate::viewmodels::{AuthViewModel, DealsViewModel, Notifier};
use crate::views::render_app;

/// Estado + viewmodels cableados, compartido por todas las vistas
#[derive(Clone)]
pub struct AppContext {
    pub state: AppState,
    pub auth: AuthViewModel<ApiClient>,
    pub deals: DealsViewModel<ApiClient>,
}

impl AppContext {
    pub fn new(state: AppState, api: Rc<ApiClient>) -> Self {
        let notifier = Notifier::new(
            state.notification.clone(),
            Rc::new(BrowserScheduler),
            CONFIG.notification_ms,
            Rc::new(crate::rerender_app),
        );
        let deals = DealsViewModel::new(
            api.clone(),
            state.session.clone(),
            state.deals.clone(),
            notifier.clone(),
            CONFIG.page_size,
        );
        let auth = AuthViewModel::new(
            api,
            state.session.clone(),
            state.auth_form.clone(),
            deals.clone(),
            notifier,
        );
        Self { state, auth, deals }
    }

    /// Pide la página actual; pinta "Cargando..." mientras tanto
    pub fn load_current_page(&self) {
        let page = self.state.deals.get_current_page();
        let sequence = self.deals.start_fetch();
        crate::rerender_app();

        let deals = self.deals.clone();
        spawn_local(async move {
            if deals.complete_fetch(sequence, page).await {
                crate::rerender_app();
            }
        });
    }

    /// Arranque con sesión restaurada: favoritos + página actual
    pub fn activate(&self) {
        self.load_current_page();

        let deals = self.deals.clone();
        spawn_local(async move {
            if let Err(e) = deals.load_favorites().await {
                log::warn!("⚠️ [APP] Favoritos no disponibles: {}", e);
            }
            crate::rerender_app();
        });
    }
}

pub struct App {
    context: AppContext,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(Rc::new(LocalStorage));
        let api = Rc::new(ApiClient::new());
        log::info!(
            "🌐 [APP] Backend: {} ({})",
            api.base_url(),
            if state.is_authenticated() { "con sesión" } else { "sin sesión" }
        );

        Ok(Self {
            context: AppContext::new(state, api),
            root,
        })
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Re-render completo del árbol
    ///
    /// Los listeners del árbol anterior se sueltan solo si el nuevo quedó
    /// montado; si el render falla, el árbol viejo sigue operativo.
    pub fn render(&self) -> Result<(), JsValue> {
        let previous = take_listeners();
        let rendered = render_app(&self.context).and_then(|tree| replace_children(&self.root, &tree));
        match rendered {
            Ok(()) => {
                log::debug!("🔄 [RENDER] {} listeners liberados", previous.len());
                Ok(())
            }
            Err(e) => {
                restore_listeners(previous);
                Err(e)
            }
        }
    }
}
