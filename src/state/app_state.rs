// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::rc::Rc;

use crate::models::Favorite;
use crate::state::{AuthFormState, DealsState, NotificationState, SessionContext};
use crate::utils::constants::LEGACY_FAVORITES_KEY;
use crate::utils::storage::{load_json, KeyValueStore};

#[derive(Clone)]
pub struct AppState {
    pub session: SessionContext,
    pub auth_form: AuthFormState,
    pub deals: DealsState,
    pub notification: NotificationState,
}

impl AppState {
    /// Crear estado de aplicación a partir del storage duradero
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        purge_legacy_favorites(store.as_ref());
        Self {
            session: SessionContext::restore(store),
            auth_form: AuthFormState::new(),
            deals: DealsState::new(),
            notification: NotificationState::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

/// La caché local de favoritos nunca se reconciliaba con el servidor: se lee
/// una vez para dejar constancia en el log y se elimina.
fn purge_legacy_favorites(store: &dyn KeyValueStore) {
    if store.get(LEGACY_FAVORITES_KEY).is_none() {
        return;
    }
    let count = load_json::<Vec<Favorite>>(store, LEGACY_FAVORITES_KEY).map_or(0, |f| f.len());
    log::warn!(
        "🧹 [APP] Caché local de favoritos obsoleta ({} entradas), se descarta; los favoritos vienen del servidor",
        count
    );
    store.remove(LEGACY_FAVORITES_KEY);
}
