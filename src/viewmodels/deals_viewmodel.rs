// ============================================================================
// DEALS VIEWMODEL - Ofertas paginadas + sincronización de favoritos
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{Deal, Favorite};
use crate::services::DealsApi;
use crate::state::{DealsState, SessionContext};
use crate::viewmodels::deal_filters;
use crate::viewmodels::Notifier;

/// Resultado de `toggle_favorite`
#[derive(Clone, Debug, PartialEq)]
pub enum FavoriteChange {
    Added(Favorite),
    Removed { id: String },
}

pub struct DealsViewModel<A: DealsApi> {
    api: Rc<A>,
    session: SessionContext,
    deals: DealsState,
    notifier: Notifier,
    page_size: u32,
}

impl<A: DealsApi> Clone for DealsViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session.clone(),
            deals: self.deals.clone(),
            notifier: self.notifier.clone(),
            page_size: self.page_size,
        }
    }
}

impl<A: DealsApi> DealsViewModel<A> {
    pub fn new(
        api: Rc<A>,
        session: SessionContext,
        deals: DealsState,
        notifier: Notifier,
        page_size: u32,
    ) -> Self {
        Self {
            api,
            session,
            deals,
            notifier,
            page_size,
        }
    }

    pub fn state(&self) -> &DealsState {
        &self.deals
    }

    // ------------------------------------------------------------------
    // Ofertas
    // ------------------------------------------------------------------

    /// Primera mitad de `fetch_page`: pasa a loading y reserva secuencia
    pub fn start_fetch(&self) -> u64 {
        self.deals.begin_fetch()
    }

    /// Segunda mitad: pide la página y aplica el resultado si sigue vigente
    pub async fn complete_fetch(&self, sequence: u64, page: u32) -> bool {
        let result = self.api.fetch_deals(page, self.page_size).await;
        match &result {
            Ok(deals) => log::info!("✅ [DEALS] Página {}: {} ofertas", page, deals.len()),
            Err(e) => log::error!("❌ [DEALS] Error cargando página {}: {}", page, e),
        }
        self.deals.finish_fetch(sequence, result)
    }

    /// `GET /deals?page=<page>&pageSize=<n>`
    pub async fn fetch_page(&self, page: u32) -> bool {
        let sequence = self.start_fetch();
        self.complete_fetch(sequence, page).await
    }

    /// Pasa a la página siguiente; el caller dispara la carga
    pub fn next_page(&self) -> u32 {
        self.deals.next_page()
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.deals.previous_page()
    }

    /// Ofertas a pintar según filtros y vista de favoritos
    pub fn visible_deals(&self) -> Vec<Deal> {
        let deals = self.deals.deals.borrow();
        let favorites = self.deals.favorites.borrow();
        deal_filters::visible_deals(&deals, &favorites, &self.deals.filters())
    }

    // ------------------------------------------------------------------
    // Favoritos
    // ------------------------------------------------------------------

    /// `GET /favorites`: reemplaza la lista local entera
    pub async fn load_favorites(&self) -> Result<usize, ApiError> {
        let token = self.session.token().ok_or(ApiError::AuthorizationMissing)?;
        let favorites = self.api.list_favorites(&token).await.map_err(|e| {
            log::error!("❌ [FAVS] Error cargando favoritos: {}", e);
            e
        })?;
        let count = favorites.len();
        self.deals.set_favorites(favorites);
        log::info!("⭐ [FAVS] {} favoritos cargados", count);
        Ok(count)
    }

    /// Marca o desmarca `deal` como favorito contra el servidor
    pub async fn toggle_favorite(&self, deal: &Deal) -> Result<FavoriteChange, ApiError> {
        let Some(token) = self.session.token() else {
            self.notifier.notify(ApiError::AuthorizationMissing.user_message());
            return Err(ApiError::AuthorizationMissing);
        };

        match self.deals.find_favorite(&deal.deal_url) {
            Some(existing) => self.remove_favorite(&token, existing, deal).await,
            None => self.add_favorite(&token, deal).await,
        }
    }

    async fn remove_favorite(
        &self,
        token: &str,
        existing: Favorite,
        deal: &Deal,
    ) -> Result<FavoriteChange, ApiError> {
        match self.api.delete_favorite(token, &existing.id).await {
            Ok(()) => {}
            // Sin rollback: si el servidor respondió, se quita igualmente
            Err(e) if e.has_response() => {
                log::warn!("⚠️ [FAVS] DELETE {} falló ({}), se quita en local", existing.id, e);
            }
            Err(e) => {
                log::error!("❌ [FAVS] No se pudo quitar {}: {}", existing.id, e);
                return Err(e);
            }
        }

        self.deals.remove_favorite(&existing.id);
        self.notifier
            .notify(format!("❌ Quitado de favoritos: {}", deal.title));
        Ok(FavoriteChange::Removed { id: existing.id })
    }

    async fn add_favorite(&self, token: &str, deal: &Deal) -> Result<FavoriteChange, ApiError> {
        let saved = self.api.create_favorite(token, deal).await.map_err(|e| {
            log::error!("❌ [FAVS] No se pudo guardar '{}': {}", deal.title, e);
            e
        })?;

        // Logout (u otra cuenta) mientras el POST estaba en vuelo
        if self.session.token().as_deref() != Some(token) {
            log::warn!("⚠️ [FAVS] Sesión cambiada, se descarta '{}'", deal.title);
            return Err(ApiError::AuthorizationMissing);
        }

        self.deals.push_favorite(saved.clone());
        self.notifier
            .notify(format!("⭐ Añadido a favoritos: {}", deal.title));
        Ok(FavoriteChange::Added(saved))
    }
}
