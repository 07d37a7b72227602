// ============================================================================
// DEALS STATE - Ofertas, favoritos y filtros de la UI
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{Deal, DealFilters, Favorite, SortBy};

/// Estado de la última carga de ofertas
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Aún no se ha pedido nada
    #[default]
    Idle,
    Loading,
    Loaded,
    /// La última carga falló; `deals` conserva la página anterior
    Failed(String),
}

#[derive(Clone, Default)]
pub struct DealsState {
    pub deals: Rc<RefCell<Vec<Deal>>>,
    pub favorites: Rc<RefCell<Vec<Favorite>>>,
    pub status: Rc<RefCell<FetchStatus>>,
    pub min_discount: Rc<RefCell<i64>>,
    pub sort_by: Rc<RefCell<SortBy>>,
    pub show_favorites: Rc<RefCell<bool>>,
    pub current_page: Rc<RefCell<u32>>,
    latest_request: Rc<Cell<u64>>,
}

impl DealsState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Carga de ofertas
    // ------------------------------------------------------------------

    /// Marca una carga en curso y devuelve su número de secuencia
    pub fn begin_fetch(&self) -> u64 {
        let sequence = self.latest_request.get() + 1;
        self.latest_request.set(sequence);
        *self.status.borrow_mut() = FetchStatus::Loading;
        sequence
    }

    /// Aplica el resultado si `sequence` es la última carga emitida
    pub fn finish_fetch(&self, sequence: u64, result: Result<Vec<Deal>, ApiError>) -> bool {
        if sequence != self.latest_request.get() {
            log::debug!(
                "⏭️ [DEALS] Respuesta #{} descartada (última: #{})",
                sequence,
                self.latest_request.get()
            );
            return false;
        }
        match result {
            Ok(deals) => {
                *self.deals.borrow_mut() = deals;
                *self.status.borrow_mut() = FetchStatus::Loaded;
            }
            Err(e) => {
                *self.status.borrow_mut() = FetchStatus::Failed(e.to_string());
            }
        }
        true
    }

    pub fn get_status(&self) -> FetchStatus {
        self.status.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.status.borrow(), FetchStatus::Loading)
    }

    pub fn get_deals(&self) -> Vec<Deal> {
        self.deals.borrow().clone()
    }

    // ------------------------------------------------------------------
    // Favoritos
    // ------------------------------------------------------------------

    pub fn get_favorites(&self) -> Vec<Favorite> {
        self.favorites.borrow().clone()
    }

    pub fn set_favorites(&self, favorites: Vec<Favorite>) {
        *self.favorites.borrow_mut() = favorites;
    }

    pub fn clear_favorites(&self) {
        self.favorites.borrow_mut().clear();
    }

    pub fn find_favorite(&self, deal_url: &str) -> Option<Favorite> {
        self.favorites
            .borrow()
            .iter()
            .find(|favorite| favorite.matches(deal_url))
            .cloned()
    }

    pub fn is_favorite(&self, deal_url: &str) -> bool {
        self.favorites
            .borrow()
            .iter()
            .any(|favorite| favorite.matches(deal_url))
    }

    pub fn push_favorite(&self, favorite: Favorite) {
        self.favorites.borrow_mut().push(favorite);
    }

    pub fn remove_favorite(&self, id: &str) {
        self.favorites.borrow_mut().retain(|favorite| favorite.id != id);
    }

    // ------------------------------------------------------------------
    // Filtros y paginación
    // ------------------------------------------------------------------

    pub fn filters(&self) -> DealFilters {
        DealFilters {
            min_discount: *self.min_discount.borrow(),
            sort_by: *self.sort_by.borrow(),
            show_favorites: *self.show_favorites.borrow(),
        }
    }

    pub fn set_min_discount(&self, min_discount: i64) {
        *self.min_discount.borrow_mut() = min_discount;
    }

    pub fn set_sort_by(&self, sort_by: SortBy) {
        *self.sort_by.borrow_mut() = sort_by;
    }

    pub fn toggle_show_favorites(&self) -> bool {
        let mut show = self.show_favorites.borrow_mut();
        *show = !*show;
        *show
    }

    pub fn get_current_page(&self) -> u32 {
        *self.current_page.borrow()
    }

    /// Avanza una página; devuelve la nueva
    pub fn next_page(&self) -> u32 {
        let mut page = self.current_page.borrow_mut();
        *page += 1;
        *page
    }

    /// Retrocede una página; `None` si ya estamos en la primera
    pub fn previous_page(&self) -> Option<u32> {
        let mut page = self.current_page.borrow_mut();
        if *page == 0 {
            return None;
        }
        *page -= 1;
        Some(*page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_api::deal;

    #[test]
    fn defaults_match_initial_ui() {
        let state = DealsState::new();
        assert_eq!(state.filters(), DealFilters::default());
        assert_eq!(state.filters().sort_by, SortBy::Discount);
        assert_eq!(state.get_current_page(), 0);
        assert_eq!(state.get_status(), FetchStatus::Idle);
    }

    #[test]
    fn only_latest_fetch_is_applied() {
        let state = DealsState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.finish_fetch(second, Ok(vec![deal("2", "50%", "1.00")])));
        assert!(!state.finish_fetch(first, Ok(vec![deal("1", "10%", "9.00")])));

        assert_eq!(state.get_deals()[0].steam_app_id, "2");
        assert_eq!(state.get_status(), FetchStatus::Loaded);
    }

    #[test]
    fn failed_fetch_keeps_previous_page_and_is_distinct_from_empty() {
        let state = DealsState::new();
        let sequence = state.begin_fetch();
        state.finish_fetch(sequence, Ok(vec![deal("1", "10%", "9.00")]));

        let sequence = state.begin_fetch();
        assert!(state.is_loading());
        state.finish_fetch(sequence, Err(ApiError::Network("offline".to_string())));

        assert!(!state.is_loading());
        assert!(matches!(state.get_status(), FetchStatus::Failed(_)));
        assert_eq!(state.get_deals().len(), 1);

        let sequence = state.begin_fetch();
        state.finish_fetch(sequence, Ok(Vec::new()));
        assert_eq!(state.get_status(), FetchStatus::Loaded);
        assert!(state.get_deals().is_empty());
    }

    #[test]
    fn previous_page_stops_at_zero() {
        let state = DealsState::new();
        assert_eq!(state.previous_page(), None);
        assert_eq!(state.next_page(), 1);
        assert_eq!(state.previous_page(), Some(0));
        assert_eq!(state.get_current_page(), 0);
    }
}
