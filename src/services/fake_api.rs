//! Doble en memoria de `DealsApi` que registra cada llamada.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::{Credentials, Deal, Favorite};
use crate::services::DealsApi;

#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    Login(Credentials),
    Register(Credentials),
    FetchDeals { page: u32, page_size: u32 },
    ListFavorites { authorization: String },
    CreateFavorite { authorization: String, deal: Deal },
    DeleteFavorite { authorization: String, id: String },
}

pub struct FakeApi {
    pub calls: RefCell<Vec<ApiCall>>,
    pub login_result: RefCell<Result<String, ApiError>>,
    pub register_result: RefCell<Result<(), ApiError>>,
    pub pages: RefCell<HashMap<u32, Vec<Deal>>>,
    pub server_favorites: RefCell<Vec<Favorite>>,
    pub create_error: RefCell<Option<ApiError>>,
    pub delete_error: RefCell<Option<ApiError>>,
    /// Se ejecuta mientras el POST de favorito "está en vuelo"
    pub during_create: RefCell<Option<Box<dyn Fn()>>>,
    next_id: Cell<u32>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            login_result: RefCell::new(Ok("abc".to_string())),
            register_result: RefCell::new(Ok(())),
            pages: RefCell::new(HashMap::new()),
            server_favorites: RefCell::new(Vec::new()),
            create_error: RefCell::new(None),
            delete_error: RefCell::new(None),
            during_create: RefCell::new(None),
            next_id: Cell::new(1),
        }
    }
}

impl FakeApi {
    pub fn with_page(page: u32, deals: Vec<Deal>) -> Self {
        let api = Self::default();
        api.pages.borrow_mut().insert(page, deals);
        api
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl DealsApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.record(ApiCall::Login(credentials.clone()));
        self.login_result.borrow().clone()
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.record(ApiCall::Register(credentials.clone()));
        self.register_result.borrow().clone()
    }

    async fn fetch_deals(&self, page: u32, page_size: u32) -> Result<Vec<Deal>, ApiError> {
        self.record(ApiCall::FetchDeals { page, page_size });
        self.pages
            .borrow()
            .get(&page)
            .cloned()
            .ok_or_else(|| ApiError::Network("connection refused".to_string()))
    }

    async fn list_favorites(&self, token: &str) -> Result<Vec<Favorite>, ApiError> {
        self.record(ApiCall::ListFavorites {
            authorization: super::api_client::bearer(token),
        });
        Ok(self.server_favorites.borrow().clone())
    }

    async fn create_favorite(&self, token: &str, deal: &Deal) -> Result<Favorite, ApiError> {
        self.record(ApiCall::CreateFavorite {
            authorization: super::api_client::bearer(token),
            deal: deal.clone(),
        });
        if let Some(hook) = self.during_create.borrow().as_ref() {
            hook();
        }
        if let Some(error) = self.create_error.borrow().clone() {
            return Err(error);
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let favorite = Favorite {
            id: format!("fav-{}", id),
            deal: deal.clone(),
        };
        self.server_favorites.borrow_mut().push(favorite.clone());
        Ok(favorite)
    }

    async fn delete_favorite(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.record(ApiCall::DeleteFavorite {
            authorization: super::api_client::bearer(token),
            id: id.to_string(),
        });
        if let Some(error) = self.delete_error.borrow().clone() {
            return Err(error);
        }
        self.server_favorites.borrow_mut().retain(|f| f.id != id);
        Ok(())
    }
}

/// Oferta de prueba con los campos que importan para filtrar y ordenar
pub fn deal(app_id: &str, discount: &str, sale_price: &str) -> Deal {
    Deal {
        steam_app_id: app_id.to_string(),
        title: format!("Game {}", app_id),
        thumbnail: format!("https://img.example/{}.jpg", app_id),
        normal_price: "19.99".to_string(),
        sale_price: sale_price.to_string(),
        discount: discount.to_string(),
        deal_url: format!("u{}", app_id),
    }
}
