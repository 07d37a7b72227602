pub mod auth;
pub mod deal;
pub mod filters;

pub use auth::{ApiErrorBody, AuthMode, Credentials, LoginResponse};
pub use deal::{Deal, DealsPage, Favorite};
pub use filters::{DealFilters, SortBy};
