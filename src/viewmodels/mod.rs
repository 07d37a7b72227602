pub mod auth_viewmodel;
pub mod deal_filters;
pub mod deals_viewmodel;
pub mod notifier;

pub use auth_viewmodel::{AuthOutcome, AuthViewModel};
pub use deals_viewmodel::{DealsViewModel, FavoriteChange};
pub use notifier::Notifier;
