// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod deals_state;
pub mod notification_state;
pub mod session_context;

pub use app_state::*;
pub use auth_state::*;
pub use deals_state::*;
pub use notification_state::*;
pub use session_context::*;
