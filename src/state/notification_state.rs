// ============================================================================
// NOTIFICATION STATE - Toast transitorio
// ============================================================================
// Cada mensaje recibe un token creciente; un timer solo puede borrar el
// mensaje que él mismo programó.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct NotificationState {
    message: Rc<RefCell<Option<String>>>,
    generation: Rc<Cell<u64>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza el mensaje visible y devuelve su token
    pub fn show(&self, message: impl Into<String>) -> u64 {
        let token = self.generation.get() + 1;
        self.generation.set(token);
        *self.message.borrow_mut() = Some(message.into());
        token
    }

    /// Borra el mensaje solo si `token` sigue siendo el actual
    pub fn dismiss(&self, token: u64) -> bool {
        if self.generation.get() != token || self.message.borrow().is_none() {
            return false;
        }
        *self.message.borrow_mut() = None;
        true
    }

    pub fn current(&self) -> Option<String> {
        self.message.borrow().clone()
    }
}
