// ============================================================================
// AUTH FORM STATE - Estado del formulario de acceso
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{AuthMode, Credentials};

#[derive(Clone, Default)]
pub struct AuthFormState {
    pub mode: Rc<RefCell<AuthMode>>,
    pub email: Rc<RefCell<String>>,
    pub password: Rc<RefCell<String>>,
    pub submitting: Rc<RefCell<bool>>,
}

impl AuthFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_mode(&self) -> AuthMode {
        *self.mode.borrow()
    }

    pub fn set_mode(&self, mode: AuthMode) {
        *self.mode.borrow_mut() = mode;
    }

    pub fn toggle_mode(&self) -> AuthMode {
        let next = self.get_mode().toggled();
        self.set_mode(next);
        next
    }

    pub fn set_email(&self, email: String) {
        *self.email.borrow_mut() = email;
    }

    pub fn set_password(&self, password: String) {
        *self.password.borrow_mut() = password;
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.borrow().clone(), self.password.borrow().clone())
    }

    pub fn get_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    pub fn set_submitting(&self, submitting: bool) {
        *self.submitting.borrow_mut() = submitting;
    }

    /// Volver al formulario inicial (tras logout)
    pub fn reset(&self) {
        self.set_mode(AuthMode::Login);
        self.email.borrow_mut().clear();
        self.password.borrow_mut().clear();
        self.set_submitting(false);
    }
}
