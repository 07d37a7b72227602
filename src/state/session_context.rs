// ============================================================================
// SESSION CONTEXT - Única fuente de verdad del token
// ============================================================================
// Se inyecta en todo lo que necesita autenticación; nadie más lee el token
// de localStorage.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::utils::constants::TOKEN_STORAGE_KEY;
use crate::utils::storage::KeyValueStore;

#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn KeyValueStore>,
    token: Rc<RefCell<Option<String>>>,
}

impl SessionContext {
    /// Restaurar la sesión guardada (autenticado sii hay token)
    pub fn restore(store: Rc<dyn KeyValueStore>) -> Self {
        let token = store
            .get(TOKEN_STORAGE_KEY)
            .filter(|token| !token.is_empty());
        if token.is_some() {
            log::info!("💾 [AUTH] Token encontrado en storage, sesión restaurada");
        }
        Self {
            store,
            token: Rc::new(RefCell::new(token)),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Persistir el token y pasar a autenticado
    pub fn sign_in(&self, token: String) -> Result<(), ApiError> {
        self.store.set(TOKEN_STORAGE_KEY, &token)?;
        *self.token.borrow_mut() = Some(token);
        Ok(())
    }

    pub fn sign_out(&self) {
        self.store.remove(TOKEN_STORAGE_KEY);
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn starts_authenticated_only_with_stored_token() {
        let empty = SessionContext::restore(Rc::new(MemoryStore::new()));
        assert!(!empty.is_authenticated());

        let blank = SessionContext::restore(Rc::new(MemoryStore::with_entry("token", "")));
        assert!(!blank.is_authenticated());

        let stored = SessionContext::restore(Rc::new(MemoryStore::with_entry("token", "abc")));
        assert_eq!(stored.token().as_deref(), Some("abc"));
    }

    #[test]
    fn sign_in_and_out_keep_storage_in_sync() {
        let store = Rc::new(MemoryStore::new());
        let session = SessionContext::restore(store.clone());

        session.sign_in("abc".to_string()).unwrap();
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        assert!(session.is_authenticated());

        // Los clones comparten estado
        let other = session.clone();
        other.sign_out();
        assert!(!session.is_authenticated());
        assert_eq!(store.get("token"), None);
    }
}
