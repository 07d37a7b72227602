use std::cell::RefCell;
use std::collections::HashMap;

use gloo_storage::Storage;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Almacenamiento clave/valor duradero (localStorage en el navegador)
///
/// Los valores se guardan en crudo, sin envolver en JSON, para que el token
/// quede legible con `localStorage.getItem("token")`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&self, key: &str);
}

/// localStorage del navegador vía gloo-storage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        gloo_storage::LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        gloo_storage::LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| ApiError::Storage(format!("Error guardando '{}' en localStorage", key)))
    }

    fn remove(&self, key: &str) {
        if gloo_storage::LocalStorage::raw().remove_item(key).is_err() {
            log::warn!("⚠️ No se pudo eliminar '{}' de localStorage", key);
        }
    }
}

/// Almacenamiento en memoria (tests y navegadores sin localStorage)
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Lee y deserializa un valor JSON; `None` si falta o está corrupto
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = store.get(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ Valor corrupto en '{}': {}", key, e);
            None
        }
    }
}
