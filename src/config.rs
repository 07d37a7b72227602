use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_API_BASE, DEFAULT_NOTIFICATION_MS, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub page_size: u32,
    pub notification_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE"),
            option_env!("PAGE_SIZE"),
            option_env!("NOTIFICATION_MS"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        page_size: Option<&str>,
        notification_ms: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base),
            page_size: page_size
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            notification_ms: notification_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.notification_ms),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Error
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
