// ============================================================================
// ERRORES - Taxonomía de fallos del cliente
// ============================================================================

use thiserror::Error;

/// Mensaje genérico cuando el backend no devuelve `{ error }`
pub const GENERIC_ERROR_MESSAGE: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Credenciales inválidas o validación rechazada (se muestra con alert)
    #[error("{0}")]
    AuthFailure(String),

    /// Acción de favoritos sin sesión iniciada
    #[error("Debes iniciar sesión")]
    AuthorizationMissing,

    /// El fetch ni siquiera obtuvo respuesta
    #[error("Network error: {0}")]
    Network(String),

    /// Respuesta no-2xx
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Mensaje pensado para el usuario final
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthFailure(message) => message.clone(),
            Self::AuthorizationMissing => "🔒 Debes iniciar sesión".to_string(),
            Self::Network(_) | Self::Http { .. } | Self::Parse(_) => {
                "No se pudieron cargar los datos".to_string()
            }
            Self::Storage(_) => "No se pudo guardar la sesión".to_string(),
        }
    }

    /// El servidor respondió, aunque fuera con un status de error
    pub fn has_response(&self) -> bool {
        matches!(self, Self::Http { .. })
    }
}
