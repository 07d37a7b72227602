use serde::{Deserialize, Serialize};

/// Modo del formulario de acceso
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Iniciar Sesión",
            Self::Register => "Crear cuenta",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Entrar",
            Self::Register => "Registrarse",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Login => "¿No tienes cuenta? Regístrate",
            Self::Register => "¿Ya tienes cuenta? Inicia sesión",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Cuerpo `{ error }` de las respuestas fallidas
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_drives_endpoint_and_labels() {
        assert_eq!(AuthMode::default(), AuthMode::Login);
        assert_eq!(AuthMode::Login.endpoint(), "/auth/login");
        assert_eq!(AuthMode::Register.endpoint(), "/auth/register");
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggled().submit_label(), "Entrar");
    }

    #[test]
    fn credentials_require_both_fields() {
        assert!(Credentials::new("a@b.com", "x").is_complete());
        assert!(!Credentials::new("  ", "x").is_complete());
        assert!(!Credentials::new("a@b.com", "").is_complete());
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Credenciales inválidas"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Credenciales inválidas"));
    }
}
