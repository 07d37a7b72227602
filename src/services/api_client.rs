// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::{ApiError, GENERIC_ERROR_MESSAGE};
use crate::models::{ApiErrorBody, Credentials, Deal, DealsPage, Favorite, LoginResponse};

/// Contrato HTTP con el backend de ofertas
///
/// Los viewmodels dependen de este trait y no de `ApiClient`, así los tests
/// pueden sustituir la red por un doble en memoria.
#[allow(async_fn_in_trait)]
pub trait DealsApi {
    /// `POST /auth/login` -> token
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;

    /// `POST /auth/register`
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// `GET /deals?page=&pageSize=`
    async fn fetch_deals(&self, page: u32, page_size: u32) -> Result<Vec<Deal>, ApiError>;

    /// `GET /favorites`
    async fn list_favorites(&self, token: &str) -> Result<Vec<Favorite>, ApiError>;

    /// `POST /favorites` con la oferta completa como cuerpo
    async fn create_favorite(&self, token: &str, deal: &Deal) -> Result<Favorite, ApiError>;

    /// `DELETE /favorites/:id`
    async fn delete_favorite(&self, token: &str, id: &str) -> Result<(), ApiError>;
}

/// Cliente API sobre gloo-net
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn submit_credentials(
        &self,
        endpoint: &str,
        credentials: &Credentials,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = Request::post(&url)
            .json(credentials)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
        log::warn!("⚠️ [AUTH] {} respondió HTTP {}", endpoint, response.status());
        Err(auth_failure(body))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DealsApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        log::info!("🔐 [AUTH] Login para: {}", credentials.email);
        let response = self.submit_credentials("/auth/login", credentials).await?;
        let body = response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        token_from(body)
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        log::info!("📝 [AUTH] Registro para: {}", credentials.email);
        self.submit_credentials("/auth/register", credentials)
            .await
            .map(|_| ())
    }

    async fn fetch_deals(&self, page: u32, page_size: u32) -> Result<Vec<Deal>, ApiError> {
        let url = deals_url(&self.base_url, page, page_size);
        log::debug!("🌐 [DEALS] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let page = read_json::<DealsPage>(response).await?;
        Ok(page.deals)
    }

    async fn list_favorites(&self, token: &str) -> Result<Vec<Favorite>, ApiError> {
        let url = format!("{}/favorites", self.base_url);
        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn create_favorite(&self, token: &str, deal: &Deal) -> Result<Favorite, ApiError> {
        let url = format!("{}/favorites", self.base_url);
        let response = Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(deal)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn delete_favorite(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let url = favorite_url(&self.base_url, id);
        let response = Request::delete(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(http_error(&response).await)
        }
    }
}

/// El backend explica el fallo en `{ error }`; si no, mensaje genérico
pub fn auth_failure(body: ApiErrorBody) -> ApiError {
    ApiError::AuthFailure(
        body.error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
    )
}

/// Un 2xx de login sin token también es un login fallido
pub fn token_from(body: LoginResponse) -> Result<String, ApiError> {
    body.token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::AuthFailure(GENERIC_ERROR_MESSAGE.to_string()))
}

/// Valor de la cabecera `Authorization`
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn deals_url(base_url: &str, page: u32, page_size: u32) -> String {
    format!("{}/deals?page={}&pageSize={}", base_url, page, page_size)
}

pub fn favorite_url(base_url: &str, id: &str) -> String {
    format!("{}/favorites/{}", base_url, id)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(http_error(&response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn http_error(response: &Response) -> ApiError {
    let message = response
        .text()
        .await
        .ok()
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| response.status_text());
    ApiError::Http {
        status: response.status(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn urls_follow_backend_routes() {
        let client = ApiClient::with_base_url("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            deals_url(client.base_url(), 3, 16),
            "https://api.example.com/deals?page=3&pageSize=16"
        );
        assert_eq!(
            favorite_url(client.base_url(), "65f0c1"),
            "https://api.example.com/favorites/65f0c1"
        );
    }

    #[test]
    fn bearer_header_format() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }

    #[rstest]
    #[case(r#"{"error":"Credenciales inválidas"}"#, "Credenciales inválidas")]
    #[case("{}", "Error")]
    #[case(r#"{"error":null}"#, "Error")]
    #[case(r#"{"error":"   "}"#, "Error")]
    fn auth_failure_prefers_server_message(#[case] body: &str, #[case] expected: &str) {
        let body: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(auth_failure(body), ApiError::AuthFailure(expected.to_string()));
    }

    #[rstest]
    #[case("{}")]
    #[case(r#"{"token":null}"#)]
    #[case(r#"{"token":""}"#)]
    fn login_body_without_token_is_auth_failure(#[case] body: &str) {
        let body: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token_from(body), Err(ApiError::AuthFailure("Error".to_string())));
    }

    #[test]
    fn login_body_with_token_yields_it() {
        let body: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(token_from(body), Ok("abc".to_string()));
    }
}
