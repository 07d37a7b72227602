// ============================================================================
// AUTH VIEWMODEL - Login / registro / logout
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{AuthMode, Credentials};
use crate::services::DealsApi;
use crate::state::{AuthFormState, SessionContext};
use crate::viewmodels::{DealsViewModel, Notifier};

/// Qué pasó tras enviar el formulario
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Registro aceptado; el formulario pasa a modo login
    Registered,
    /// Token guardado y favoritos pedidos
    LoggedIn,
}

impl AuthOutcome {
    /// Texto del alert de confirmación
    pub fn message(self) -> &'static str {
        match self {
            Self::Registered => "Usuario registrado. Ahora inicia sesión.",
            Self::LoggedIn => "Sesión iniciada",
        }
    }
}

pub struct AuthViewModel<A: DealsApi> {
    api: Rc<A>,
    session: SessionContext,
    form: AuthFormState,
    deals: DealsViewModel<A>,
    notifier: Notifier,
}

impl<A: DealsApi> Clone for AuthViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session.clone(),
            form: self.form.clone(),
            deals: self.deals.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<A: DealsApi> AuthViewModel<A> {
    pub fn new(
        api: Rc<A>,
        session: SessionContext,
        form: AuthFormState,
        deals: DealsViewModel<A>,
        notifier: Notifier,
    ) -> Self {
        Self {
            api,
            session,
            form,
            deals,
            notifier,
        }
    }

    pub fn form(&self) -> &AuthFormState {
        &self.form
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn toggle_mode(&self) -> AuthMode {
        self.form.toggle_mode()
    }

    /// Envía credenciales al endpoint del modo indicado
    ///
    /// Un error deja el estado intacto; el caller lo muestra con alert.
    pub async fn submit_credentials(
        &self,
        mode: AuthMode,
        email: &str,
        password: &str,
    ) -> Result<AuthOutcome, ApiError> {
        let credentials = Credentials::new(email, password);
        if !credentials.is_complete() {
            return Err(ApiError::AuthFailure(
                "Completa el email y la contraseña".to_string(),
            ));
        }

        self.form.set_submitting(true);
        let result = self.submit(mode, &credentials).await;
        self.form.set_submitting(false);

        if let Err(e) = &result {
            log::warn!("⚠️ [AUTH] {} rechazado: {}", mode.endpoint(), e);
        }
        result
    }

    /// Igual que `submit_credentials` pero con lo que hay en el formulario
    pub async fn submit_form(&self) -> Result<AuthOutcome, ApiError> {
        let credentials = self.form.credentials();
        self.submit_credentials(self.form.get_mode(), &credentials.email, &credentials.password)
            .await
    }

    async fn submit(&self, mode: AuthMode, credentials: &Credentials) -> Result<AuthOutcome, ApiError> {
        match mode {
            AuthMode::Register => {
                self.api.register(credentials).await?;
                log::info!("✅ [AUTH] Usuario registrado: {}", credentials.email);
                self.form.set_mode(AuthMode::Login);
                Ok(AuthOutcome::Registered)
            }
            AuthMode::Login => {
                let token = self.api.login(credentials).await?;
                self.session.sign_in(token)?;
                self.form.password.borrow_mut().clear();
                log::info!("✅ [AUTH] Sesión iniciada: {}", credentials.email);

                // El fallo al cargar favoritos no invalida el login
                if let Err(e) = self.deals.load_favorites().await {
                    log::warn!("⚠️ [AUTH] Login correcto pero sin favoritos: {}", e);
                }
                Ok(AuthOutcome::LoggedIn)
            }
        }
    }

    /// Cierra sesión: token fuera, favoritos fuera, vuelta al formulario
    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.session.sign_out();
        self.deals.state().clear_favorites();
        self.form.reset();
        self.notifier.notify("👋 Sesión cerrada");
    }
}
