//! services/storefront/src/auth.rs
//!
//! Form-to-endpoint glue for the admin login and registration screens.
//!
//! Both forms deliberately collapse every failure (wrong credentials, a
//! non-success response, network trouble) into a single user-facing message.
//! The precise cause still lands in the log for operators.

use std::sync::Arc;

use storefront_core::domain::AdminLogin;
use storefront_core::ports::AdminGateway;
use tracing::warn;

/// The uniform, user-facing failure modes of the two auth forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Registration failed. Please try again.")]
    RegistrationFailed,
}

/// What the registration form collects before submission.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct AdminAuth {
    gateway: Arc<dyn AdminGateway>,
}

impl AdminAuth {
    pub fn new(gateway: Arc<dyn AdminGateway>) -> Self {
        Self { gateway }
    }

    /// Exchanges credentials for a token. Every gateway failure surfaces as
    /// [`AuthError::InvalidCredentials`]; no granular cause reaches the form.
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminLogin, AuthError> {
        self.gateway.login(email, password).await.map_err(|err| {
            warn!(email, error = %err, "admin login failed");
            AuthError::InvalidCredentials
        })
    }

    /// Submits a registration. The password/confirmation mismatch is caught
    /// locally, before any network call.
    pub async fn register(&self, form: &RegistrationForm) -> Result<(), AuthError> {
        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        self.gateway
            .register(&form.user_name, &form.email, &form.password)
            .await
            .map_err(|err| {
                warn!(email = %form.email, error = %err, "admin registration failed");
                AuthError::RegistrationFailed
            })
    }
}
