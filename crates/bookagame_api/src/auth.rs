// --- File: crates/bookagame_api/src/auth.rs ---
use bookagame_common::models::{LoginRequest, RegisterRequest, SessionTokens, UpdateProfileRequest, User};
use bookagame_common::BookingError;
use tracing::info;

use crate::client::{ApiClient, ApiRequest};
use crate::envelope::{DataEnvelope, LoginResponse, MeResponse, RegisterResponse};

impl ApiClient {
    /// `POST /auth/login`. Tokens are not stored here; that is the session's job.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, BookingError> {
        let request = ApiRequest::post(&["auth", "login"]).json(credentials)?;
        self.fetch(&request).await
    }

    /// `POST /auth/register/user`
    pub async fn register_user(&self, data: &RegisterRequest) -> Result<RegisterResponse, BookingError> {
        self.register("user", data).await
    }

    /// `POST /auth/register/owner`
    pub async fn register_owner(&self, data: &RegisterRequest) -> Result<RegisterResponse, BookingError> {
        self.register("owner", data).await
    }

    async fn register(&self, kind: &str, data: &RegisterRequest) -> Result<RegisterResponse, BookingError> {
        let request = ApiRequest::post(&["auth", "register", kind]).json(data)?;
        let response = self.fetch(&request).await?;
        info!(kind, "registration submitted");
        Ok(response)
    }

    /// `POST /auth/refresh`. `Ok(None)` when the API declined the token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Option<SessionTokens>, BookingError> {
        self.refresh_session(refresh_token).await
    }

    /// `POST /auth/logout`
    pub async fn logout(&self) -> Result<(), BookingError> {
        self.execute(&ApiRequest::post(&["auth", "logout"])).await
    }

    /// `GET /auth/me`
    pub async fn me(&self) -> Result<MeResponse, BookingError> {
        self.fetch(&ApiRequest::get(&["auth", "me"])).await
    }

    /// `PUT /auth/me`. The raw envelope is returned so the caller can tell a
    /// declined update (`success: false`) from a transport failure.
    pub async fn update_me(&self, update: &UpdateProfileRequest) -> Result<DataEnvelope<User>, BookingError> {
        let request = ApiRequest::put(&["auth", "me"]).json(update)?;
        self.fetch(&request).await
    }
}
