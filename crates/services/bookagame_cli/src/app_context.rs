// --- File: crates/services/bookagame_cli/src/app_context.rs ---
use bookagame_api::{token_store_from_config, ApiClient};
use bookagame_booking::BookingFlow;
use bookagame_common::models::User;
use bookagame_common::BookingError;
use bookagame_config::AppConfig;
use bookagame_session::SessionService;
use std::sync::Arc;
use tracing::debug;

/// Everything a command needs, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub api: ApiClient,
    pub session: SessionService,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Result<Self, BookingError> {
        let tokens = token_store_from_config(&config.storage);
        let api = ApiClient::new(&config.api, tokens)?;
        debug!(base_url = %api.base_url(), "API client ready");
        let session = SessionService::new(api.clone());
        Ok(Self {
            config: Arc::new(config),
            api,
            session,
        })
    }

    /// A booking flow over this context's API client.
    pub fn booking_flow(&self) -> BookingFlow {
        BookingFlow::new(Arc::new(self.api.clone()), &self.config.booking)
    }

    /// Restores the stored session, failing when nobody is signed in.
    pub async fn require_user(&self) -> Result<User, BookingError> {
        match self.session.initialize().await? {
            Some(user) => Ok(user),
            None => Err(BookingError::Unauthorized {
                message: "Not signed in. Run `bookagame login` first.".to_string(),
            }),
        }
    }

    /// Like [`require_user`](Self::require_user) but also requires an owner account.
    pub async fn require_owner(&self) -> Result<User, BookingError> {
        let user = self.require_user().await?;
        if !user.is_owner() {
            return Err(BookingError::Validation(
                "This command is only available to venue owners".to_string(),
            ));
        }
        Ok(user)
    }
}
