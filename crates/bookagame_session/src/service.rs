// --- File: crates/bookagame_session/src/service.rs ---
use bookagame_api::ApiClient;
use bookagame_common::models::{LoginRequest, RegisterRequest, UpdateProfileRequest, User};
use bookagame_common::services::TokenStore;
use bookagame_common::{BookingError, InFlight};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::state::SessionState;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const UPDATE_FAILED: &str = "Update failed";

/// Owns the signed-in session.
///
/// Cheap to clone; clones share the same state, tokens and in-flight guards.
#[derive(Clone)]
pub struct SessionService {
    inner: Arc<Inner>,
}

struct Inner {
    api: ApiClient,
    state: Mutex<SessionState>,
    login: InFlight,
    register: InFlight,
    logout: InFlight,
    profile: InFlight,
    update: InFlight,
}

/// The API answered with a success status but did not do what was asked.
fn declined(message: Option<String>, fallback: &str) -> BookingError {
    BookingError::Api {
        status: 200,
        message: message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string()),
    }
}

impl SessionService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                state: Mutex::new(SessionState::default()),
                login: InFlight::new("login"),
                register: InFlight::new("registration"),
                logout: InFlight::new("logout"),
                profile: InFlight::new("profile refresh"),
                update: InFlight::new("profile update"),
            }),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    fn tokens(&self) -> &Arc<dyn TokenStore> {
        self.inner.api.token_store()
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        match self.inner.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated
    }

    pub fn clear_error(&self) {
        self.state().error = None;
    }

    fn begin(&self) {
        let mut state = self.state();
        state.is_loading = true;
        state.error = None;
    }

    fn fail(&self, err: BookingError) -> BookingError {
        let message = err.user_message();
        warn!("session action failed: {}", message);
        self.state().failed(message);
        err
    }

    async fn forget_tokens(&self) {
        if let Err(e) = self.tokens().clear_tokens().await {
            warn!("failed to clear stored tokens: {}", e);
        }
    }

    /// Restores a stored session: with an access token the profile is
    /// fetched, otherwise the session settles as signed out.
    pub async fn initialize(&self) -> Result<Option<User>, BookingError> {
        let token = match self.tokens().access_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!("could not read stored access token: {}", e);
                None
            }
        };

        if token.is_none() {
            debug!("no stored session");
            self.state().signed_out();
            return Ok(None);
        }

        match self.fetch_profile().await {
            Ok(user) => Ok(user),
            Err(BookingError::InProgress(name)) => Err(BookingError::InProgress(name)),
            Err(e) => {
                debug!("stored session is no longer valid: {}", e);
                Ok(None)
            }
        }
    }

    /// Signs in and stores the returned tokens.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, BookingError> {
        let _token = self.inner.login.try_begin()?;
        self.begin();

        let response = match self.inner.api.login(credentials).await {
            Ok(response) => response,
            Err(e) => return Err(self.fail(e)),
        };

        let Some(tokens) = response.tokens() else {
            return Err(self.fail(BookingError::Unauthorized {
                message: response.message.unwrap_or_else(|| LOGIN_FAILED.to_string()),
            }));
        };

        let user = match response.account() {
            Ok(Some(user)) => user,
            Ok(None) => {
                return Err(self.fail(BookingError::Parse(
                    "login response carries neither profile nor user".to_string(),
                )))
            }
            Err(e) => return Err(self.fail(e)),
        };

        if let Err(e) = self.tokens().set_tokens(tokens).await {
            return Err(self.fail(e));
        }

        info!(user_id = %user.id, role = ?user.role, "signed in");
        self.state().signed_in(user.clone());
        Ok(user)
    }

    /// Registers a player account. Does not sign in.
    pub async fn register_user(&self, data: &RegisterRequest) -> Result<(), BookingError> {
        self.register(data, false).await
    }

    /// Registers a venue-owner account. Does not sign in.
    pub async fn register_owner(&self, data: &RegisterRequest) -> Result<(), BookingError> {
        self.register(data, true).await
    }

    async fn register(&self, data: &RegisterRequest, owner: bool) -> Result<(), BookingError> {
        let _token = self.inner.register.try_begin()?;
        self.begin();

        let result = if owner {
            self.inner.api.register_owner(data).await
        } else {
            self.inner.api.register_user(data).await
        };

        match result {
            Ok(response) if response.is_accepted() => {
                self.state().is_loading = false;
                Ok(())
            }
            Ok(response) => Err(self.fail(declined(response.message, REGISTRATION_FAILED))),
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Signs out. The API call is best effort; local tokens and state are
    /// always cleared.
    pub async fn logout(&self) -> Result<(), BookingError> {
        let _token = self.inner.logout.try_begin()?;
        self.state().is_loading = true;

        if let Err(e) = self.inner.api.logout().await {
            debug!("logout request failed, ignoring: {}", e);
        }
        self.forget_tokens().await;

        let mut state = self.state();
        state.signed_out();
        state.error = None;
        info!("signed out");
        Ok(())
    }

    /// Reloads the signed-in account. A missing account or any failure ends
    /// the session.
    pub async fn fetch_profile(&self) -> Result<Option<User>, BookingError> {
        let _token = self.inner.profile.try_begin()?;
        self.state().is_loading = true;

        let account = match self.inner.api.me().await {
            Ok(response) => response.account(),
            Err(e) => Err(e),
        };

        match account {
            Ok(Some(user)) => {
                let mut state = self.state();
                state.user = Some(user.clone());
                state.is_authenticated = true;
                state.is_loading = false;
                Ok(Some(user))
            }
            Ok(None) => {
                debug!("profile response without account, ending session");
                self.forget_tokens().await;
                self.state().signed_out();
                Ok(None)
            }
            Err(e) => {
                self.forget_tokens().await;
                self.state().signed_out();
                Err(e)
            }
        }
    }

    /// Saves profile changes and replaces the cached user.
    pub async fn update_profile(&self, update: &UpdateProfileRequest) -> Result<User, BookingError> {
        let _token = self.inner.update.try_begin()?;
        self.begin();

        let envelope = match self.inner.api.update_me(update).await {
            Ok(envelope) => envelope,
            Err(e) => return Err(self.fail(e)),
        };

        match (envelope.success, envelope.data) {
            (Some(true), Some(user)) => {
                let mut state = self.state();
                state.user = Some(user.clone());
                state.is_loading = false;
                Ok(user)
            }
            _ => Err(self.fail(declined(envelope.message, UPDATE_FAILED))),
        }
    }
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("api", &self.inner.api)
            .field("state", &*self.state())
            .finish()
    }
}
