// --- File: crates/bookagame_session/src/state.rs ---
use bookagame_common::models::User;

/// Snapshot of the session as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True from construction until `initialize` settles, and while an action runs.
    pub is_loading: bool,
    pub is_authenticated: bool,
    /// Normalized message of the last failed action.
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
            is_authenticated: false,
            error: None,
        }
    }
}

impl SessionState {
    pub(crate) fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
        self.is_loading = false;
        self.error = None;
    }

    pub(crate) fn signed_out(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.is_loading = false;
    }

    pub(crate) fn failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn is_owner(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_owner)
    }
}
