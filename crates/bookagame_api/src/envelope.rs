// --- File: crates/bookagame_api/src/envelope.rs ---
//! Response schemas of the API.
//!
//! Resource endpoints answer `{ "success"?, "message"?, "data": .. }`. Court
//! slots answer `{ "available_slots": [..] }`. The auth endpoints have their
//! own shapes, described below.

use bookagame_common::models::{SessionTokens, TimeSlot, User};
use bookagame_common::BookingError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::ApiRequest;

#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> DataEnvelope<T> {
    /// The payload, or an error when the API flagged failure or sent none.
    pub fn into_data(self, status: u16, request: &ApiRequest) -> Result<T, BookingError> {
        if self.success == Some(false) {
            return Err(BookingError::Api {
                status,
                message: self.message.unwrap_or_default(),
            });
        }
        self.data.ok_or_else(|| {
            BookingError::Parse(format!("response to {} has no data", request))
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SlotsResponse {
    pub available_slots: Vec<TimeSlot>,
}

/// Resolves the account from an auth response.
///
/// The API sends the app profile (with role) as `profile` and the identity
/// provider's record as `user`; the profile wins. A `user` that does not fit
/// the [`User`] schema is only an error when there is no profile.
fn resolve_user(
    profile: Option<User>,
    user: Option<serde_json::Value>,
) -> Result<Option<User>, BookingError> {
    if profile.is_some() {
        return Ok(profile);
    }
    user.map(|value| from_value::<User>(value, "user"))
        .transpose()
}

fn from_value<T: DeserializeOwned>(value: serde_json::Value, what: &str) -> Result<T, BookingError> {
    serde_json::from_value(value)
        .map_err(|e| BookingError::Parse(format!("invalid {} in auth response: {}", what, e)))
}

/// `POST /auth/login`
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
    #[serde(default)]
    pub profile: Option<User>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl LoginResponse {
    /// Both tokens, when the login succeeded.
    pub fn tokens(&self) -> Option<SessionTokens> {
        match (&self.access_token, &self.refresh_token) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                Some(SessionTokens {
                    access_token: access.clone(),
                    refresh_token: refresh.clone(),
                })
            }
            _ => None,
        }
    }

    pub fn account(self) -> Result<Option<User>, BookingError> {
        resolve_user(self.profile, self.user)
    }
}

/// `POST /auth/register/{user,owner}`
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
    #[serde(default)]
    pub profile: Option<serde_json::Value>,
}

impl RegisterResponse {
    /// Registration went through when the API acknowledged it in any way.
    pub fn is_accepted(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty())
            || self.profile.as_ref().is_some_and(|p| !p.is_null())
            || self.user.as_ref().is_some_and(|u| !u.is_null())
    }
}

/// `GET /auth/me`
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<serde_json::Value>,
    #[serde(default)]
    pub profile: Option<User>,
}

impl MeResponse {
    pub fn account(self) -> Result<Option<User>, BookingError> {
        resolve_user(self.profile, self.user)
    }
}

#[derive(Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshData {
    pub session: SessionTokens,
}

/// `POST /auth/refresh`
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<RefreshData>,
}

impl RefreshResponse {
    pub fn into_tokens(self) -> Option<SessionTokens> {
        if !self.success {
            return None;
        }
        self.data.map(|d| d.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookagame_common::models::Role;

    #[test]
    fn test_envelope_unwraps_data() {
        let env: DataEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"data":["padel","tennis"]}"#).unwrap();
        let request = ApiRequest::get(&["venues", "sports"]);
        assert_eq!(env.into_data(200, &request).unwrap(), vec!["padel", "tennis"]);
    }

    #[test]
    fn test_envelope_without_data_is_parse_error() {
        let env: DataEnvelope<Vec<String>> = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        let request = ApiRequest::get(&["venues"]);
        let err = env.into_data(200, &request).unwrap_err();
        assert!(matches!(err, BookingError::Parse(ref m) if m.contains("GET /venues")));
    }

    #[test]
    fn test_envelope_success_false_is_api_error() {
        let env: DataEnvelope<u32> =
            serde_json::from_str(r#"{"success":false,"message":"Venue closed"}"#).unwrap();
        let err = env.into_data(200, &ApiRequest::get(&["venues", "v1"])).unwrap_err();
        assert_eq!(err.user_message(), "Venue closed");
    }

    #[test]
    fn test_login_prefers_profile() {
        let json = r#"{
            "message": "ok",
            "user": {"id": "auth-1", "email": "p@x.io", "role": "authenticated"},
            "profile": {"id": "p-1", "email": "p@x.io", "name": "Priya", "role": "owner"},
            "access_token": "a", "refresh_token": "r"
        }"#;
        let login: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(login.tokens().is_some());
        let user = login.account().unwrap().unwrap();
        assert_eq!(user.id, "p-1");
        assert_eq!(user.role, Role::Owner);
    }

    #[test]
    fn test_login_without_tokens() {
        let login: LoginResponse =
            serde_json::from_str(r#"{"message":"Email not confirmed"}"#).unwrap();
        assert!(login.tokens().is_none());
        assert!(login.account().unwrap().is_none());
    }

    #[test]
    fn test_me_with_unusable_user_is_parse_error() {
        let me: MeResponse =
            serde_json::from_str(r#"{"user":{"id":"auth-1","role":"authenticated"}}"#).unwrap();
        assert!(matches!(me.account(), Err(BookingError::Parse(_))));
    }

    #[test]
    fn test_refresh_requires_success() {
        let declined: RefreshResponse = serde_json::from_str(
            r#"{"success":false,"data":{"session":{"access_token":"a","refresh_token":"r"}}}"#,
        )
        .unwrap();
        assert!(declined.into_tokens().is_none());
    }

    #[test]
    fn test_register_acceptance() {
        let accepted: RegisterResponse =
            serde_json::from_str(r#"{"message":"Check your inbox"}"#).unwrap();
        assert!(accepted.is_accepted());
        let empty: RegisterResponse = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_accepted());
    }
}
