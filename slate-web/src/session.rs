//! Session facade: the interface UI code uses for identity state.
//!
//! Components never touch the token store or storage directly; they read the
//! session user from the [`AppState`] store and mutate it through the
//! functions here. The token store is the single owner of the persisted
//! token/user pair.

use shared::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use yewdux::Dispatch;

use crate::api::{ApiClient, ApiError};
use crate::models::app_state::AppState;
use crate::token_store;

/// Populate the in-memory session from the token store.
///
/// Called once when the UI mounts; the stored snapshot is trusted as-is and
/// only invalidated by a later 401 from a real API call.
pub fn hydrate(dispatch: &Dispatch<AppState>) {
    if let Some(session) = token_store::load() {
        dispatch.reduce_mut(|state| state.user = Some(session.user));
    }
}

/// Authenticate and persist the resulting session.
///
/// On failure the API error propagates untouched and no state changes.
pub async fn login(
    dispatch: &Dispatch<AppState>,
    payload: &LoginRequest,
) -> Result<User, ApiError> {
    let AuthResponse { token, user } = ApiClient::shared().login(payload).await?;
    token_store::save(&token, &user);
    dispatch.reduce_mut(|state| state.user = Some(user.clone()));
    Ok(user)
}

/// Create an account and persist the resulting session.
pub async fn register(
    dispatch: &Dispatch<AppState>,
    payload: &RegisterRequest,
) -> Result<User, ApiError> {
    let AuthResponse { token, user } = ApiClient::shared().register(payload).await?;
    token_store::save(&token, &user);
    dispatch.reduce_mut(|state| state.user = Some(user.clone()));
    Ok(user)
}

/// Clear the persisted session and reset in-memory state.
///
/// Purely local: the API defines no revocation endpoint, so the token simply
/// ages out server-side.
pub fn logout(dispatch: &Dispatch<AppState>) {
    token_store::clear();
    dispatch.reduce_mut(|state| state.user = None);
}

/// Reset in-memory state after the API client's 401 side effect.
///
/// The token store is already cleared by the time a caller sees
/// [`ApiError::AuthExpired`]; this only brings the UI state in line.
pub fn expire(dispatch: &Dispatch<AppState>) {
    dispatch.reduce_mut(|state| state.user = None);
}

/// Fold an API failure into session state.
///
/// On a 401 the client has already cleared the stored credentials; mirror
/// that here so navigation affordances update immediately. Every other error
/// leaves the session alone.
pub fn note_failure(dispatch: &Dispatch<AppState>, error: &ApiError) {
    if matches!(error, ApiError::AuthExpired) {
        expire(dispatch);
    }
}

/// Whether a session token is currently stored.
///
/// Token presence only; validity is established by the next real API call.
#[must_use]
pub fn is_authenticated() -> bool {
    token_store::token().is_some()
}
