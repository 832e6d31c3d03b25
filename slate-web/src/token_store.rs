//! Dual-surface persistence for the session token and user snapshot.
//!
//! The bearer token lives in two places: durable local storage, read by the
//! API client, and a first-party cookie, read by the route guard at
//! navigation time. This module is the sole writer of both surfaces; a single
//! `save` or `clear` always updates the pair together so they cannot diverge.

use gloo_storage::{LocalStorage, Storage};
use shared::models::User;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Storage key and cookie name for the bearer token.
pub const TOKEN_KEY: &str = "jwt_token";
/// Storage key for the serialized user snapshot.
pub const USER_KEY: &str = "user";

const COOKIE_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// The persisted token/user pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    /// Opaque bearer token.
    pub token: String,
    /// Snapshot of the authenticated user.
    pub user: User,
}

/// Persist the session in local storage and mirror the token into the
/// navigation-visible cookie.
pub fn save(token: &str, user: &User) {
    let _ = LocalStorage::set(TOKEN_KEY, token);
    let _ = LocalStorage::set(USER_KEY, user);
    write_cookie(TOKEN_KEY, token);
}

/// Load the persisted session, or `None` when absent or unreadable.
///
/// Malformed stored JSON is treated as an unauthenticated session rather than
/// an error.
#[must_use]
pub fn load() -> Option<StoredSession> {
    let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
    let user: User = LocalStorage::get(USER_KEY).ok()?;
    Some(StoredSession { token, user })
}

/// The bearer token alone, as attached to outgoing API requests.
#[must_use]
pub fn token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

/// Remove both representations. Idempotent.
pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
    delete_cookie(TOKEN_KEY);
}

/// Read a cookie value by name from the document cookie string.
#[must_use]
pub fn read_cookie(name: &str) -> Option<String> {
    let cookie_string = html_document()?.cookie().ok()?;

    for pair in cookie_string.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key == name {
            return Some(value.to_string());
        }
    }
    None
}

fn html_document() -> Option<HtmlDocument> {
    let document = web_sys::window()?.document()?;
    document.dyn_into().ok()
}

fn write_cookie(name: &str, value: &str) {
    if let Some(document) = html_document() {
        let cookie =
            format!("{name}={value}; path=/; max-age={COOKIE_MAX_AGE_SECS}; SameSite=Lax");
        let _ = document.set_cookie(&cookie);
    }
}

fn delete_cookie(name: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&format!("{name}=; path=/; max-age=0; SameSite=Lax"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{Timestamp, UserRole};
    use uuid::Uuid;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            role: UserRole::Teacher,
            created_at: Timestamp(Utc::now()),
        }
    }

    #[wasm_bindgen_test]
    fn save_then_load_roundtrips() {
        clear();
        let user = sample_user();
        save("token-abc", &user);

        let session = load().expect("session should be present after save");
        assert_eq!(session.token, "token-abc");
        assert_eq!(session.user, user);
        assert_eq!(token().as_deref(), Some("token-abc"));
        assert_eq!(read_cookie(TOKEN_KEY).as_deref(), Some("token-abc"));
        clear();
    }

    #[wasm_bindgen_test]
    fn clear_then_load_is_none() {
        save("token-abc", &sample_user());
        clear();
        assert!(load().is_none());
        assert!(token().is_none());
        assert!(read_cookie(TOKEN_KEY).is_none());
        // Idempotent.
        clear();
        assert!(load().is_none());
    }

    #[wasm_bindgen_test]
    fn malformed_user_json_reads_as_unauthenticated() {
        clear();
        let _ = LocalStorage::set(TOKEN_KEY, "token-abc");
        LocalStorage::raw()
            .set_item(USER_KEY, "{not json")
            .expect("raw storage write");

        assert!(load().is_none());
        clear();
    }
}
