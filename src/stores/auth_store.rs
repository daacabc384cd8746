use anyhow::{anyhow, Context};
use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// A signed-in browser session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub display_name: String,
    /// Unix timestamp (seconds)
    pub signed_in_at: i64,
}

/// Authentication state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub is_authenticated: bool,
}

impl AuthState {
    fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            is_authenticated: true,
        }
    }
}

/// Global authentication state
pub static AUTH_STATE: GlobalSignal<AuthState> = Signal::global(AuthState::default);

const STORAGE_KEY_SESSION: &str = "neuronest_session";

/// Initialize authentication from the stored session
pub fn init_auth() {
    log::info!("Initializing authentication...");

    match load_session() {
        Ok(Some(session)) => {
            log::info!("Restored session for {}", session.email);
            *AUTH_STATE.write() = AuthState::signed_in(session);
        }
        Ok(None) => {
            log::info!("No stored session");
        }
        Err(e) => {
            log::warn!("Discarding unreadable session: {:#}", e);
            LocalStorage::delete(STORAGE_KEY_SESSION);
            *AUTH_STATE.write() = AuthState::default();
        }
    }
}

/// Sign in with an email address and an optional display name
pub fn sign_in(email: &str, display_name: &str) -> Result<Session, String> {
    let (email, display_name) = validate_credentials(email, display_name)?;

    let session = Session {
        id: uuid::Uuid::new_v4().to_string(),
        email,
        display_name,
        signed_in_at: chrono::Utc::now().timestamp(),
    };

    persist_session(&session).map_err(|e| {
        log::error!("Failed to store session: {:#}", e);
        format!("Could not save your session: {}", e)
    })?;

    *AUTH_STATE.write() = AuthState::signed_in(session.clone());
    log::info!("Signed in as {}", session.email);

    Ok(session)
}

/// Sign out and clear the stored session
pub fn sign_out() {
    log::info!("Signing out...");
    LocalStorage::delete(STORAGE_KEY_SESSION);
    *AUTH_STATE.write() = AuthState::default();
}

/// Get the current session, if signed in
pub fn current_session() -> Option<Session> {
    AUTH_STATE.read().session.clone()
}

/// Check if a user is signed in
pub fn is_authenticated() -> bool {
    AUTH_STATE.read().is_authenticated
}

/// Normalize sign-in input into `(email, display_name)`.
///
/// A blank display name falls back to the local part of the email.
pub fn validate_credentials(email: &str, display_name: &str) -> Result<(String, String), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err("Enter a valid email address".to_string()),
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err("Enter a valid email address".to_string());
    }

    let display_name = match display_name.trim() {
        "" => local.to_string(),
        name => name.to_string(),
    };

    Ok((email.to_string(), display_name))
}

/// Up to two uppercase initials for an avatar
pub fn initials(display_name: &str) -> String {
    let initials: String = display_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        // first char of the uppercase form: 'ß' becomes 'S', not "SS"
        .filter_map(|c| c.to_uppercase().next())
        .take(2)
        .collect();

    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// Parse a stored session value
pub fn decode_session(raw: &str) -> anyhow::Result<Session> {
    serde_json::from_str(raw).context("malformed session JSON")
}

fn load_session() -> anyhow::Result<Option<Session>> {
    let raw = LocalStorage::raw()
        .get_item(STORAGE_KEY_SESSION)
        .map_err(|e| anyhow!("failed to read session from localStorage: {:?}", e))?;

    raw.as_deref().map(decode_session).transpose()
}

fn persist_session(session: &Session) -> anyhow::Result<()> {
    LocalStorage::set(STORAGE_KEY_SESSION, session).context("failed to write session to localStorage")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials_accepts_and_trims() {
        let (email, name) = validate_credentials("  ada@example.com ", "  Ada Lovelace ").unwrap();
        assert_eq!(email, "ada@example.com");
        assert_eq!(name, "Ada Lovelace");
    }

    #[test]
    fn test_validate_credentials_name_falls_back_to_local_part() {
        let (_, name) = validate_credentials("grace@navy.mil", "   ").unwrap();
        assert_eq!(name, "grace");
    }

    #[test]
    fn test_validate_credentials_rejects_bad_email() {
        assert!(validate_credentials("", "x").is_err());
        assert!(validate_credentials("   ", "x").is_err());
        assert!(validate_credentials("no-at-sign", "x").is_err());
        assert!(validate_credentials("@example.com", "x").is_err());
        assert!(validate_credentials("user@", "x").is_err());
        assert!(validate_credentials("user@localhost", "x").is_err());
        assert!(validate_credentials("a@b@c.com", "x").is_err());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace"), "G");
        assert_eq!(initials("john ronald reuel tolkien"), "JR");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn test_initials_take_one_char_per_word() {
        assert_eq!(initials("ßa ßb"), "SS");
        assert_eq!(initials("ß"), "S");
    }

    #[test]
    fn test_decode_session() {
        let session = decode_session(
            r#"{"id":"abc","email":"ada@example.com","display_name":"Ada","signed_in_at":1700000000}"#,
        )
        .unwrap();
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.display_name, "Ada");
        assert_eq!(session.signed_in_at, 1_700_000_000);
    }

    #[test]
    fn test_decode_session_rejects_corrupt_values() {
        assert!(decode_session(r#"{"id":"abc","email":"ada@ex"#).is_err());
        assert!(decode_session(r#"{"id":1}"#).is_err());
        assert!(decode_session("").is_err());
        // the old double-encoded form is a JSON string, not an object
        assert!(decode_session(r#""{\"id\":\"abc\"}""#).is_err());
    }
}
