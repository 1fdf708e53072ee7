//! Explicitly owned session state. Whoever needs the signed-in user borrows
//! the [`SessionStore`]; there is no process-wide current user.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// The `data` object of an authentication reply, kept exactly as sent.
///
/// No field is required or typed; `message` and `token` are read only when
/// they happen to be strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct AuthPayload {
    pub fields: Map<String, Value>,
}

impl AuthPayload {
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("message".to_string(), Value::String(message.into()));
        Self { fields }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").and_then(Value::as_str)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.fields.get("token").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for AuthPayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Receives the payload of a successful authentication.
pub trait SessionSink {
    fn sign_in(&mut self, payload: AuthPayload);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    payload: AuthPayload,
}

impl Session {
    #[must_use]
    pub const fn payload(&self) -> &AuthPayload {
        &self.payload
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.payload.token()
    }
}

/// Holds at most one session: created on sign-in, cleared on sign-out.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Drops the current session, returning it if there was one.
    pub fn sign_out(&mut self) -> Option<Session> {
        debug!("Clearing session");
        self.current.take()
    }
}

impl SessionSink for SessionStore {
    fn sign_in(&mut self, payload: AuthPayload) {
        debug!("Session established");
        self.current = Some(Session { payload });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_keeps_unknown_fields() -> anyhow::Result<()> {
        let payload: AuthPayload = serde_json::from_value(json!({
            "token": "abc",
            "userId": "42",
            "roles": ["admin"]
        }))?;

        assert_eq!(payload.token(), Some("abc"));
        assert!(payload.message().is_none());
        assert_eq!(payload.fields.get("userId"), Some(&json!("42")));
        assert_eq!(payload.fields.get("roles"), Some(&json!(["admin"])));

        let back = serde_json::to_value(&payload)?;
        assert_eq!(back["userId"], "42");
        assert!(back.get("message").is_none());
        Ok(())
    }

    #[test]
    fn non_string_fields_are_kept_but_not_read() -> anyhow::Result<()> {
        let payload: AuthPayload = serde_json::from_value(json!({
            "token": {"access": "a"},
            "message": ["bad", "shape"]
        }))?;

        assert!(payload.token().is_none());
        assert!(payload.message().is_none());
        assert_eq!(payload.fields.get("token"), Some(&json!({"access": "a"})));
        Ok(())
    }

    #[test]
    fn store_lifecycle() {
        let mut store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());

        store.sign_in(AuthPayload::from(
            json!({"token": "abc"}).as_object().cloned().unwrap_or_default(),
        ));
        assert!(store.is_authenticated());
        assert_eq!(store.current().and_then(Session::token), Some("abc"));

        let cleared = store.sign_out();
        assert_eq!(cleared.and_then(|s| s.token().map(str::to_string)), Some("abc".to_string()));
        assert!(!store.is_authenticated());
        assert!(store.sign_out().is_none());
    }

    #[test]
    fn sign_in_replaces_previous_session() {
        let mut store = SessionStore::new();
        store.sign_in(AuthPayload::with_message("first"));
        store.sign_in(AuthPayload::with_message("second"));

        assert_eq!(
            store.current().and_then(|s| s.payload().message()),
            Some("second")
        );
    }
}
