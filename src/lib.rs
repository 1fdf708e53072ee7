//! # Userhub (sign-in client)
//!
//! `userhub` holds the sign-in flow of the user-management app as a library
//! that does not depend on any UI toolkit.
//!
//! ## Login form
//!
//! [`auth::LoginForm`] keeps the credentials being typed and the per-field
//! validity flags. Every edit returns a new snapshot; nothing is mutated in
//! place.
//!
//! ## Authentication
//!
//! [`auth::Dispatcher`] checks that both fields are filled, sends a single
//! request through an [`auth::Authenticator`] and reports the result as an
//! [`auth::AuthOutcome`]. On success the response payload is handed to a
//! [`auth::SessionSink`], usually an owned [`auth::SessionStore`]. Every
//! failure is also reported through an [`auth::Notifier`].
//!
//! ## Accounts
//!
//! [`account::User`] is the server-side user entity.

pub mod account;
pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
