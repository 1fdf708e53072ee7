//! Single-shot login submission.
//!
//! A [`Dispatcher`] sends at most one request per [`Dispatcher::submit`] call
//! and never retries. `submit` borrows the dispatcher mutably, so one
//! dispatcher cannot have two submissions in flight.

use crate::auth::{
    client::Authenticator,
    error::{EMPTY_FIELDS_MESSAGE, REJECTED_FALLBACK_MESSAGE, TransportError},
    form::Credentials,
    notify::Notifier,
    session::SessionSink,
};
use tracing::{debug, error, info, instrument};

/// Failed attempts (validation, rejection, transport) go back to `Idle`
/// rather than stopping in a failure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    Submitting,
    SessionEstablished,
}

/// Result of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    SessionEstablished,
    /// A field was empty; nothing was sent.
    ValidationFailed,
    /// The server answered and refused the credentials.
    RemoteRejected(String),
    TransportFailed(TransportError),
}

impl AuthOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::SessionEstablished)
    }
}

pub struct Dispatcher<A, N> {
    authenticator: A,
    notifier: N,
    state: DispatchState,
}

impl<A, N> Dispatcher<A, N>
where
    A: Authenticator,
    N: Notifier,
{
    #[must_use]
    pub const fn new(authenticator: A, notifier: N) -> Self {
        Self {
            authenticator,
            notifier,
            state: DispatchState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> DispatchState {
        self.state
    }

    /// Submits the raw form values.
    ///
    /// On success the reply payload is passed to `session` exactly once.
    /// Every failure is also reported through the notifier.
    #[instrument(skip_all)]
    pub async fn submit<S>(&mut self, session: &mut S, identifier: &str, secret: &str) -> AuthOutcome
    where
        S: SessionSink + ?Sized,
    {
        if identifier.is_empty() || secret.is_empty() {
            debug!("empty login field, request not sent");
            self.notifier.show_error(EMPTY_FIELDS_MESSAGE);
            self.state = DispatchState::Idle;
            return AuthOutcome::ValidationFailed;
        }

        self.state = DispatchState::Submitting;

        let credentials = Credentials::new(identifier, secret);
        let outcome = match self.authenticator.authenticate(&credentials).await {
            Ok(response) => match response.data {
                Some(payload) if response.ok => {
                    info!("authentication succeeded");
                    session.sign_in(payload);
                    AuthOutcome::SessionEstablished
                }
                Some(payload) => {
                    let message = payload
                        .message()
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or(REJECTED_FALLBACK_MESSAGE)
                        .to_string();
                    info!(%message, "authentication rejected");
                    self.notifier.show_error(&message);
                    AuthOutcome::RemoteRejected(message)
                }
                None => {
                    error!(ok = response.ok, "authentication response carried no payload");
                    self.transport_failed(TransportError::EmptyResponse)
                }
            },
            Err(e) => {
                error!("authentication request failed: {}", e);
                self.transport_failed(e)
            }
        };

        self.state = if outcome.is_success() {
            DispatchState::SessionEstablished
        } else {
            DispatchState::Idle
        };

        outcome
    }

    fn transport_failed(&self, cause: TransportError) -> AuthOutcome {
        self.notifier.show_error(&cause.to_string());
        AuthOutcome::TransportFailed(cause)
    }
}
