//! Client-side sign-in: form state, request dispatch and the owned session.

pub mod client;
pub mod dispatcher;
pub mod error;
pub mod form;
pub mod notify;
pub mod session;

pub use self::client::{AuthResponse, Authenticator, ClientConfig, HttpAuthenticator};
pub use self::dispatcher::{AuthOutcome, DispatchState, Dispatcher};
pub use self::error::{EMPTY_FIELDS_MESSAGE, TransportError};
pub use self::form::{Credentials, FormValidationState, LoginForm};
pub use self::notify::{ConsoleNotifier, Notifier, TracingNotifier};
pub use self::session::{AuthPayload, Session, SessionSink, SessionStore};
