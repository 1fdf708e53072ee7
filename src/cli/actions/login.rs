use crate::auth::{
    AuthOutcome, ClientConfig, ConsoleNotifier, Dispatcher, HttpAuthenticator, LoginForm, Session,
    SessionStore,
};
use anyhow::{Context, Result, anyhow};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument};

#[derive(Debug)]
pub struct Args {
    pub client: ClientConfig,
    pub email: String,
    pub password: SecretString,
}

/// Runs the login form and a single submission.
///
/// Field hints and submission errors are printed to stderr. Hints do not
/// block the request; only empty fields do.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built, a field is empty, the
/// server rejects the credentials or the request fails.
#[instrument(skip_all, fields(url = %args.client.api_base_url))]
pub async fn sign_in(args: &Args) -> Result<Session> {
    let form = LoginForm::new()
        .on_identifier_change(args.email.as_str())
        .on_secret_change(args.password.expose_secret());

    for hint in [form.identifier_error(), form.secret_error()]
        .into_iter()
        .flatten()
    {
        eprintln!("{hint}");
    }

    let authenticator = HttpAuthenticator::new(&args.client)?;
    let mut dispatcher = Dispatcher::new(authenticator, ConsoleNotifier::stderr());
    let mut store = SessionStore::new();

    let (identifier, secret) = form.submission();
    match dispatcher.submit(&mut store, identifier, secret).await {
        AuthOutcome::SessionEstablished => {
            info!("signed in");
            store
                .current()
                .cloned()
                .context("session missing after sign-in")
        }
        AuthOutcome::ValidationFailed => Err(anyhow!(crate::auth::EMPTY_FIELDS_MESSAGE)),
        AuthOutcome::RemoteRejected(message) => Err(anyhow!("authentication rejected: {message}")),
        AuthOutcome::TransportFailed(e) => Err(e).context("authentication request failed"),
    }
}

/// # Errors
/// Returns an error if signing in fails or the session cannot be rendered.
pub async fn execute(args: Args) -> Result<()> {
    let session = sign_in(&args).await?;

    println!("{}", serde_json::to_string_pretty(session.payload())?);

    Ok(())
}
