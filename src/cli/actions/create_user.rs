use crate::account::User;
use anyhow::Result;
use secrecy::SecretString;
use tracing::{info, instrument};

#[derive(Debug)]
pub struct Args {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: SecretString,
}

/// Creates the user and returns it rendered as pretty JSON.
///
/// # Errors
/// Returns an error if the user cannot be serialized.
pub fn render(args: &Args) -> Result<String> {
    let user = User::create(
        args.email.as_str(),
        args.first_name.as_str(),
        args.last_name.as_str(),
        args.password_hash.clone(),
    );

    info!(id = %user.id(), "user created");

    Ok(serde_json::to_string_pretty(&user)?)
}

/// # Errors
/// Returns an error if the user cannot be serialized.
#[instrument(skip_all)]
pub fn execute(args: &Args) -> Result<()> {
    println!("{}", render(args)?);

    Ok(())
}
