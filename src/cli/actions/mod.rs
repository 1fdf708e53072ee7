pub mod create_user;
pub mod login;

mod run;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    CreateUser(create_user::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
