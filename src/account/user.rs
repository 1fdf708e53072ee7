use secrecy::SecretString;
use serde::Serialize;
use uuid::Uuid;

/// A registered user.
///
/// Fields are only set through [`User::create`]; the password hash is never
/// serialized.
#[derive(Serialize, Debug, Clone)]
pub struct User {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    #[serde(skip_serializing)]
    password_hash: SecretString,
}

impl User {
    /// Creates a user with a freshly generated identifier.
    #[must_use]
    pub fn create(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password_hash: SecretString,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password_hash,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub const fn password_hash(&self) -> &SecretString {
        &self.password_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn sample() -> User {
        User::create(
            "ada@example.com",
            "Ada",
            "Lovelace",
            SecretString::from("5e884898da28047151d0e56f8dc6292773603d0d".to_string()),
        )
    }

    #[test]
    fn create_keeps_fields() {
        let user = sample();
        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(user.first_name(), "Ada");
        assert_eq!(user.last_name(), "Lovelace");
        assert_eq!(
            user.password_hash().expose_secret(),
            "5e884898da28047151d0e56f8dc6292773603d0d"
        );
        assert_eq!(user.id().get_version_num(), 4);
    }

    #[test]
    fn create_assigns_unique_ids() {
        assert_ne!(sample().id(), sample().id());
    }

    #[test]
    fn serialize_omits_password_hash() -> anyhow::Result<()> {
        let user = sample();
        let value = serde_json::to_value(&user)?;

        assert_eq!(value["id"], user.id().to_string());
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["first_name"], "Ada");
        assert!(value.get("password_hash").is_none());
        Ok(())
    }

    #[test]
    fn debug_redacts_password_hash() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("5e884898"));
    }
}
