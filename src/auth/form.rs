//! Login form state. Each edit re-validates the touched field and returns a
//! new snapshot; the previous snapshot is left as it was.

use secrecy::{ExposeSecret, SecretString};

/// Minimum trimmed length of the identifier (email/username) field.
pub const MIN_IDENTIFIER_LEN: usize = 4;
/// Minimum trimmed length of the secret (password) field.
pub const MIN_SECRET_LEN: usize = 8;

pub const IDENTIFIER_TOO_SHORT: &str = "Username must be 4 characters long.";
pub const SECRET_TOO_SHORT: &str = "Password must be 8 characters long.";

/// Raw values typed into the form.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub identifier: String,
    pub secret: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: SecretString::from(secret.into()),
        }
    }
}

/// Flags derived from [`Credentials`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormValidationState {
    pub identifier_valid: bool,
    pub secret_valid: bool,
    pub secret_masked: bool,
    /// Check mark next to the identifier while it is being typed.
    pub identifier_check: bool,
}

impl Default for FormValidationState {
    fn default() -> Self {
        Self {
            identifier_valid: true,
            secret_valid: true,
            secret_masked: true,
            identifier_check: false,
        }
    }
}

fn meets_min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

#[must_use]
pub fn identifier_is_valid(value: &str) -> bool {
    meets_min_len(value, MIN_IDENTIFIER_LEN)
}

#[must_use]
pub fn secret_is_valid(value: &str) -> bool {
    meets_min_len(value, MIN_SECRET_LEN)
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    credentials: Credentials,
    validation: FormValidationState,
}

impl LoginForm {
    /// Empty form with no errors shown and the secret masked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded with fixture credentials. The seed is not validated.
    #[must_use]
    pub fn prefilled(credentials: Credentials) -> Self {
        Self {
            credentials,
            validation: FormValidationState::default(),
        }
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub const fn validation(&self) -> FormValidationState {
        self.validation
    }

    #[must_use]
    pub fn on_identifier_change(&self, value: impl Into<String>) -> Self {
        let value = value.into();
        let valid = identifier_is_valid(&value);

        Self {
            credentials: Credentials {
                identifier: value,
                secret: self.credentials.secret.clone(),
            },
            validation: FormValidationState {
                identifier_valid: valid,
                identifier_check: valid,
                ..self.validation
            },
        }
    }

    #[must_use]
    pub fn on_secret_change(&self, value: impl Into<String>) -> Self {
        let value = value.into();
        let valid = secret_is_valid(&value);

        Self {
            credentials: Credentials {
                identifier: self.credentials.identifier.clone(),
                secret: SecretString::from(value),
            },
            validation: FormValidationState {
                secret_valid: valid,
                ..self.validation
            },
        }
    }

    /// Re-checks `value` against the identifier rule and updates
    /// `identifier_valid`. Nothing is stored.
    // NOTE: the secret field's blur applies the identifier rule, not the
    // secret rule. Kept as-is until the intended rule is confirmed.
    #[must_use]
    pub fn on_secret_blur(&self, value: &str) -> Self {
        Self {
            credentials: self.credentials.clone(),
            validation: FormValidationState {
                identifier_valid: identifier_is_valid(value),
                ..self.validation
            },
        }
    }

    /// Display-only; the stored secret is unchanged.
    #[must_use]
    pub fn toggle_secret_visibility(&self) -> Self {
        Self {
            credentials: self.credentials.clone(),
            validation: FormValidationState {
                secret_masked: !self.validation.secret_masked,
                ..self.validation
            },
        }
    }

    #[must_use]
    pub const fn identifier_error(&self) -> Option<&'static str> {
        if self.validation.identifier_valid {
            None
        } else {
            Some(IDENTIFIER_TOO_SHORT)
        }
    }

    #[must_use]
    pub const fn secret_error(&self) -> Option<&'static str> {
        if self.validation.secret_valid {
            None
        } else {
            Some(SECRET_TOO_SHORT)
        }
    }

    #[must_use]
    pub const fn is_submittable(&self) -> bool {
        self.validation.identifier_valid && self.validation.secret_valid
    }

    /// Raw identifier and secret, as handed to the dispatcher.
    #[must_use]
    pub fn submission(&self) -> (&str, &str) {
        (
            &self.credentials.identifier,
            self.credentials.secret.expose_secret(),
        )
    }
}
