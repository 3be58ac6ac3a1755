//! Credential validation and submission
//!
//! Validation runs locally and fails before anything touches the network;
//! a credentials value that reaches the client has already passed the same
//! constraints the platform's signup form enforces.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::{Registration, VictoryApi};
use crate::error::{Result, ValidationError};

/// Minimum password length accepted by the platform
const MIN_PASSWORD_LEN: usize = 6;

/// Standard address pattern, matched case-insensitively
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
});

/// Whether credentials are submitted to the login or registration endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Credentials collected from the user.
///
/// `username`, `first_name` and `last_name` are only required when
/// registering.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Login succeeded; the caller stores this token as the session
    LoggedIn { token: String },
    /// Registration succeeded; a separate login is still required
    Registered,
}

impl Credentials {
    /// Validate against the constraints for the given mode
    pub fn validate(&self, mode: AuthMode) -> std::result::Result<(), ValidationError> {
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        if mode == AuthMode::Register {
            require(&self.username, "username")?;
            require(&self.first_name, "first name")?;
            require(&self.last_name, "last name")?;
        }

        Ok(())
    }
}

fn require(
    field: &Option<String>,
    name: &'static str,
) -> std::result::Result<(), ValidationError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::MissingField(name)),
    }
}

/// Validate credentials and submit them to the platform.
///
/// A validation failure returns before any network call is made.
pub async fn submit(
    client: &dyn VictoryApi,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<AuthOutcome> {
    credentials.validate(mode)?;

    match mode {
        AuthMode::Login => {
            let token = client
                .login(&credentials.email, &credentials.password)
                .await?;
            Ok(AuthOutcome::LoggedIn { token })
        }
        AuthMode::Register => {
            let registration = Registration {
                email: credentials.email.clone(),
                password: credentials.password.clone(),
                // validated above
                username: credentials.username.clone().unwrap_or_default(),
                first_name: credentials.first_name.clone().unwrap_or_default(),
                last_name: credentials.last_name.clone().unwrap_or_default(),
            };
            client.register(&registration).await?;
            Ok(AuthOutcome::Registered)
        }
    }
}
