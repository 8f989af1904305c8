use serde::{Deserialize, Serialize};

use crate::model::validation::{ValidationError, MIN_PASSWORD_LEN};

/// Maximum length of a display name in characters.
pub const MAX_DISPLAY_NAME_LEN: usize = 50;

/// The signed in user as exposed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub display_name: Option<String>,
}

impl UserDto {
    /// Name shown in the navbar: the display name, or the local part of the email.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) => name,
            None => self.email.split('@').next().unwrap_or(self.email.as_str()),
        }
    }
}

/// Sign up request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

impl RegisterDto {
    /// Check the request and return it with a normalized email and display name.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let email = normalize_email(&self.email)?;

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        let display_name = match self.display_name.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) if name.chars().count() > MAX_DISPLAY_NAME_LEN => {
                return Err(ValidationError::DisplayNameTooLong(MAX_DISPLAY_NAME_LEN))
            }
            Some(name) => Some(name.to_string()),
        };

        Ok(Self {
            email,
            password: self.password,
            display_name,
        })
    }
}

/// Sign in request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Trim and lowercase an email, rejecting values without a local part and a domain.
pub fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(ValidationError::InvalidEmail),
    }
}
