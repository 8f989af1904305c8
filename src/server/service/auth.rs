//! Email and password accounts.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{normalize_email, LoginDto, RegisterDto, UserDto},
    server::{data::user::UserRepository, error::auth::AuthError, error::Error},
};

/// Service handling sign up and sign in.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an account and return the new user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Account created
    /// - `Err(Error::ValidationError)` - Invalid email, short password, or long display name
    /// - `Err(Error::AuthError(AuthError::EmailTaken))` - Email already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, request: RegisterDto) -> Result<UserDto, Error> {
        let request = request.validate()?;
        let user_repository = UserRepository::new(self.db);

        if user_repository.find_by_email(&request.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&request.password)?;

        let user = match user_repository
            .create(
                &request.email,
                &password_hash,
                request.display_name.as_deref(),
            )
            .await
        {
            Ok(user) => user,
            // Lost a race against a concurrent registration for the same email
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AuthError::EmailTaken.into())
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(user_id = %user.id, "Registered new user");

        Ok(user.into())
    }

    /// Check credentials and return the matching user.
    ///
    /// Unknown emails and wrong passwords both yield `AuthError::InvalidCredentials`.
    pub async fn login(&self, request: LoginDto) -> Result<UserDto, Error> {
        let Ok(email) = normalize_email(&request.email) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&request.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user.into())
    }
}

/// Hash a password into an Argon2id PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Whether `password` matches a stored PHC string. Malformed hashes never match.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
