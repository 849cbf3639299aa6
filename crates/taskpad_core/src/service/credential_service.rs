//! Credential store: registration, authentication and the session slot.
//!
//! # Responsibility
//! - Validate registration input field by field.
//! - Enforce email uniqueness across the user collection.
//! - Own the single durable current-session slot.
//!
//! # Invariants
//! - Credentials are compared by exact string match; no hashing (accepted
//!   scope limitation of the trust-the-client model).
//! - A failed registration leaves the user collection unchanged.
//! - Log events are metadata-only; no passwords, no task text.

use crate::model::user::User;
use crate::repo::credential_repo::CredentialRepository;
use crate::storage::StorageError;
use crate::validate::{is_non_empty, is_valid_email_shape, is_valid_password_length};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level input rejection, suitable for per-field UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is blank after trimming.
    EmptyName,
    /// Email does not match the `local@domain.tld` shape.
    MalformedEmail,
    /// Password is shorter than 6 characters.
    PasswordTooShort,
}

impl ValidationError {
    /// The form field this rejection belongs to.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::MalformedEmail => "email",
            Self::PasswordTooShort => "password",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be blank"),
            Self::MalformedEmail => write!(f, "email must look like local@domain.tld"),
            Self::PasswordTooShort => write!(f, "password must be at least 6 characters"),
        }
    }
}

impl Error for ValidationError {}

/// Credential store error taxonomy.
#[derive(Debug)]
pub enum AuthError {
    /// Field-level input rejection; recoverable, shown per field.
    Validation(ValidationError),
    /// Registration with an email that is already taken.
    DuplicateEmail,
    /// No stored user matches the credential pair. Deliberately carries no
    /// field detail, so callers cannot confirm which part was wrong.
    NotFound,
    /// A session-scoped operation was invoked with no active session.
    Unauthenticated,
    /// Persistence-layer failure.
    Storage(StorageError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateEmail => write!(f, "this email is already registered"),
            Self::NotFound => write!(f, "email or password is incorrect"),
            Self::Unauthenticated => write!(f, "no active session"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::DuplicateEmail | Self::NotFound | Self::Unauthenticated => None,
        }
    }
}

impl From<ValidationError> for AuthError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for AuthError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Credential store facade over a credential repository.
pub struct CredentialService<R: CredentialRepository> {
    repo: R,
}

impl<R: CredentialRepository> CredentialService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new account and signs it in.
    ///
    /// Fields are checked in form order (name, email, password) and the
    /// first rejection wins. A duplicate email is reported distinctly from a
    /// failed login.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if !is_non_empty(name) {
            return Err(ValidationError::EmptyName.into());
        }
        if !is_valid_email_shape(email) {
            return Err(ValidationError::MalformedEmail.into());
        }
        if !is_valid_password_length(password) {
            return Err(ValidationError::PasswordTooShort.into());
        }

        let users = self.repo.list_users()?;
        if users.iter().any(|user| user.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let user = User::new(name.trim(), email, password);
        self.repo.append_user(&user)?;
        self.repo.write_session(&user)?;
        info!(
            "event=register module=auth status=ok users={}",
            users.len() + 1
        );
        Ok(user)
    }

    /// Authenticates an email/password pair and signs it in.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let users = self.repo.list_users()?;
        let Some(user) = users
            .into_iter()
            .find(|user| user.email == email && user.password == password)
        else {
            info!("event=login module=auth status=rejected");
            return Err(AuthError::NotFound);
        };

        self.repo.write_session(&user)?;
        info!("event=login module=auth status=ok");
        Ok(user)
    }

    /// Reads the durable session slot. Absent or malformed reads as `None`.
    pub fn current_session(&self) -> Result<Option<User>, AuthError> {
        Ok(self.repo.read_session()?)
    }

    /// Clears the session slot; idempotent.
    pub fn end_session(&self) -> Result<(), AuthError> {
        self.repo.clear_session()?;
        info!("event=logout module=auth status=ok");
        Ok(())
    }

    /// Session guard for protected views.
    ///
    /// Returns [`AuthError::Unauthenticated`] when no session is active, so
    /// the collaborator can redirect to its login surface instead of
    /// operating on an undefined scope.
    pub fn require_session(&self) -> Result<User, AuthError> {
        self.current_session()?.ok_or(AuthError::Unauthenticated)
    }
}
