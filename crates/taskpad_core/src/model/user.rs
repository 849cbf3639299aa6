//! User account record.
//!
//! # Invariants
//! - `email` is the unique account key; uniqueness is enforced at
//!   registration time by the credential service.
//! - The password is stored in clear text. Accepted scope limitation of the
//!   trust-the-client model; do not log it.

use serde::{Deserialize, Serialize};

/// A registered account. Never mutated and never deleted after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name shown by the collaborator UI.
    ///
    /// Serialized as `nombre` to match the persisted legacy schema.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unique account key and owner scope for task collections.
    pub email: String,
    /// Clear-text credential, compared by exact string match.
    pub password: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
