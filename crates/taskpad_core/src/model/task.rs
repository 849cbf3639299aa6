//! Task record.
//!
//! # Invariants
//! - `id` is unique within the owner scope and strictly increasing in
//!   assignment order; ids are never reused, even after removal.
//! - The owner scope is not a field on the record; it is the email embedded
//!   in the storage key of the collection that holds it.

use serde::{Deserialize, Serialize};

/// One task entry. Immutable once created; removed as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Monotonic per-scope id, assigned from the persisted counter.
    pub id: u64,
    /// User-entered description. Serialized as `texto` (legacy schema).
    #[serde(rename = "texto")]
    pub text: String,
    /// Display-formatted date string, `DD/MM/YYYY`. Serialized as `fecha`.
    #[serde(rename = "fecha")]
    pub date: String,
}

impl Task {
    pub fn new(id: u64, text: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            date: date.into(),
        }
    }
}
