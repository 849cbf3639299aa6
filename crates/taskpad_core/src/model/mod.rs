//! Domain model for accounts and task records.
//!
//! # Responsibility
//! - Define the canonical data structures persisted in the namespace.
//!
//! # Invariants
//! - Wire field names match the legacy persisted schema (see storage::keys).
//! - Records are immutable once created; there is no edit operation.

pub mod task;
pub mod user;
