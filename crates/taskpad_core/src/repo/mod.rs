//! Repository layer abstractions and key-value implementations.
//!
//! # Responsibility
//! - Define persistence contracts for the credential and task stores.
//! - Isolate namespace key layout and JSON details from service logic.
//!
//! # Invariants
//! - Corrupt persisted values are mapped to the documented empty state here
//!   (with a warn event), so services above never observe a decode failure.
//! - Writes replace whole collections; read-modify-write is not atomic
//!   across connections (accepted single-writer model).

pub mod credential_repo;
pub mod task_repo;
