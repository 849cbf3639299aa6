//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the collaborator-facing stores.
//! - Keep UI layers decoupled from storage details.

pub mod credential_service;
pub mod task_service;
