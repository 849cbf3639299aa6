//! Key layout of the persisted namespace.
//!
//! The key strings (including the Spanish spellings) are kept byte-identical
//! to the legacy browser localStorage layout, so a database imported from an
//! existing deployment stays readable without a rewrite pass.

/// All registered users, as a JSON array of user records.
pub const USERS: &str = "users";

/// The single current-session slot, a JSON user record when present.
pub const CURRENT_SESSION: &str = "usuarioActual";

/// Task collection for one owner scope, a JSON array of task records.
pub fn tasks(scope: &str) -> String {
    format!("tareas_{scope}")
}

/// Next task id for one owner scope, a JSON integer.
pub fn task_counter(scope: &str) -> String {
    format!("contadorId_{scope}")
}

#[cfg(test)]
mod tests {
    use super::{task_counter, tasks};

    #[test]
    fn scoped_keys_embed_the_owner_email() {
        assert_eq!(tasks("ana@x.com"), "tareas_ana@x.com");
        assert_eq!(task_counter("ana@x.com"), "contadorId_ana@x.com");
    }
}
