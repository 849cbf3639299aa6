use rusqlite::Connection;
use taskpad_core::db::migrations::latest_version;
use taskpad_core::db::{open_db, open_db_in_memory, DbError};
use taskpad_core::{
    CredentialRepository, CredentialService, KvCredentialRepository, KvTaskRepository, TaskService,
};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskpad.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "kv");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn legacy_records_with_spanish_field_names_decode_unchanged() {
    let conn = open_db_in_memory().unwrap();

    // Layout as written by the original browser deployment.
    conn.execute(
        "INSERT INTO kv (key, value) VALUES
            ('users', '[{\"nombre\":\"Ana\",\"email\":\"ana@x.com\",\"password\":\"secret1\"}]'),
            ('usuarioActual', '{\"nombre\":\"Ana\",\"email\":\"ana@x.com\",\"password\":\"secret1\"}'),
            ('tareas_ana@x.com', '[{\"id\":1,\"texto\":\"Buy bread\",\"fecha\":\"05/01/2024\"}]'),
            ('contadorId_ana@x.com', '2');",
        [],
    )
    .unwrap();

    let auth = CredentialService::new(KvCredentialRepository::new(&conn));
    let session = auth.current_session().unwrap().unwrap();
    assert_eq!(session.name, "Ana");

    let user = auth.authenticate("ana@x.com", "secret1").unwrap();
    assert_eq!(user.name, "Ana");

    let mut tasks = TaskService::load(KvTaskRepository::new(&conn), "ana@x.com").unwrap();
    assert_eq!(tasks.list().len(), 1);
    assert_eq!(tasks.list()[0].text, "Buy bread");
    assert_eq!(tasks.add("next", "06/01/2024").unwrap().id, 2);
}

#[test]
fn corrupt_user_collection_reads_as_empty() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv (key, value) VALUES ('users', '{broken');",
        [],
    )
    .unwrap();

    let repo = KvCredentialRepository::new(&conn);
    assert!(repo.list_users().unwrap().is_empty());
}

#[test]
fn corrupt_session_slot_reads_as_no_session() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv (key, value) VALUES ('usuarioActual', '42');",
        [],
    )
    .unwrap();

    let auth = CredentialService::new(KvCredentialRepository::new(&conn));
    assert!(auth.current_session().unwrap().is_none());
}

#[test]
fn corrupt_task_state_initializes_empty_with_counter_one() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv (key, value) VALUES
            ('tareas_ana@x.com', 'not json'),
            ('contadorId_ana@x.com', '\"not a number\"');",
        [],
    )
    .unwrap();

    let mut tasks = TaskService::load(KvTaskRepository::new(&conn), "ana@x.com").unwrap();
    assert!(tasks.list().is_empty());
    assert_eq!(tasks.add("fresh", "01/01/2024").unwrap().id, 1);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
