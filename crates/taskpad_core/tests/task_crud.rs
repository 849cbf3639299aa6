use taskpad_core::db::open_db_in_memory;
use taskpad_core::{KvTaskRepository, TaskService};

const SCOPE: &str = "ana@x.com";

#[test]
fn ids_start_at_one_and_increase_strictly() {
    let conn = open_db_in_memory().unwrap();
    let mut tasks = TaskService::load(KvTaskRepository::new(&conn), SCOPE).unwrap();

    let first = tasks.add("Buy bread", "05/01/2024").unwrap();
    let second = tasks.add("Water plants", "06/01/2024").unwrap();
    let third = tasks.add("Call mom", "07/01/2024").unwrap();

    assert_eq!((first.id, second.id, third.id), (1, 2, 3));
}

#[test]
fn removed_ids_are_never_reused() {
    let conn = open_db_in_memory().unwrap();
    let mut tasks = TaskService::load(KvTaskRepository::new(&conn), SCOPE).unwrap();

    tasks.add("a", "01/01/2024").unwrap();
    let second = tasks.add("b", "02/01/2024").unwrap();
    tasks.remove(second.id).unwrap();

    let third = tasks.add("c", "03/01/2024").unwrap();
    assert_eq!(third.id, 3);
}

#[test]
fn remove_of_absent_id_is_a_silent_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut tasks = TaskService::load(KvTaskRepository::new(&conn), SCOPE).unwrap();

    tasks.add("keep me", "01/01/2024").unwrap();
    tasks.remove(99).unwrap();

    assert_eq!(tasks.list().len(), 1);
    assert_eq!(tasks.list()[0].text, "keep me");
}

#[test]
fn list_preserves_insertion_order_newest_last() {
    let conn = open_db_in_memory().unwrap();
    let mut tasks = TaskService::load(KvTaskRepository::new(&conn), SCOPE).unwrap();

    tasks.add("first", "01/01/2024").unwrap();
    tasks.add("second", "02/01/2024").unwrap();

    let texts: Vec<&str> = tasks.list().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["first", "second"]);
}

#[test]
fn collection_and_counter_survive_a_reload() {
    let conn = open_db_in_memory().unwrap();

    {
        let mut tasks = TaskService::load(KvTaskRepository::new(&conn), SCOPE).unwrap();
        tasks.add("persisted", "01/01/2024").unwrap();
        let second = tasks.add("dropped", "02/01/2024").unwrap();
        tasks.remove(second.id).unwrap();
    }

    let mut reloaded = TaskService::load(KvTaskRepository::new(&conn), SCOPE).unwrap();
    assert_eq!(reloaded.list().len(), 1);
    assert_eq!(reloaded.list()[0].text, "persisted");

    // Counter picked up where the previous store left off.
    let next = reloaded.add("new", "03/01/2024").unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn fresh_scope_loads_empty_with_counter_one() {
    let conn = open_db_in_memory().unwrap();
    let mut tasks = TaskService::load(KvTaskRepository::new(&conn), "new@x.com").unwrap();

    assert!(tasks.list().is_empty());
    assert_eq!(tasks.add("first", "01/01/2024").unwrap().id, 1);
}
