//! Table store integration tests
//!
//! These reopen the store between steps to make sure everything that
//! matters survives a restart, the way separate CLI invocations see it.

mod common;

use contentdash::session::SessionStore;
use contentdash::tables::{TableStore, TableTemplate, DEFAULT_TEMPLATE_ROWS};

use common::{create_temp_storage, session};

#[test]
fn test_workflow_survives_reopen() {
    let (storage, _tmp) = create_temp_storage();
    let ada = session("ada@example.com");

    let id = {
        let mut store = TableStore::open(storage.clone(), &ada).unwrap();
        let template = TableTemplate::WeeklyKpi;
        let id = store
            .create_from_template(template.name(), &template.headers(), DEFAULT_TEMPLATE_ROWS)
            .unwrap()
            .id
            .clone();
        store.set_cell(&id, 1, 1, "1 200").unwrap();
        store.set_cell(&id, 2, 1, "800,5").unwrap();
        store.add_column(&id).unwrap();
        store.rename(&id, "Week 10").unwrap();
        id
    };

    let store = TableStore::open(storage, &ada).unwrap();
    let table = store.get(&id).unwrap();
    assert_eq!(table.name, "Week 10");
    assert_eq!(table.rows(), DEFAULT_TEMPLATE_ROWS + 1);
    assert_eq!(table.cols(), TableTemplate::WeeklyKpi.headers().len() + 1);
    assert!(table.is_rectangular());
    assert_eq!(store.selected().unwrap().id, id);

    let summary = store.summarize(&id).unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].label, "Views");
    assert!((summary[0].sum - 2000.5).abs() < 1e-9);
}

#[test]
fn test_users_see_only_their_own_tables() {
    let (storage, _tmp) = create_temp_storage();
    let mut sessions = SessionStore::hydrate(storage.clone()).unwrap();

    sessions.login("ada@example.com").unwrap();
    let mut ada_store =
        TableStore::open(storage.clone(), sessions.current_user().unwrap()).unwrap();
    ada_store.create_empty(2, 2).unwrap();
    ada_store.create_empty(3, 3).unwrap();

    sessions.logout().unwrap();
    sessions.login("bob@example.com").unwrap();
    let bob_store = TableStore::open(storage.clone(), sessions.current_user().unwrap()).unwrap();
    assert!(bob_store.tables().is_empty());
    assert!(bob_store.selected().is_none());

    let ada_again = TableStore::open(storage, &session("ada@example.com")).unwrap();
    assert_eq!(ada_again.tables().len(), 2);
    assert_eq!(ada_again.owner(), "ada@example.com");
}

#[test]
fn test_selection_persists_and_falls_back_after_delete() {
    let (storage, _tmp) = create_temp_storage();
    let ada = session("ada@example.com");

    let (first, second) = {
        let mut store = TableStore::open(storage.clone(), &ada).unwrap();
        let first = store.create_empty(1, 1).unwrap().id.clone();
        let second = store.create_empty(1, 1).unwrap().id.clone();
        store.select(&first).unwrap();
        (first, second)
    };

    let mut store = TableStore::open(storage.clone(), &ada).unwrap();
    assert_eq!(store.selected().unwrap().id, first);

    store.delete(&first).unwrap();
    assert_eq!(store.selected().unwrap().id, second);

    let mut store = TableStore::open(storage.clone(), &ada).unwrap();
    assert_eq!(store.selected().unwrap().id, second);
    store.delete(&second).unwrap();

    let store = TableStore::open(storage, &ada).unwrap();
    assert!(store.tables().is_empty());
    assert!(store.selected().is_none());
}
