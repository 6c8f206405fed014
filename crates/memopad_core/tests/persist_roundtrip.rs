use memopad_core::{open_slot, open_slot_in_memory, Notebook, SqliteStateRepository};
use rusqlite::Connection;
use uuid::Uuid;

fn notebook(conn: &Connection) -> Notebook<SqliteStateRepository<'_>> {
    Notebook::load(SqliteStateRepository::new(conn)).unwrap()
}

fn seed_payload(conn: &Connection, payload: &str) {
    conn.execute(
        "INSERT INTO slots (name, payload) VALUES ('memos', ?1)
         ON CONFLICT(name) DO UPDATE SET payload = excluded.payload;",
        [payload],
    )
    .unwrap();
}

#[test]
fn fresh_instance_reproduces_memos_and_selection() {
    let conn = open_slot_in_memory().unwrap();

    let (first, second) = {
        let mut store = notebook(&conn);
        let first = store.add().unwrap();
        store.update_content(first, "<b>plans</b>").unwrap();
        let second = store.add().unwrap();
        store.set_active(first).unwrap();
        (first, second)
    };

    let reloaded = notebook(&conn);
    let ids: Vec<_> = reloaded.memos().iter().map(|memo| memo.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(reloaded.active_id(), Some(first));
    assert_eq!(reloaded.memos()[0].content, "<b>plans</b>");
    assert_eq!(reloaded.memos()[1].content, "");
}

#[test]
fn roundtrip_preserves_creation_timestamps() {
    let conn = open_slot_in_memory().unwrap();

    let created_at = {
        let mut store = notebook(&conn);
        store.add().unwrap();
        store.memos()[0].created_at
    };

    let reloaded = notebook(&conn);
    assert_eq!(reloaded.memos()[0].created_at, created_at);
}

#[test]
fn update_content_roundtrip_shows_latest_content() {
    let conn = open_slot_in_memory().unwrap();

    let id = {
        let mut store = notebook(&conn);
        let id = store.add().unwrap();
        store.update_content(id, "draft one").unwrap();
        store.update_content(id, "draft two").unwrap();
        id
    };

    let reloaded = notebook(&conn);
    assert_eq!(reloaded.active_id(), Some(id));
    assert_eq!(reloaded.memos()[0].content, "draft two");
}

#[test]
fn empty_slot_loads_as_empty_state() {
    let conn = open_slot_in_memory().unwrap();
    let store = notebook(&conn);
    assert!(store.memos().is_empty());
    assert_eq!(store.active_id(), None);
}

#[test]
fn malformed_payload_loads_as_empty_state() {
    let conn = open_slot_in_memory().unwrap();
    seed_payload(&conn, "{ this is not json");

    let store = notebook(&conn);
    assert!(store.memos().is_empty());
    assert_eq!(store.active_id(), None);
}

#[test]
fn dangling_selection_is_repaired_to_first_memo() {
    let conn = open_slot_in_memory().unwrap();
    let memo_id = Uuid::new_v4();
    seed_payload(
        &conn,
        &format!(
            r#"{{"memos":[{{"id":"{memo_id}","content":"kept","createdAt":1700000000000}}],"activeId":"{}"}}"#,
            Uuid::new_v4()
        ),
    );

    let store = notebook(&conn);
    assert_eq!(store.active_id(), Some(memo_id));
}

#[test]
fn missing_selection_falls_back_to_first_memo() {
    let conn = open_slot_in_memory().unwrap();
    let memo_id = Uuid::new_v4();
    seed_payload(
        &conn,
        &format!(
            r#"{{"memos":[{{"id":"{memo_id}","content":"","createdAt":1700000000000}}],"activeId":null}}"#
        ),
    );

    let store = notebook(&conn);
    assert_eq!(store.active_id(), Some(memo_id));
}

#[test]
fn duplicate_ids_keep_first_occurrence_only() {
    let conn = open_slot_in_memory().unwrap();
    let memo_id = Uuid::new_v4();
    seed_payload(
        &conn,
        &format!(
            r#"{{"memos":[
                {{"id":"{memo_id}","content":"original","createdAt":1}},
                {{"id":"{memo_id}","content":"imposter","createdAt":2}}
            ],"activeId":"{memo_id}"}}"#
        ),
    );

    let store = notebook(&conn);
    assert_eq!(store.memos().len(), 1);
    assert_eq!(store.memos()[0].content, "original");
    assert_eq!(store.active_id(), Some(memo_id));
}

#[test]
fn state_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.sqlite3");

    let id = {
        let conn = open_slot(&path).unwrap();
        let mut store = notebook(&conn);
        let id = store.add().unwrap();
        store.update_content(id, "<i>x</i>").unwrap();
        id
    };

    let conn = open_slot(&path).unwrap();
    let reloaded = notebook(&conn);
    assert_eq!(reloaded.active_id(), Some(id));
    assert_eq!(reloaded.memos()[0].content, "<i>x</i>");
}
