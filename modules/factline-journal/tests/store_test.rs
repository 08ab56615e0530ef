//! Integration tests for the file-backed Journal.

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use factline_journal::{codec, Event, EventKind, Journal, Payload};

fn payload(value: serde_json::Value) -> Payload {
    value.as_object().cloned().unwrap()
}

fn event(entity: &str, kind: EventKind, body: serde_json::Value) -> Event {
    Event {
        id: Uuid::new_v4(),
        entity: entity.to_string(),
        event: kind,
        payload: payload(body),
        timestamp: Utc::now(),
    }
}

// =========================================================================
// Append + read_all
// =========================================================================

#[test]
fn append_then_read_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut journal = Journal::open(dir.path().join("events.jsonl")).unwrap();

    let written = event("users", EventKind::Create, json!({"id": "u-1", "name": "Alice"}));
    journal.append(&written).unwrap();

    let lines: Vec<String> = journal.read_all().unwrap().map(|l| l.unwrap()).collect();
    assert_eq!(lines.len(), 1);

    let read = codec::decode(&lines[0]).unwrap();
    assert_eq!(read, written);
}

#[test]
fn read_preserves_write_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut journal = Journal::open(dir.path().join("events.jsonl")).unwrap();

    let events: Vec<Event> = (0..5)
        .map(|i| event("orders", EventKind::Create, json!({"id": format!("o-{i}")})))
        .collect();
    for e in &events {
        journal.append(e).unwrap();
    }

    let read: Vec<Event> = journal
        .read_all()
        .unwrap()
        .map(|l| codec::decode(&l.unwrap()).unwrap())
        .collect();
    assert_eq!(read, events);
}

#[test]
fn each_record_is_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let mut journal = Journal::open(&path).unwrap();

    journal
        .append(&event("users", EventKind::Create, json!({"id": "u-1", "bio": "multi\nline"})))
        .unwrap();
    journal
        .append(&event("users", EventKind::Delete, json!({"id": "u-1"})))
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw.lines().count(), 2);
    assert!(raw.ends_with('\n'));
}

// =========================================================================
// Reopen behavior
// =========================================================================

#[test]
fn reopen_appends_after_existing_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let first = event("users", EventKind::Create, json!({"id": "u-1"}));
    {
        let mut journal = Journal::open(&path).unwrap();
        journal.append(&first).unwrap();
    }

    let second = event("users", EventKind::Delete, json!({"id": "u-1"}));
    let mut journal = Journal::open(&path).unwrap();
    journal.append(&second).unwrap();

    let read: Vec<Event> = journal
        .read_all()
        .unwrap()
        .map(|l| codec::decode(&l.unwrap()).unwrap())
        .collect();
    assert_eq!(read, vec![first, second]);
}

#[test]
fn open_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/data/events.jsonl");

    let journal = Journal::open(&path).unwrap();
    assert_eq!(journal.read_all().unwrap().count(), 0);
    assert!(path.exists());
}

#[test]
fn empty_journal_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let journal = Journal::open(dir.path().join("events.jsonl")).unwrap();
    assert_eq!(journal.read_all().unwrap().count(), 0);
}
