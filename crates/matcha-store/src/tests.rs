//! Tests for `SnapshotStore` against a temporary directory.

use matcha_core::user::demo_roster;

use crate::SnapshotStore;

fn store() -> (tempfile::TempDir, SnapshotStore) {
  let dir = tempfile::tempdir().expect("tempdir");
  let store = SnapshotStore::open(dir.path()).expect("open store");
  (dir, store)
}

#[test]
fn missing_key_yields_default() {
  let (_dir, s) = store();
  let value: Vec<String> = s.get("nothing", vec!["fallback".into()]);
  assert_eq!(value, vec!["fallback"]);
}

#[test]
fn set_then_get_round_trips() {
  let (_dir, s) = store();
  s.set("numbers", &vec![1u32, 2, 3]).unwrap();
  let back: Vec<u32> = s.get("numbers", Vec::new());
  assert_eq!(back, vec![1, 2, 3]);
}

#[test]
fn user_list_round_trips_field_wise() {
  let (_dir, s) = store();
  let users = demo_roster();

  s.set("users", &users).unwrap();
  let back: Vec<matcha_core::user::User> = s.get("users", Vec::new());
  assert_eq!(back, users);
}

#[test]
fn corrupted_snapshot_falls_back_to_default() {
  let (dir, s) = store();
  std::fs::write(dir.path().join("users.json"), "{not json at all").unwrap();

  let back: Vec<matcha_core::user::User> = s.get("users", Vec::new());
  assert!(back.is_empty());
}

#[test]
fn wrong_shape_falls_back_to_default() {
  let (_dir, s) = store();
  s.set("users", &vec![1u32, 2, 3]).unwrap();

  let back: Vec<matcha_core::user::User> = s.get("users", Vec::new());
  assert!(back.is_empty());
}

#[test]
fn set_overwrites_previous_snapshot() {
  let (_dir, s) = store();
  s.set("key", &"first").unwrap();
  s.set("key", &"second").unwrap();
  let back: String = s.get("key", String::new());
  assert_eq!(back, "second");
}

#[test]
fn remove_clears_the_key() {
  let (_dir, s) = store();
  s.set("key", &"value").unwrap();
  s.remove("key");
  let back: String = s.get("key", "default".into());
  assert_eq!(back, "default");

  // Removing an absent key is not an error.
  s.remove("never-set");
}
