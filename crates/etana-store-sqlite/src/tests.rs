//! Integration tests for `SqliteStore` against an in-memory database.

use etana_core::{
  contact::{ContactStatus, NewContact},
  store::ContactStore,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn submission(name: &str) -> NewContact {
  NewContact {
    name:    name.to_owned(),
    email:   format!("{}@example.com", name.to_lowercase()),
    phone:   None,
    service: None,
    message: "Need curtains".to_owned(),
  }
}

// ─── Insert and read back ────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_contact() {
  let s = store().await;

  let contact = s.add_contact(submission("Jane")).await.unwrap();
  assert_eq!(contact.status, ContactStatus::New);
  assert!(contact.updated_at.is_none());

  let fetched = s.get_contact(contact.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, contact.id);
  assert_eq!(fetched.name, "Jane");
  assert_eq!(fetched.email, "jane@example.com");
  assert_eq!(fetched.message, "Need curtains");
  assert_eq!(fetched.status, ContactStatus::New);
  assert_eq!(fetched.created_at, contact.created_at);
  assert!(fetched.updated_at.is_none());
}

#[tokio::test]
async fn optional_fields_roundtrip() {
  let s = store().await;

  let mut input = submission("Omar");
  input.phone = Some("+254700000001".into());
  input.service = Some("curtains".into());

  let contact = s.add_contact(input).await.unwrap();
  let fetched = s.get_contact(contact.id).await.unwrap().unwrap();
  assert_eq!(fetched.phone.as_deref(), Some("+254700000001"));
  assert_eq!(fetched.service.as_deref(), Some("curtains"));

  let bare = s.add_contact(submission("Amina")).await.unwrap();
  let fetched = s.get_contact(bare.id).await.unwrap().unwrap();
  assert!(fetched.phone.is_none());
  assert!(fetched.service.is_none());
}

#[tokio::test]
async fn get_contact_missing_returns_none() {
  let s = store().await;
  let result = s.get_contact(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn ids_are_unique_per_insert() {
  let s = store().await;
  let a = s.add_contact(submission("Jane")).await.unwrap();
  let b = s.add_contact(submission("Jane")).await.unwrap();
  assert_ne!(a.id, b.id);
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_contacts_empty_store() {
  let s = store().await;
  assert!(s.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_contacts_most_recent_first() {
  let s = store().await;

  let first = s.add_contact(submission("First")).await.unwrap();
  let second = s.add_contact(submission("Second")).await.unwrap();
  let third = s.add_contact(submission("Third")).await.unwrap();

  let listed = s.list_contacts().await.unwrap();
  let ids: Vec<_> = listed.iter().map(|c| c.id).collect();
  assert_eq!(ids, [third.id, second.id, first.id]);
}

#[tokio::test]
async fn new_insert_moves_to_front_of_list() {
  let s = store().await;
  s.add_contact(submission("Old")).await.unwrap();

  let newest = s.add_contact(submission("Newest")).await.unwrap();
  let listed = s.list_contacts().await.unwrap();
  assert_eq!(listed[0].id, newest.id);
}

// ─── Status updates ──────────────────────────────────────────────────────────

#[tokio::test]
async fn set_status_updates_status_and_timestamp() {
  let s = store().await;
  let contact = s.add_contact(submission("Jane")).await.unwrap();

  let matched = s
    .set_status(contact.id, ContactStatus::Contacted)
    .await
    .unwrap();
  assert!(matched);

  let fetched = s.get_contact(contact.id).await.unwrap().unwrap();
  assert_eq!(fetched.status, ContactStatus::Contacted);
  assert!(fetched.updated_at.is_some());
  // created_at is immutable.
  assert_eq!(fetched.created_at, contact.created_at);
}

#[tokio::test]
async fn set_status_missing_contact_returns_false() {
  let s = store().await;
  let matched = s
    .set_status(Uuid::new_v4(), ContactStatus::Completed)
    .await
    .unwrap();
  assert!(!matched);
}

#[tokio::test]
async fn set_status_is_idempotent() {
  let s = store().await;
  let contact = s.add_contact(submission("Jane")).await.unwrap();

  assert!(
    s.set_status(contact.id, ContactStatus::Quoted)
      .await
      .unwrap()
  );
  let first = s.get_contact(contact.id).await.unwrap().unwrap();

  assert!(
    s.set_status(contact.id, ContactStatus::Quoted)
      .await
      .unwrap()
  );
  let second = s.get_contact(contact.id).await.unwrap().unwrap();

  assert_eq!(first.status, second.status);
  // Only updated_at advances on a repeat application.
  assert!(second.updated_at.unwrap() >= first.updated_at.unwrap());
}

#[tokio::test]
async fn set_status_walks_the_whole_pipeline() {
  let s = store().await;
  let contact = s.add_contact(submission("Jane")).await.unwrap();

  for status in [
    ContactStatus::Contacted,
    ContactStatus::Quoted,
    ContactStatus::Completed,
    ContactStatus::Cancelled,
  ] {
    assert!(s.set_status(contact.id, status).await.unwrap());
    let fetched = s.get_contact(contact.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, status);
  }
}
