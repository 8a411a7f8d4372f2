//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `etana-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::contact::{Contact, ContactStatus, NewContact};

/// Abstraction over the persistent contact collection.
///
/// Each method maps to a single atomic operation on the backend; the service
/// imposes no ordering or mutual exclusion beyond that. A contact becomes
/// visible to `get_contact`/`list_contacts` only once `add_contact` has
/// returned successfully.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a submission. The store assigns a fresh UUID v4 `id`, the
  /// `created_at` timestamp, and the initial `new` status, and returns the
  /// complete contact.
  fn add_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by its application-level id. Returns `None` if not
  /// found.
  fn get_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// List every stored contact, most recently created first.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Set `status` and `updated_at` on the contact with `id` in a single
  /// update. Returns `false` if no contact matched the id.
  fn set_status(
    &self,
    id: Uuid,
    status: ContactStatus,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
