//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use etana_core::{
  contact::{Contact, ContactStatus, NewContact},
  store::ContactStore,
};

use crate::{
  Error, Result,
  encode::{RawContact, encode_dt, encode_status, encode_uuid},
  schema::SCHEMA,
};

const CONTACT_COLUMNS: &str =
  "contact_id, name, email, phone, service, message, created_at, updated_at, \
   status";

fn read_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawContact> {
  Ok(RawContact {
    contact_id: row.get(0)?,
    name:       row.get(1)?,
    email:      row.get(2)?,
    phone:      row.get(3)?,
    service:    row.get(4)?,
    message:    row.get(5)?,
    created_at: row.get(6)?,
    updated_at: row.get(7)?,
    status:     row.get(8)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Etana contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn add_contact(&self, input: NewContact) -> Result<Contact> {
    let contact = Contact {
      id:         Uuid::new_v4(),
      name:       input.name,
      email:      input.email,
      phone:      input.phone,
      service:    input.service,
      message:    input.message,
      created_at: Utc::now(),
      updated_at: None,
      status:     ContactStatus::New,
    };

    let id_str     = encode_uuid(contact.id);
    let at_str     = encode_dt(contact.created_at);
    let status_str = encode_status(contact.status).to_owned();
    let name       = contact.name.clone();
    let email      = contact.email.clone();
    let phone      = contact.phone.clone();
    let service    = contact.service.clone();
    let message    = contact.message.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (
             contact_id, name, email, phone, service, message,
             created_at, updated_at, status
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, ?8)",
          rusqlite::params![
            id_str, name, email, phone, service, message, at_str, status_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(contact)
  }

  async fn get_contact(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {CONTACT_COLUMNS} FROM contacts WHERE contact_id = ?1"
              ),
              rusqlite::params![id_str],
              read_raw,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        // rowid tie-breaks contacts created within the same microsecond.
        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLUMNS} FROM contacts
           ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map([], read_raw)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn set_status(&self, id: Uuid, status: ContactStatus) -> Result<bool> {
    let id_str     = encode_uuid(id);
    let status_str = encode_status(status).to_owned();
    let at_str     = encode_dt(Utc::now());

    let matched = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts SET status = ?2, updated_at = ?3
           WHERE contact_id = ?1",
          rusqlite::params![id_str, status_str, at_str],
        )?)
      })
      .await?;

    Ok(matched > 0)
  }
}
