//! Handlers for the contact endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `POST`  | `/contact` | Validated form submission |
//! | `GET`   | `/contacts` | Most recently created first |
//! | `GET`   | `/contacts/:id` | 404 if not found |
//! | `PATCH` | `/contacts/:id/status?status=<status>` | 400 on invalid status |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use etana_core::{
  Error,
  contact::{Contact, ContactStatus, NewContact},
  store::ContactStore,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

// ─── Submit ──────────────────────────────────────────────────────────────────

/// The contact-form payload. Every field is optional at the serde level so
/// that a missing required field surfaces as field-level validation detail
/// rather than as an opaque deserialisation rejection.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub phone:   Option<String>,
  pub service: Option<String>,
  pub message: Option<String>,
}

impl ContactRequest {
  fn into_new_contact(self) -> Result<NewContact, Error> {
    let input = NewContact {
      name:    self.name.ok_or(Error::MissingField("name"))?,
      email:   self.email.ok_or(Error::MissingField("email"))?,
      phone:   self.phone,
      service: self.service,
      message: self.message.ok_or(Error::MissingField("message"))?,
    };
    input.validate()?;
    Ok(input)
  }
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
  pub success:    bool,
  pub message:    &'static str,
  pub contact_id: Uuid,
}

/// `POST /contact`
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ContactRequest>,
) -> Result<Json<SubmitResponse>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = body.into_new_contact()?;

  let contact = store
    .add_contact(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(SubmitResponse {
    success:    true,
    message:    "Thank you for your inquiry! We will get back to you soon.",
    contact_id: contact.id,
  }))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ListResponse {
  pub contacts: Vec<Contact>,
}

/// `GET /contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<ListResponse>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contacts = store
    .list_contacts()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(ListResponse { contacts }))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contact = store
    .get_contact(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

// ─── Update status ───────────────────────────────────────────────────────────

/// The target status rides in the query string; this preserves the public
/// contract of the endpoint as deployed.
#[derive(Debug, Deserialize)]
pub struct StatusParams {
  pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
  pub success: bool,
  pub message: &'static str,
}

/// `PATCH /contacts/:id/status?status=<status>`
pub async fn update_status<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Query(params): Query<StatusParams>,
) -> Result<Json<StatusResponse>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let status: ContactStatus = params.status.parse()?;

  let matched = store
    .set_status(id, status)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if !matched {
    return Err(ApiError::NotFound(format!("contact {id} not found")));
  }

  Ok(Json(StatusResponse {
    success: true,
    message: "Contact status updated successfully",
  }))
}
