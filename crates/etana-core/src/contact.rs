//! Contact — the single persisted entity of the service.
//!
//! A contact is created once from a form submission and mutated only through
//! status updates. `created_at` never changes after insertion; `updated_at`
//! stays absent until the first status change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where an inquiry sits in the follow-up pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
  #[default]
  New,
  Contacted,
  Quoted,
  Completed,
  Cancelled,
}

impl ContactStatus {
  /// Wire form of the status, matching the serde representation.
  pub fn as_str(self) -> &'static str {
    match self {
      ContactStatus::New => "new",
      ContactStatus::Contacted => "contacted",
      ContactStatus::Quoted => "quoted",
      ContactStatus::Completed => "completed",
      ContactStatus::Cancelled => "cancelled",
    }
  }
}

impl std::str::FromStr for ContactStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "new" => Ok(ContactStatus::New),
      "contacted" => Ok(ContactStatus::Contacted),
      "quoted" => Ok(ContactStatus::Quoted),
      "completed" => Ok(ContactStatus::Completed),
      "cancelled" => Ok(ContactStatus::Cancelled),
      other => Err(Error::InvalidStatus(other.to_owned())),
    }
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A stored inquiry. `id` is assigned server-side and is the only identifier
/// ever exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
  pub id:         Uuid,
  pub name:       String,
  pub email:      String,
  pub phone:      Option<String>,
  pub service:    Option<String>,
  pub message:    String,
  pub created_at: DateTime<Utc>,
  /// Set on the first status change, overwritten on each subsequent one.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
  pub status:     ContactStatus,
}

// ─── Submission ──────────────────────────────────────────────────────────────

/// A contact-form submission, not yet persisted. The store assigns the `id`,
/// `created_at`, and initial status on insert.
#[derive(Debug, Clone)]
pub struct NewContact {
  pub name:    String,
  pub email:   String,
  pub phone:   Option<String>,
  pub service: Option<String>,
  pub message: String,
}

impl NewContact {
  /// Check field-level constraints. Runs before any store interaction.
  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::EmptyField("name"));
    }
    if self.message.trim().is_empty() {
      return Err(Error::EmptyField("message"));
    }
    if !is_valid_email(&self.email) {
      return Err(Error::InvalidEmail(self.email.clone()));
    }
    Ok(())
  }
}

/// Structural email check: a non-empty local part, an `@`, a dotted domain,
/// and no whitespace anywhere.
pub fn is_valid_email(address: &str) -> bool {
  let Some((local, domain)) = address.rsplit_once('@') else {
    return false;
  };
  if local.is_empty() || domain.is_empty() {
    return false;
  }
  if address.chars().any(char::is_whitespace) {
    return false;
  }
  domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
  use super::*;

  fn submission() -> NewContact {
    NewContact {
      name:    "Jane Doe".into(),
      email:   "jane@example.com".into(),
      phone:   None,
      service: None,
      message: "Need curtains".into(),
    }
  }

  #[test]
  fn valid_submission_passes() {
    assert!(submission().validate().is_ok());
  }

  #[test]
  fn blank_name_is_rejected() {
    let mut input = submission();
    input.name = "   ".into();
    assert!(matches!(input.validate(), Err(Error::EmptyField("name"))));
  }

  #[test]
  fn blank_message_is_rejected() {
    let mut input = submission();
    input.message = String::new();
    assert!(matches!(input.validate(), Err(Error::EmptyField("message"))));
  }

  #[test]
  fn malformed_email_is_rejected() {
    for bad in [
      "",
      "plainaddress",
      "@example.com",
      "jane@",
      "jane@example",
      "jane doe@example.com",
      "jane@.com",
      "jane@example.",
    ] {
      let mut input = submission();
      input.email = bad.into();
      assert!(
        matches!(input.validate(), Err(Error::InvalidEmail(_))),
        "accepted: {bad:?}"
      );
    }
  }

  #[test]
  fn email_check_accepts_common_forms() {
    for good in ["jane@example.com", "j.doe+tag@mail.example.co.ke"] {
      assert!(is_valid_email(good), "rejected: {good:?}");
    }
  }

  #[test]
  fn status_parses_all_five_values() {
    for (s, expected) in [
      ("new", ContactStatus::New),
      ("contacted", ContactStatus::Contacted),
      ("quoted", ContactStatus::Quoted),
      ("completed", ContactStatus::Completed),
      ("cancelled", ContactStatus::Cancelled),
    ] {
      assert_eq!(s.parse::<ContactStatus>().unwrap(), expected);
      assert_eq!(expected.as_str(), s);
    }
  }

  #[test]
  fn unknown_status_names_the_allowed_set() {
    let err = "archived".parse::<ContactStatus>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("archived"));
    assert!(msg.contains("cancelled"), "message: {msg}");
  }
}
