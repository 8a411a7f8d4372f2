//! Handlers for the static catalog endpoints.
//!
//! Neither endpoint touches the store; both are pure functions of
//! compile-time configuration.

use axum::Json;
use etana_core::catalog::{COMPANY, CompanyProfile, SERVICES, ServiceEntry};
use serde::Serialize;

#[derive(Serialize)]
pub struct ServicesResponse {
  pub services: &'static [ServiceEntry],
}

/// `GET /services`
pub async fn services() -> Json<ServicesResponse> {
  Json(ServicesResponse { services: &SERVICES })
}

/// `GET /company`
pub async fn company() -> Json<&'static CompanyProfile> {
  Json(&COMPANY)
}
