use std::fmt::Debug;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domain::{LeadEmail, LeadName, NewLead};
use crate::store::{Lead, LeadStore};

#[derive(Debug, Deserialize)]
pub struct LeadData {
    name: String,
    email: String,
}

impl TryFrom<LeadData> for NewLead {
    type Error = CreateLeadError;

    fn try_from(data: LeadData) -> Result<Self, Self::Error> {
        let name = LeadName::parse(data.name).map_err(CreateLeadError::ValidationError)?;
        let email = LeadEmail::parse(data.email).map_err(CreateLeadError::ValidationError)?;

        Ok(Self { name, email })
    }
}

#[tracing::instrument(
    name = "Adding a new lead",
    skip(store, data),
    fields(
        lead_name = %data.name,
        lead_email = %data.email
    ),
)]
pub async fn create_lead(
    State(store): State<Arc<LeadStore>>,
    Json(data): Json<LeadData>,
) -> Result<(StatusCode, Json<Lead>), CreateLeadError> {
    let new_lead = data.try_into()?;

    let lead = store.append(new_lead);
    tracing::info!(lead_id = lead.id, "Stored a new lead");

    Ok((StatusCode::CREATED, Json(lead)))
}

#[tracing::instrument(name = "Listing all leads", skip(store))]
pub async fn list_leads(State(store): State<Arc<LeadStore>>) -> Json<Vec<Lead>> {
    Json(store.list_all())
}

#[derive(thiserror::Error)]
pub enum CreateLeadError {
    #[error("{0}")]
    ValidationError(String),
}

impl Debug for CreateLeadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for CreateLeadError {
    fn into_response(self) -> axum::response::Response {
        match self {
            CreateLeadError::ValidationError(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": self.to_string() })),
            ),
        }
        .into_response()
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
