//! HTTP routes.
//!
//! Mutations answer with a `303 See Other` back to `/`, so every change is
//! followed by a full render cycle from a fresh snapshot.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use friendmap_domain::RecordId;
use serde::Deserialize;

use crate::app::App;
use crate::use_cases::locations::{AddLocationInput, AddOutcome};
use crate::views::render_page;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(index))
        .route("/locations", post(add_location))
        .route("/locations/{id}/delete", post(delete_location))
}

/// Messages carried across the redirect.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub notice: Option<String>,
    pub error: Option<String>,
}

async fn index(State(app): State<Arc<App>>, Query(query): Query<PageQuery>) -> Html<String> {
    let snapshot = app.use_cases.locations.snapshot.execute().await;
    Html(render_page(
        snapshot,
        non_empty(query.notice),
        non_empty(query.error),
    ))
}

async fn add_location(
    State(app): State<Arc<App>>,
    Form(input): Form<AddLocationInput>,
) -> Redirect {
    match app.use_cases.locations.add.execute(input).await {
        Ok(AddOutcome::Added(record)) => refresh(Flash::Notice(format!(
            "Added {} at {}",
            record.name, record.point
        ))),
        Ok(AddOutcome::Skipped) => refresh(Flash::None),
        Err(e) => {
            tracing::warn!(error = %e, "Add location failed");
            refresh(Flash::Error(
                "Could not add the location: the location store is unavailable.".to_string(),
            ))
        }
    }
}

async fn delete_location(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    let id = RecordId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    match app.use_cases.locations.delete.execute(&id).await {
        Ok(()) => Ok(refresh(Flash::Notice("Location deleted".to_string()))),
        Err(e) => {
            tracing::warn!(record_id = %id, error = %e, "Delete location failed");
            Ok(refresh(Flash::Error(
                "Could not delete the location: the location store is unavailable.".to_string(),
            )))
        }
    }
}

enum Flash {
    None,
    Notice(String),
    Error(String),
}

/// Send the browser back to the page for a fresh render cycle.
fn refresh(flash: Flash) -> Redirect {
    let (key, message) = match flash {
        Flash::None => return Redirect::to("/"),
        Flash::Notice(message) => ("notice", message),
        Flash::Error(message) => ("error", message),
    };
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(key, &message)
        .finish();
    Redirect::to(&format!("/?{query}"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}
