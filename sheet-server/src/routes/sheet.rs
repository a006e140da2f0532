//! Sheet API
//!
//! The single action-dispatch endpoint the desk clients talk to:
//!
//! - `GET /?action=getEmployers|getCases` → versioned collection
//! - `POST /` with a JSON [`SaveRequest`] body (sent as text/plain) →
//!   `{revision}` acknowledgement
//!
//! The POST body is taken as a raw string rather than `Json` because
//! script-style clients declare it `text/plain;charset=utf-8`.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::api::{SaveAction, SaveRequest, SaveResponse};
use shared::models::{Case, Employer};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(fetch).post(save))
}

#[derive(Debug, Deserialize)]
pub struct ActionQuery {
    #[serde(default)]
    action: String,
}

/// GET /?action=... - return one whole collection
pub async fn fetch(
    State(state): State<AppState>,
    Query(query): Query<ActionQuery>,
) -> AppResult<Response> {
    match query.action.as_str() {
        "getEmployers" => Ok(Json(state.db.load_employers()?).into_response()),
        "getCases" => Ok(Json(state.db.load_cases()?).into_response()),
        other => Err(AppError::UnknownAction(other.to_string())),
    }
}

/// POST / - replace one whole collection
pub async fn save(State(state): State<AppState>, body: String) -> AppResult<Json<SaveResponse>> {
    let request: SaveRequest<Value> = serde_json::from_str(&body)
        .map_err(|e| AppError::BadRequest(format!("malformed save request: {e}")))?;

    let revision = match request.action {
        SaveAction::SaveEmployers => {
            let items: Vec<Employer> = decode_payload(request.payload)?;
            state.db.save_employers(&items, request.revision)?
        }
        SaveAction::SaveCases => {
            let items: Vec<Case> = decode_payload(request.payload)?;
            state.db.save_cases(&items, request.revision)?
        }
    };

    Ok(Json(SaveResponse { revision }))
}

fn decode_payload<T: DeserializeOwned>(payload: Vec<Value>) -> AppResult<Vec<T>> {
    serde_json::from_value(Value::Array(payload))
        .map_err(|e| AppError::BadRequest(format!("invalid payload: {e}")))
}
