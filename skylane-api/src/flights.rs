use axum::{extract::State, routing::get, Json, Router};
use skylane_core::Flight;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/flights", get(list_flights))
}

/// GET /api/flights
/// Current catalog with live seat counts, in catalog order.
async fn list_flights(State(state): State<AppState>) -> Json<Vec<Flight>> {
    Json(state.store.lock().catalog.list().to_vec())
}
