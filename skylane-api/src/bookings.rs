use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use skylane_core::{Booking, Flight};

use crate::{error::AppError, state::AppState, token::Claims};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookingRequest {
    flight_id: i32,
    passengers: i32,
}

#[derive(Debug, Serialize)]
struct CreateBookingResponse {
    message: String,
    booking: Booking,
}

/// A booking joined with a snapshot of its flight, the shape the
/// my-bookings view renders.
#[derive(Debug, Serialize)]
struct BookingWithFlight {
    #[serde(flatten)]
    booking: Booking,
    flight: Flight,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/my-bookings", get(my_bookings))
        .route("/bookings/{id}/cancel", post(cancel_booking))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/bookings
/// Book seats on a flight for the authenticated user. The availability
/// check and the seat decrement happen under one store lock.
async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let mut data = state.store.lock();
    let inner = &mut *data;
    let booking =
        inner
            .ledger
            .create_booking(&mut inner.catalog, claims.sub, req.flight_id, req.passengers)?;

    tracing::info!(
        booking_id = booking.id,
        flight_id = booking.flight_id,
        passengers = booking.passengers,
        "booking created"
    );

    Ok(Json(CreateBookingResponse {
        message: "Booked successfully".to_string(),
        booking,
    }))
}

/// GET /api/my-bookings
/// Every active booking of the authenticated user with its flight.
async fn my_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Json<Vec<BookingWithFlight>> {
    let data = state.store.lock();
    let bookings = data
        .ledger
        .list_for_user(&data.catalog, claims.sub)
        .into_iter()
        .map(|(booking, flight)| BookingWithFlight { booking, flight })
        .collect();

    Json(bookings)
}

/// POST /api/bookings/{id}/cancel
/// Cancel one of the authenticated user's bookings, restoring its seats.
/// Someone else's booking id is answered like a missing one.
async fn cancel_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let booking = {
        let mut data = state.store.lock();
        let inner = &mut *data;
        inner.ledger.cancel(&mut inner.catalog, claims.sub, booking_id)?
    };

    tracing::info!(
        booking_id = booking.id,
        flight_id = booking.flight_id,
        passengers = booking.passengers,
        "booking cancelled"
    );

    Ok(Json(MessageResponse {
        message: "Booking cancelled".to_string(),
    }))
}
