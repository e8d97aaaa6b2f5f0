use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flight in the catalog. `seats` is the currently unbooked remainder of
/// the flight's capacity; only the booking ledger adjusts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i32,
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub seats: i32,
    pub price: f64,
}

/// Fixed flight list with mutable seat availability.
pub struct FlightCatalog {
    flights: Vec<Flight>,
}

impl FlightCatalog {
    pub fn new() -> Self {
        Self { flights: Vec::new() }
    }

    pub fn with_flights(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    /// Full catalog with live seat counts, in catalog order.
    pub fn list(&self) -> &[Flight] {
        &self.flights
    }

    pub fn find(&self, flight_id: i32) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == flight_id)
    }

    /// Apply a seat delta. The resulting count is validated before anything
    /// is written, so a rejected adjustment leaves the flight untouched.
    pub fn adjust_seats(&mut self, flight_id: i32, delta: i32) -> Result<i32, CatalogError> {
        let flight = self
            .flights
            .iter_mut()
            .find(|f| f.id == flight_id)
            .ok_or(CatalogError::FlightNotFound(flight_id))?;

        let next = flight.seats + delta;
        if next < 0 {
            return Err(CatalogError::InsufficientSeats {
                requested: -delta,
                available: flight.seats,
            });
        }

        flight.seats = next;
        Ok(next)
    }
}

impl Default for FlightCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Flight not found: {0}")]
    FlightNotFound(i32),

    #[error("Not enough seats: requested {requested}, available {available}")]
    InsufficientSeats { requested: i32, available: i32 },
}
