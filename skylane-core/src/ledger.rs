use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, Flight, FlightCatalog};

/// An active reservation of seats on one flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub flight_id: i32,
    pub passengers: i32,
}

/// Seat-inventory ledger. Creating a booking decrements the flight's
/// availability and cancelling restores it. The caller must hold whatever
/// lock guards the catalog and ledger for the whole call, so the
/// check-then-mutate sequence on `seats` stays atomic.
pub struct BookingLedger {
    bookings: Vec<Booking>,
    next_id: i32,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    /// Book `passengers` seats on a flight for a user.
    pub fn create_booking(
        &mut self,
        catalog: &mut FlightCatalog,
        user_id: i32,
        flight_id: i32,
        passengers: i32,
    ) -> Result<Booking, LedgerError> {
        let flight = catalog
            .find(flight_id)
            .ok_or(LedgerError::FlightNotFound(flight_id))?;

        if passengers < 1 || flight.seats < passengers {
            return Err(LedgerError::InsufficientSeats {
                requested: passengers,
                available: flight.seats,
            });
        }

        catalog.adjust_seats(flight_id, -passengers)?;

        let booking = Booking {
            id: self.next_id,
            user_id,
            flight_id,
            passengers,
        };
        self.next_id += 1;
        self.bookings.push(booking.clone());

        Ok(booking)
    }

    /// Every active booking owned by `user_id`, each paired with a snapshot
    /// of its flight, in insertion order.
    pub fn list_for_user(&self, catalog: &FlightCatalog, user_id: i32) -> Vec<(Booking, Flight)> {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .filter_map(|b| catalog.find(b.flight_id).map(|f| (b.clone(), f.clone())))
            .collect()
    }

    /// Cancel a booking owned by `user_id`, restoring its seats to the
    /// flight and removing the record permanently. A booking that does not
    /// exist and one owned by another user are reported identically.
    pub fn cancel(
        &mut self,
        catalog: &mut FlightCatalog,
        user_id: i32,
        booking_id: i32,
    ) -> Result<Booking, LedgerError> {
        let idx = self
            .bookings
            .iter()
            .position(|b| b.id == booking_id && b.user_id == user_id)
            .ok_or(LedgerError::BookingNotFound(booking_id))?;

        let (flight_id, passengers) = {
            let b = &self.bookings[idx];
            (b.flight_id, b.passengers)
        };
        catalog.adjust_seats(flight_id, passengers)?;

        Ok(self.bookings.remove(idx))
    }

    pub fn active_count(&self) -> usize {
        self.bookings.len()
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Flight not found: {0}")]
    FlightNotFound(i32),

    #[error("Not enough seats: requested {requested}, available {available}")]
    InsufficientSeats { requested: i32, available: i32 },

    #[error("Booking not found: {0}")]
    BookingNotFound(i32),
}

impl From<CatalogError> for LedgerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::FlightNotFound(id) => LedgerError::FlightNotFound(id),
            CatalogError::InsufficientSeats {
                requested,
                available,
            } => LedgerError::InsufficientSeats {
                requested,
                available,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn catalog_with(id: i32, seats: i32) -> FlightCatalog {
        FlightCatalog::with_flights(vec![Flight {
            id,
            flight_number: format!("SL{:03}", id),
            from: "Delhi".to_string(),
            to: "Mumbai".to_string(),
            departure: Utc.with_ymd_and_hms(2025, 9, 20, 10, 0, 0).unwrap(),
            arrival: Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap(),
            seats,
            price: 5000.0,
        }])
    }

    #[test]
    fn test_booking_lifecycle() {
        let mut catalog = catalog_with(1, 120);
        let mut ledger = BookingLedger::new();

        // Book 5 seats for user 1
        let booking = ledger.create_booking(&mut catalog, 1, 1, 5).unwrap();
        assert_eq!(booking.passengers, 5);
        assert_eq!(catalog.find(1).unwrap().seats, 115);

        // Cancel restores availability exactly
        ledger.cancel(&mut catalog, 1, booking.id).unwrap();
        assert_eq!(catalog.find(1).unwrap().seats, 120);
        assert!(ledger.list_for_user(&catalog, 1).is_empty());
    }

    #[test]
    fn test_overdraw_leaves_seats_unchanged() {
        let mut catalog = catalog_with(1, 120);
        let mut ledger = BookingLedger::new();

        let err = ledger.create_booking(&mut catalog, 1, 1, 200).unwrap_err();
        match err {
            LedgerError::InsufficientSeats {
                requested,
                available,
            } => {
                assert_eq!(requested, 200);
                assert_eq!(available, 120);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(catalog.find(1).unwrap().seats, 120);
        assert_eq!(ledger.active_count(), 0);
    }

    #[test]
    fn test_passengers_must_be_positive() {
        let mut catalog = catalog_with(1, 120);
        let mut ledger = BookingLedger::new();

        assert!(matches!(
            ledger.create_booking(&mut catalog, 1, 1, 0),
            Err(LedgerError::InsufficientSeats { .. })
        ));
        assert!(matches!(
            ledger.create_booking(&mut catalog, 1, 1, -3),
            Err(LedgerError::InsufficientSeats { .. })
        ));
        assert_eq!(catalog.find(1).unwrap().seats, 120);
    }

    #[test]
    fn test_unknown_flight() {
        let mut catalog = catalog_with(1, 120);
        let mut ledger = BookingLedger::new();

        assert!(matches!(
            ledger.create_booking(&mut catalog, 1, 99, 1),
            Err(LedgerError::FlightNotFound(99))
        ));
    }

    #[test]
    fn test_cancel_requires_ownership() {
        let mut catalog = catalog_with(1, 120);
        let mut ledger = BookingLedger::new();

        let booking = ledger.create_booking(&mut catalog, 1, 1, 5).unwrap();

        // User 2 cancelling user 1's booking looks exactly like a missing id
        let err = ledger.cancel(&mut catalog, 2, booking.id).unwrap_err();
        assert!(matches!(err, LedgerError::BookingNotFound(_)));

        // Nothing changed
        assert_eq!(catalog.find(1).unwrap().seats, 115);
        assert_eq!(ledger.active_count(), 1);
    }

    #[test]
    fn test_cancel_unknown_booking() {
        let mut catalog = catalog_with(1, 120);
        let mut ledger = BookingLedger::new();

        assert!(matches!(
            ledger.cancel(&mut catalog, 1, 42),
            Err(LedgerError::BookingNotFound(42))
        ));
    }

    #[test]
    fn test_seats_plus_active_passengers_is_capacity() {
        let capacity = 120;
        let mut catalog = catalog_with(1, capacity);
        let mut ledger = BookingLedger::new();

        let check = |catalog: &FlightCatalog, ledger: &BookingLedger| {
            let booked: i32 = ledger
                .list_for_user(catalog, 1)
                .iter()
                .map(|(b, _)| b.passengers)
                .sum();
            assert_eq!(catalog.find(1).unwrap().seats + booked, capacity);
        };

        let first = ledger.create_booking(&mut catalog, 1, 1, 5).unwrap();
        check(&catalog, &ledger);

        let second = ledger.create_booking(&mut catalog, 1, 1, 7).unwrap();
        check(&catalog, &ledger);

        ledger.cancel(&mut catalog, 1, first.id).unwrap();
        check(&catalog, &ledger);

        let _ = ledger.create_booking(&mut catalog, 1, 1, 100).unwrap();
        check(&catalog, &ledger);

        // Failed overdraw keeps the invariant too
        assert!(ledger.create_booking(&mut catalog, 1, 1, 50).is_err());
        check(&catalog, &ledger);

        ledger.cancel(&mut catalog, 1, second.id).unwrap();
        check(&catalog, &ledger);
    }

    #[test]
    fn test_booking_ids_are_not_reused_after_cancel() {
        let mut catalog = catalog_with(1, 120);
        let mut ledger = BookingLedger::new();

        let first = ledger.create_booking(&mut catalog, 1, 1, 1).unwrap();
        let second = ledger.create_booking(&mut catalog, 1, 1, 1).unwrap();
        ledger.cancel(&mut catalog, 1, first.id).unwrap();

        let third = ledger.create_booking(&mut catalog, 1, 1, 1).unwrap();
        assert_ne!(third.id, second.id);
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_list_for_user_filters_and_pairs_flights() {
        let mut catalog = catalog_with(1, 120);
        let mut ledger = BookingLedger::new();

        ledger.create_booking(&mut catalog, 1, 1, 2).unwrap();
        ledger.create_booking(&mut catalog, 2, 1, 3).unwrap();
        ledger.create_booking(&mut catalog, 1, 1, 4).unwrap();

        let mine = ledger.list_for_user(&catalog, 1);
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].0.passengers, 2);
        assert_eq!(mine[1].0.passengers, 4);
        // Flight snapshot carries the live seat count
        assert_eq!(mine[0].1.seats, 120 - 2 - 3 - 4);
    }
}
