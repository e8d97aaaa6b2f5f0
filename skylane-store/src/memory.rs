use std::sync::{Mutex, MutexGuard};

use skylane_core::{BookingLedger, FlightCatalog, IdentityStore};

use crate::seed;

/// The whole process-wide dataset: users, flights, bookings.
pub struct Dataset {
    pub identity: IdentityStore,
    pub catalog: FlightCatalog,
    pub ledger: BookingLedger,
}

impl Dataset {
    fn seeded() -> Self {
        Self {
            identity: IdentityStore::new(),
            catalog: FlightCatalog::with_flights(seed::flights()),
            ledger: BookingLedger::new(),
        }
    }
}

/// Process-wide in-memory store. One mutex guards all three collections, so
/// every read-check-mutate sequence that runs inside a single `lock()` is
/// serialized against every other one. Nothing survives a restart.
pub struct MemoryStore {
    inner: Mutex<Dataset>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let dataset = Dataset::seeded();
        tracing::info!(
            flights = dataset.catalog.list().len(),
            "seeded flight catalog"
        );
        Self {
            inner: Mutex::new(dataset),
        }
    }

    /// Lock the dataset. Hold the guard for the whole operation, but never
    /// across an await point or a password digest computation.
    pub fn lock(&self) -> MutexGuard<'_, Dataset> {
        self.inner.lock().expect("store mutex poisoned")
    }

    /// Drop all users and bookings and restore the seeded catalog.
    pub fn reset(&self) {
        *self.lock() = Dataset::seeded();
        tracing::debug!("store reset to seeded state");
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
