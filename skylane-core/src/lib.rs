pub mod catalog;
pub mod identity;
pub mod ledger;

pub use catalog::{CatalogError, Flight, FlightCatalog};
pub use identity::{IdentityClaim, IdentityError, IdentityStore, User};
pub use ledger::{Booking, BookingLedger, LedgerError};
