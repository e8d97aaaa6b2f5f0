use chrono::{DateTime, TimeZone, Utc};
use skylane_core::Flight;

fn dt(y: i32, mo: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, min, 0).unwrap()
}

/// Startup catalog. The service has always shipped with this fixed list;
/// only the seat counts change at runtime.
pub fn flights() -> Vec<Flight> {
    vec![
        Flight {
            id: 1,
            flight_number: "AI101".to_string(),
            from: "Delhi".to_string(),
            to: "Mumbai".to_string(),
            departure: dt(2025, 9, 20, 10, 0),
            arrival: dt(2025, 9, 20, 12, 0),
            seats: 120,
            price: 5000.0,
        },
        Flight {
            id: 2,
            flight_number: "SG202".to_string(),
            from: "Bangalore".to_string(),
            to: "Chennai".to_string(),
            departure: dt(2025, 9, 21, 14, 0),
            arrival: dt(2025, 9, 21, 15, 30),
            seats: 80,
            price: 3000.0,
        },
        Flight {
            id: 3,
            flight_number: "BA303".to_string(),
            from: "Kolkata".to_string(),
            to: "Hyderabad".to_string(),
            departure: dt(2025, 9, 22, 9, 0),
            arrival: dt(2025, 9, 22, 11, 30),
            seats: 100,
            price: 4500.0,
        },
        Flight {
            id: 4,
            flight_number: "AI404".to_string(),
            from: "Mumbai".to_string(),
            to: "Bangalore".to_string(),
            departure: dt(2025, 9, 23, 16, 0),
            arrival: dt(2025, 9, 23, 18, 0),
            seats: 90,
            price: 4000.0,
        },
    ]
}
