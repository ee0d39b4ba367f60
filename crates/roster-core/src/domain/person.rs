//! Person domain types.
//!
//! These types represent roster entries, independent of any
//! infrastructure concerns (database, HTTP, etc.).

use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// Location
// ─────────────────────────────────────────────────────────────────────────────

/// Geographic coordinates of a person.
///
/// Always serialized as a nested `{"lat": .., "lng": ..}` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Location {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Person Types
// ─────────────────────────────────────────────────────────────────────────────

/// A person that exists in the roster with a database ID.
///
/// Use `NewPerson` for people that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    /// Database ID (unique across the roster).
    pub id: i64,
    pub name: String,
    pub city: String,
    pub country: String,
    pub location: Location,
}

/// A person to be inserted or written over an existing row (no ID).
///
/// After insertion, the repository returns a `Person` with the assigned ID.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPerson {
    pub name: String,
    pub city: String,
    pub country: String,
    pub location: Location,
}

impl NewPerson {
    /// Attach an ID, producing a full `Person`.
    pub fn with_id(self, id: i64) -> Person {
        Person {
            id,
            name: self.name,
            city: self.city,
            country: self.country,
            location: self.location,
        }
    }
}

impl From<Person> for NewPerson {
    fn from(person: Person) -> Self {
        Self {
            name: person.name,
            city: person.city,
            country: person.country,
            location: person.location,
        }
    }
}

/// The rows written into a freshly created store.
pub fn seed_people() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            name: "曹雅云".to_string(),
            city: "北京".to_string(),
            country: "中国".to_string(),
            location: Location::new(39.9042, 116.4074),
        },
        Person {
            id: 49,
            name: "周一琦".to_string(),
            city: "深圳".to_string(),
            country: "中国".to_string(),
            location: Location::new(22.5431, 114.0579),
        },
    ]
}
