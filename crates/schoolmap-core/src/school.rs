//! The `School` domain model and its derived views.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A registered school.
///
/// Created exactly once via the add-school operation and never updated or
/// deleted by this service; the `id` is assigned by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// Store-assigned identifier, unique and immutable.
    pub id: i64,
    /// School name (non-empty).
    pub name: String,
    /// Street address (non-empty).
    pub address: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl School {
    /// Returns the school's position.
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A validated insert payload for a school.
///
/// Produced only by the add-school validation gate, so the coordinates are
/// guaranteed finite and the text fields non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSchool {
    /// School name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// A school annotated with its distance from a reference coordinate.
///
/// Transient view used only in listing responses; serializes flat as
/// `{id, name, address, latitude, longitude, dist}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSchool {
    /// The underlying school record.
    #[serde(flatten)]
    pub school: School,
    /// Great-circle distance from the reference coordinate, in kilometers.
    pub dist: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_school_serializes_flat() {
        let ranked = RankedSchool {
            school: School {
                id: 7,
                name: "Alpha".to_string(),
                address: "1 Main St".to_string(),
                latitude: 0.0,
                longitude: 0.0,
            },
            dist: 111.19,
        };

        let value = serde_json::to_value(&ranked).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Alpha");
        assert_eq!(value["address"], "1 Main St");
        assert!(value["dist"].is_number());
        assert!(value.get("school").is_none());
    }
}
