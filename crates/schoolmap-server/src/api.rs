//! Wire types for the HTTP API.
//!
//! Response shapes follow the service's established JSON contract: success
//! bodies carry `message` and `success: true`, failures carry `message` and
//! `success: false`.

use schoolmap_core::RankedSchool;
use serde::{Deserialize, Serialize};

/// Successful add-school response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSchoolResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Always `true` on this shape.
    pub success: bool,
    /// Store-assigned id of the new school.
    pub id: i64,
}

impl AddSchoolResponse {
    /// Creates the canonical success response for a new school id.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            message: "School added".to_string(),
            success: true,
            id,
        }
    }
}

/// Successful list-schools response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSchoolsResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Always `true` on this shape.
    pub success: bool,
    /// Schools ordered ascending by distance from the reference coordinate.
    pub schools: Vec<RankedSchool>,
}

impl ListSchoolsResponse {
    /// Creates the canonical success response for a ranked listing.
    #[must_use]
    pub fn new(schools: Vec<RankedSchool>) -> Self {
        Self {
            message: "Schools fetched successfully".to_string(),
            success: true,
            schools,
        }
    }
}

/// Raw list-schools query parameters.
///
/// Both fields stay optional strings here; the validation gate decides whether
/// they are present and numeric.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSchoolsParams {
    /// Reference latitude, as supplied.
    pub latitude: Option<String>,
    /// Reference longitude, as supplied.
    pub longitude: Option<String>,
}

/// Service status report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Fixed `"running"` marker.
    pub status: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// Number of registered schools.
    pub schools: u64,
}
