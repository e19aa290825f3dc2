//! # Schoolmap Core
//!
//! Core types and logic for the schoolmap service.
//!
//! This crate provides the pieces the HTTP and storage layers are built around:
//! - Common error types
//! - The `School` domain model and its derived views
//! - The haversine proximity ranker
//! - Input validation gates for the two write/read operations
//!
//! Everything here is pure and synchronous; all I/O lives in the sibling crates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod geo;
pub mod school;
pub mod validation;

pub use error::{Error, Result};
pub use geo::{haversine_km, rank_by_distance, Coordinate, EARTH_RADIUS_KM};
pub use school::{NewSchool, RankedSchool, School};
