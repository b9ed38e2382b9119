//! In-memory city gazetteer
//!
//! The gazetteer is built once at startup and never mutated. Request
//! handlers share it behind an `Arc` without locking.

pub mod loader;
pub mod tsv;

use crate::coord::Coordinates;
use serde_json::{Map, Value};

/// A single city from the gazetteer
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    /// City name as it appears in the source
    pub name: String,

    /// Latitude text as it appears in the source
    pub lat: String,

    /// Longitude text as it appears in the source
    pub long: String,

    /// Parsed, validated position
    pub coords: Coordinates,

    /// Remaining source fields (population, admin codes, timezone, ...)
    pub extra: Map<String, Value>,
}

impl CityRecord {
    /// Build a record from its textual coordinates
    ///
    /// Fails with `MalformedCoordinate` if either value is not a valid
    /// decimal degree.
    pub fn new(
        name: impl Into<String>,
        lat: impl Into<String>,
        long: impl Into<String>,
    ) -> crate::error::Result<Self> {
        let lat = lat.into();
        let long = long.into();
        let coords = Coordinates::parse(&lat, &long)?;

        Ok(Self {
            name: name.into(),
            lat,
            long,
            coords,
            extra: Map::new(),
        })
    }

    /// Attach pass-through fields
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }
}

/// Immutable, ordered collection of cities
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    records: Vec<CityRecord>,
}

impl Gazetteer {
    /// Create a gazetteer from already-resolved records, keeping their order
    pub fn from_records(records: Vec<CityRecord>) -> Self {
        Self { records }
    }

    /// All records in source order
    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    /// Iterate over records in source order
    pub fn iter(&self) -> std::slice::Iter<'_, CityRecord> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the gazetteer is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
