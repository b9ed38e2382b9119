//! Gazetteer loading from JSON
//!
//! The data source is a JSON array of flat objects carrying at least
//! `name`, `lat` and `long`. Records that cannot be used for ranking are
//! dropped here so the engine only ever sees valid coordinates.

use crate::error::{Error, Result};
use crate::gazetteer::{CityRecord, Gazetteer};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Counts of records kept and dropped during a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Records that made it into the gazetteer
    pub kept: usize,
    /// Entries that were not JSON objects
    pub skipped_not_object: usize,
    /// Records whose name was missing or not a string
    pub skipped_name: usize,
    /// Records with missing, non-numeric or out-of-range coordinates
    pub skipped_coordinates: usize,
}

impl LoadStats {
    /// Total number of dropped entries
    pub fn skipped(&self) -> usize {
        self.skipped_not_object + self.skipped_name + self.skipped_coordinates
    }
}

impl Gazetteer {
    /// Load a gazetteer from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::DataSourceUnavailable(format!("Failed to open {}: {}", path.display(), e))
        })?;

        info!("Loading gazetteer from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// Load a gazetteer from any JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let values: Vec<Value> = serde_json::from_reader(reader).map_err(|e| {
            Error::DataSourceUnavailable(format!("Failed to parse gazetteer: {}", e))
        })?;
        Ok(Self::from_values(values))
    }

    /// Load a gazetteer from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let values: Vec<Value> = serde_json::from_str(json).map_err(|e| {
            Error::DataSourceUnavailable(format!("Failed to parse gazetteer: {}", e))
        })?;
        Ok(Self::from_values(values))
    }

    fn from_values(values: Vec<Value>) -> Self {
        let (records, stats) = decode_records(values);
        info!(
            kept = stats.kept,
            skipped = stats.skipped(),
            "Gazetteer loaded"
        );
        Self::from_records(records)
    }
}

/// Why a source entry was dropped
enum Rejection {
    NotObject,
    Name,
    Coordinates(String),
}

/// Decode raw JSON entries into records, preserving source order
pub fn decode_records(values: Vec<Value>) -> (Vec<CityRecord>, LoadStats) {
    let mut stats = LoadStats::default();
    let mut records = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        match decode_record(value) {
            Ok(record) => {
                stats.kept += 1;
                records.push(record);
            }
            Err(Rejection::NotObject) => {
                debug!(index, "Skipping entry: not an object");
                stats.skipped_not_object += 1;
            }
            Err(Rejection::Name) => {
                debug!(index, "Skipping record: name is missing or not a string");
                stats.skipped_name += 1;
            }
            Err(Rejection::Coordinates(reason)) => {
                debug!(index, %reason, "Skipping record: bad coordinates");
                stats.skipped_coordinates += 1;
            }
        }
    }

    (records, stats)
}

fn decode_record(value: Value) -> std::result::Result<CityRecord, Rejection> {
    let Value::Object(mut fields) = value else {
        return Err(Rejection::NotObject);
    };

    let name = match fields.shift_remove("name") {
        Some(Value::String(name)) => name,
        _ => return Err(Rejection::Name),
    };

    let lat = coordinate_text(&mut fields, "lat")?;
    let long = coordinate_text(&mut fields, "long")?;

    CityRecord::new(name, lat, long)
        .map(|record| record.with_extra(fields))
        .map_err(|e| Rejection::Coordinates(e.to_string()))
}

/// Take a coordinate field as text; numbers keep their JSON spelling
fn coordinate_text(
    fields: &mut Map<String, Value>,
    key: &str,
) -> std::result::Result<String, Rejection> {
    match fields.shift_remove(key) {
        Some(Value::String(text)) => Ok(text),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(Rejection::Coordinates(format!(
            "{} has unsupported value {}",
            key, other
        ))),
        None => Err(Rejection::Coordinates(format!("{} is missing", key))),
    }
}
