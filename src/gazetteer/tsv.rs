//! TSV to JSON conversion
//!
//! Turns a GeoNames-style tab-separated dump (header line first) into the
//! JSON array of flat objects that the gazetteer loader consumes.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::info;

/// Convert TSV text into a list of JSON objects
///
/// Each non-empty line after the header becomes one object keyed by the
/// header columns, in header order. Columns missing from a short line are
/// omitted; extra trailing columns are ignored.
pub fn tsv_to_records(tsv: &str) -> Result<Vec<Value>> {
    let mut lines = tsv.lines();

    let headers: Vec<&str> = match lines.next() {
        Some(header) if !header.trim().is_empty() => header.split('\t').collect(),
        _ => return Err(Error::DataSourceUnavailable("TSV input has no header line".to_string())),
    };

    let records = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let object: Map<String, Value> = headers
                .iter()
                .zip(line.split('\t'))
                .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
                .collect();
            Value::Object(object)
        })
        .collect();

    Ok(records)
}

/// Convert a TSV file into a pretty-printed JSON file
///
/// Returns the number of records written.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let tsv = fs::read_to_string(input).map_err(|e| {
        Error::DataSourceUnavailable(format!("Failed to read {}: {}", input.display(), e))
    })?;

    let records = tsv_to_records(&tsv)?;
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(output, json)?;

    info!(
        "Converted {} records from {} to {}",
        records.len(),
        input.display(),
        output.display()
    );

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::Gazetteer;
    use tempfile::TempDir;

    const SAMPLE: &str = "id\tname\tlat\tlong\tpopulation\n\
                          6167865\tToronto\t43.70011\t-79.4163\t4612191\n\
                          5128581\tNew York City\t40.71427\t-74.00597\t8175133\n";

    #[test]
    fn test_tsv_to_records() {
        let records = tsv_to_records(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0]["name"], "Toronto");
        assert_eq!(records[1]["lat"], "40.71427");
        assert_eq!(records[1]["population"], "8175133");
    }

    #[test]
    fn test_keys_follow_header_order() {
        let records = tsv_to_records(SAMPLE).unwrap();
        let keys: Vec<&String> = records[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["id", "name", "lat", "long", "population"]);
    }

    #[test]
    fn test_crlf_and_short_lines() {
        let tsv = "name\tlat\tlong\r\nToronto\t43.7\t-79.4\r\nShort\t1\r\n\r\n";
        let records = tsv_to_records(tsv).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["long"], "-79.4");
        assert!(records[1].get("long").is_none());
    }

    #[test]
    fn test_missing_header() {
        assert!(tsv_to_records("").is_err());
    }

    #[test]
    fn test_convert_file_feeds_loader() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("cities.tsv");
        let output = dir.path().join("cities.json");
        fs::write(&input, SAMPLE).unwrap();

        let count = convert_file(&input, &output).unwrap();
        assert_eq!(count, 2);

        let gazetteer = Gazetteer::load(&output).unwrap();
        assert_eq!(gazetteer.len(), 2);
        assert_eq!(gazetteer.records()[1].name, "New York City");
        assert_eq!(
            gazetteer.records()[0].extra.get("population"),
            Some(&Value::from("4612191"))
        );
    }
}
