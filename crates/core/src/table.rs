//! The immutable in-memory restaurant table and its loader.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::normalize::normalize_text;
use crate::restaurant::Restaurant;

/// Ordered, read-only sequence of normalized restaurant records.
///
/// Cloning shares the underlying records; the table cannot be mutated once
/// built, so any number of queries may read it concurrently.
#[derive(Debug, Clone)]
pub struct RestaurantTable {
    records: Arc<[Restaurant]>,
    /// Normalized city of each record, index-aligned with `records`.
    city_keys: Arc<[String]>,
}

/// Summary of a loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub restaurant_count: usize,
    /// Distinct cities, sorted.
    pub cities: Vec<String>,
}

impl RestaurantTable {
    /// Normalizes and validates `records`, preserving their order.
    ///
    /// Fails if any record carries a non-finite rating or cost.
    pub fn new(records: Vec<Restaurant>) -> Result<Self> {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| validate(index, record).map(Restaurant::normalized))
            .collect::<Result<Vec<_>>>()?;
        let city_keys: Vec<String> = records.iter().map(|r| normalize_text(&r.city)).collect();
        Ok(Self { records: records.into(), city_keys: city_keys.into() })
    }

    /// Loads a dataset file, picking the parser from the file extension.
    ///
    /// `.json` holds an array of records; `.jsonl` and `.ndjson` hold one
    /// record per line.
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| CoreError::Io { path: path.to_path_buf(), source })?;

        let table = match ext.as_str() {
            "json" => Self::from_json(&raw)?,
            "jsonl" | "ndjson" => Self::from_json_lines(&raw)?,
            _ => return Err(CoreError::UnsupportedFormat(path.display().to_string())),
        };
        tracing::info!(records = table.len(), path = %path.display(), "restaurant table loaded");
        Ok(table)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let records: Vec<Restaurant> = serde_json::from_str(raw)?;
        Self::new(records)
    }

    pub fn from_json_lines(raw: &str) -> Result<Self> {
        let mut records = Vec::new();
        for (idx, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(line)
                .map_err(|source| CoreError::JsonLine { line: idx + 1, source })?;
            records.push(record);
        }
        Self::new(records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Restaurant] {
        &self.records
    }

    /// Normalized city of every record, in table order.
    #[must_use]
    pub fn city_keys(&self) -> &[String] {
        &self.city_keys
    }

    #[must_use]
    pub fn stats(&self) -> TableStats {
        let cities: BTreeSet<&str> = self.records.iter().map(|r| r.city.as_str()).collect();
        TableStats {
            restaurant_count: self.records.len(),
            cities: cities.into_iter().map(str::to_owned).collect(),
        }
    }
}

fn validate(index: usize, record: Restaurant) -> Result<Restaurant> {
    let reason = if !record.aggregate_rating.is_finite() {
        Some("aggregate_rating is not a finite number")
    } else if !record.average_cost_for_two.is_finite() {
        Some("average_cost_for_two is not a finite number")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(CoreError::InvalidRecord {
            index,
            name: record.name,
            reason: reason.to_owned(),
        }),
        None => Ok(record),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn record(name: &str, city: &str, rating: f64) -> Restaurant {
        Restaurant {
            name: name.to_owned(),
            address: format!("{name} street"),
            city: city.to_owned(),
            locality: "Central  Area".to_owned(),
            cuisines: "Cafe".to_owned(),
            average_cost_for_two: 500.0,
            aggregate_rating: rating,
        }
    }

    #[test]
    fn test_new_normalizes_and_keeps_order() {
        let table =
            RestaurantTable::new(vec![record("b", "Pune", 4.0), record("a", "Mumbai", 3.0)])
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].name, "b");
        assert_eq!(table.records()[0].locality, "central area");
        assert_eq!(table.records()[1].cuisines, "cafe");
    }

    #[test]
    fn test_new_rejects_nan_rating() {
        let records = vec![record("ok", "Pune", 4.0), record("bad", "Pune", f64::NAN)];
        let err = RestaurantTable::new(records).unwrap_err();
        match err {
            CoreError::InvalidRecord { index, name, .. } => {
                assert_eq!(index, 1);
                assert_eq!(name, "bad");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_city_keys_built_once_per_record() {
        let table = RestaurantTable::new(vec![
            record("a", "  New   DELHI ", 4.0),
            record("b", "Pune", 3.0),
        ])
        .unwrap();
        assert_eq!(table.city_keys(), ["new delhi", "pune"]);
        assert_eq!(table.records()[0].city, "New   DELHI");
    }

    #[test]
    fn test_stats_distinct_sorted_cities() {
        let table = RestaurantTable::new(vec![
            record("a", "Pune", 4.0),
            record("b", "Mumbai", 3.0),
            record("c", "Pune", 2.0),
        ])
        .unwrap();
        let stats = table.stats();
        assert_eq!(stats.restaurant_count, 3);
        assert_eq!(stats.cities, vec!["Mumbai".to_owned(), "Pune".to_owned()]);
    }

    #[test]
    fn test_load_json_array() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("restaurants.json");
        std::fs::write(
            &path,
            r#"[{"name":"A","address":"x","city":"Mumbai","locality":"Bandra West",
                "cuisines":"North Indian, Chinese","average_cost_for_two":900,"aggregate_rating":4.2}]"#,
        )
        .unwrap();

        let table = RestaurantTable::load(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].locality, "bandra west");
        assert_eq!(table.records()[0].cuisines, "north indian, chinese");
    }

    #[test]
    fn test_load_json_lines_skips_blank_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("restaurants.jsonl");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{"name":"A","city":"Pune","locality":"Baner","average_cost_for_two":300,"aggregate_rating":3.5}}"#
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(
            file,
            r#"{{"name":"B","city":"Pune","locality":"Aundh","average_cost_for_two":700,"aggregate_rating":4.5}}"#
        )
        .unwrap();

        let table = RestaurantTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].name, "B");
    }

    #[test]
    fn test_load_json_lines_reports_line_number() {
        let raw = "{\"name\":\"A\",\"city\":\"Pune\",\"locality\":\"Baner\",\"average_cost_for_two\":1,\"aggregate_rating\":1}\nnot json\n";
        let err = RestaurantTable::from_json_lines(raw).unwrap_err();
        assert!(matches!(err, CoreError::JsonLine { line: 2, .. }));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("restaurants.csv");
        std::fs::write(&path, "name,city\n").unwrap();
        let err = RestaurantTable::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RestaurantTable::load(Path::new("/nonexistent/dinefind/data.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}
