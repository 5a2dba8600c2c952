//! Dataset records and the flat summaries returned to callers.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_text;

/// One establishment from the dataset.
///
/// Field names follow the dataset columns. Values read from disk are
/// normalized by [`crate::RestaurantTable`] before any query sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    pub locality: String,
    /// Comma-separated cuisine list, e.g. `"north indian, chinese"`.
    #[serde(default)]
    pub cuisines: String,
    pub average_cost_for_two: f64,
    pub aggregate_rating: f64,
}

impl Restaurant {
    /// Returns the record with its text fields put into canonical form.
    ///
    /// `cuisines` and `locality` are lowercased and whitespace-collapsed;
    /// `name`, `address` and `city` are only trimmed.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            address: self.address.trim().to_owned(),
            city: self.city.trim().to_owned(),
            locality: normalize_text(&self.locality),
            cuisines: normalize_text(&self.cuisines),
            average_cost_for_two: self.average_cost_for_two,
            aggregate_rating: self.aggregate_rating,
        }
    }

    #[must_use]
    pub fn summary(&self) -> RestaurantSummary {
        RestaurantSummary {
            name: self.name.clone(),
            address: self.address.clone(),
            locality: self.locality.clone(),
            cuisines: self.cuisines.clone(),
            average_cost_for_two: self.average_cost_for_two,
            aggregate_rating: self.aggregate_rating,
        }
    }
}

/// Flat record returned by queries; omits `city`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub name: String,
    pub address: String,
    pub locality: String,
    pub cuisines: String,
    pub average_cost_for_two: f64,
    pub aggregate_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_leaves_city_case_alone() {
        let r = Restaurant {
            name: " Trishna ".to_owned(),
            address: "Kala Ghoda".to_owned(),
            city: " Mumbai".to_owned(),
            locality: "  Fort   Area ".to_owned(),
            cuisines: "Seafood,  Mangalorean".to_owned(),
            average_cost_for_two: 2500.0,
            aggregate_rating: 4.6,
        }
        .normalized();

        assert_eq!(r.name, "Trishna");
        assert_eq!(r.city, "Mumbai");
        assert_eq!(r.locality, "fort area");
        assert_eq!(r.cuisines, "seafood, mangalorean");
    }

    #[test]
    fn missing_cuisines_deserializes_empty() {
        let json = r#"{"name":"X","city":"Pune","locality":"Baner",
            "average_cost_for_two":400,"aggregate_rating":3.9}"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(r.cuisines, "");
        assert_eq!(r.address, "");
        assert!((r.average_cost_for_two - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_serializes_exactly_six_fields() {
        let r = Restaurant {
            name: "A".to_owned(),
            address: "addr".to_owned(),
            city: "Mumbai".to_owned(),
            locality: "bandra".to_owned(),
            cuisines: "cafe".to_owned(),
            average_cost_for_two: 800.0,
            aggregate_rating: 4.1,
        };
        let value = serde_json::to_value(r.summary()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 6);
        assert!(!keys.contains(&"city"));
        assert!(keys.contains(&"aggregate_rating"));
    }
}
