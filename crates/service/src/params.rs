//! Raw query parameters as they arrive from HTTP or the command line.

use dinefind_core::{CuisineFilter, RestaurantQuery};
use serde::Deserialize;

use crate::ServiceError;

/// Unparsed filter values. Cost bounds stay textual until [`Self::into_query`]
/// so both front ends report malformed numbers the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecommendParams {
    pub city: Option<String>,
    pub locality: Option<String>,
    pub min_cost: Option<String>,
    pub max_cost: Option<String>,
    pub cuisine: Option<String>,
}

impl RecommendParams {
    pub fn into_query(self) -> Result<RestaurantQuery, ServiceError> {
        Ok(RestaurantQuery {
            min_cost: parse_cost("min_cost", self.min_cost.as_deref())?,
            max_cost: parse_cost("max_cost", self.max_cost.as_deref())?,
            city: self.city,
            locality: self.locality,
            cuisine: self.cuisine.as_deref().and_then(CuisineFilter::parse),
        })
    }
}

/// Parses an optional cost bound.
///
/// Absent or blank input means "no bound". Anything else must be a finite
/// decimal number.
pub fn parse_cost(field: &str, raw: Option<&str>) -> Result<Option<f64>, ServiceError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ServiceError::InvalidInput(format!(
            "{field} must be a finite number, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cost_blank_is_none() {
        assert_eq!(parse_cost("min_cost", None).unwrap(), None);
        assert_eq!(parse_cost("min_cost", Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_parse_cost_decimal() {
        assert_eq!(parse_cost("max_cost", Some(" 750.5 ")).unwrap(), Some(750.5));
        assert_eq!(parse_cost("max_cost", Some("1200")).unwrap(), Some(1200.0));
    }

    #[test]
    fn test_parse_cost_rejects_garbage() {
        let err = parse_cost("min_cost", Some("cheap")).unwrap_err();
        assert!(err.to_string().contains("min_cost"));
        assert!(err.to_string().contains("cheap"));
    }

    #[test]
    fn test_parse_cost_rejects_nan_and_inf() {
        assert!(parse_cost("min_cost", Some("NaN")).is_err());
        assert!(parse_cost("max_cost", Some("inf")).is_err());
    }

    #[test]
    fn test_into_query_maps_every_field() {
        let params = RecommendParams {
            city: Some("Mumbai".to_owned()),
            locality: Some("Bandra West".to_owned()),
            min_cost: Some("200".to_owned()),
            max_cost: Some("".to_owned()),
            cuisine: Some("Chinese, Thai".to_owned()),
        };
        let query = params.into_query().unwrap();
        assert_eq!(query.city.as_deref(), Some("Mumbai"));
        assert_eq!(query.locality.as_deref(), Some("Bandra West"));
        assert_eq!(query.min_cost, Some(200.0));
        assert_eq!(query.max_cost, None);
        assert_eq!(query.cuisine.unwrap().tokens(), ["chinese", "thai"]);
    }

    #[test]
    fn test_into_query_blank_cuisine_is_absent() {
        let params = RecommendParams { cuisine: Some(" ,".to_owned()), ..Default::default() };
        assert!(params.into_query().unwrap().cuisine.is_none());
    }
}
