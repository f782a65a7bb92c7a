// Restricted field-path selector for raw data queries
//
// The raw query operation accepts a dot-separated path over the
// serialized forecast, e.g.
// `properties.timeseries.0.data.instant.details.air_temperature`.
// Paths are the entire query language: there is no way to express
// computation, so query text can never become executable code.
use serde_json::Value;

use crate::domain::error::WeatherError;

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// A parsed, whitelisted field path
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPath {
    segments: Vec<Segment>,
    raw: String,
}

impl FieldPath {
    /// Parse query text into a path. Each segment must be alphanumeric
    /// or underscore; purely numeric segments index into arrays.
    pub fn parse(query: &str) -> Result<Self, WeatherError> {
        let raw = query.trim();
        if raw.is_empty() {
            return Err(WeatherError::Query("query must not be empty".to_string()));
        }

        let segments = raw
            .split('.')
            .map(|segment| {
                if segment.is_empty()
                    || !segment
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    return Err(WeatherError::Query(format!(
                        "unsupported path segment '{segment}'"
                    )));
                }
                Ok(match segment.parse::<usize>() {
                    Ok(index) => Segment::Index(index),
                    Err(_) => Segment::Key(segment.to_string()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            segments,
            raw: raw.to_string(),
        })
    }

    /// Walk the path through a JSON value, returning the addressed
    /// subtree. A path into nothing is a query error, not a null.
    pub fn resolve(&self, value: &Value) -> Result<Value, WeatherError> {
        let mut cursor = value;
        for segment in &self.segments {
            cursor = match segment {
                Segment::Key(key) => cursor.get(key.as_str()),
                Segment::Index(index) => cursor.get(index),
            }
            .ok_or_else(|| {
                WeatherError::Query(format!("nothing found at '{}'", self.raw))
            })?;
        }
        Ok(cursor.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "properties": {
                "timeseries": [
                    { "time": "2026-08-07T12:00:00Z", "data": { "instant": { "details": { "air_temperature": 18.5 } } } },
                    { "time": "2026-08-07T13:00:00Z", "data": { "instant": { "details": { "air_temperature": 19.1 } } } }
                ]
            }
        })
    }

    #[test]
    fn test_resolves_nested_field() {
        let path =
            FieldPath::parse("properties.timeseries.1.data.instant.details.air_temperature")
                .unwrap();
        assert_eq!(path.resolve(&document()).unwrap(), json!(19.1));
    }

    #[test]
    fn test_resolves_whole_array() {
        let path = FieldPath::parse("properties.timeseries").unwrap();
        let value = path.resolve(&document()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_rejects_empty_query() {
        assert!(matches!(
            FieldPath::parse("   ").unwrap_err(),
            WeatherError::Query(_)
        ));
    }

    #[test]
    fn test_rejects_expression_like_text() {
        assert!(FieldPath::parse("timeseries.map(t => t.time)").is_err());
        assert!(FieldPath::parse("properties..timeseries").is_err());
        assert!(FieldPath::parse("properties[0]").is_err());
    }

    #[test]
    fn test_unknown_path_is_query_error() {
        let path = FieldPath::parse("properties.nonexistent").unwrap();
        let err = path.resolve(&document()).unwrap_err();
        assert!(err.to_string().contains("properties.nonexistent"));
    }

    #[test]
    fn test_index_out_of_bounds_is_query_error() {
        let path = FieldPath::parse("properties.timeseries.5").unwrap();
        assert!(path.resolve(&document()).is_err());
    }
}
