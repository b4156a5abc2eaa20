use serde::{Deserialize, Serialize};

use super::{FieldError, Validate, finish};
use crate::domain::DocumentId;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

#[allow(clippy::unnecessary_wraps)]
const fn default_rating() -> Option<f64> {
    Some(0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSeries {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Omitted means 0.0; an explicit `null` is kept as "unrated".
    #[serde(default = "default_rating")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub creator_ids: Vec<String>,
}

impl NewSeries {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            cover_url: None,
            banner_url: None,
            genres: Vec::new(),
            rating: default_rating(),
            featured: false,
            creator_ids: Vec::new(),
        }
    }
}

impl Validate for NewSeries {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(rating) = self.rating
            && !(MIN_RATING..=MAX_RATING).contains(&rating)
        {
            errors.push(FieldError::new(
                "rating",
                format!("must be between {MIN_RATING} and {MAX_RATING}, got {rating}"),
            ));
        }

        finish(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: DocumentId,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub banner_url: Option<String>,
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    pub featured: bool,
    pub creator_ids: Vec<String>,
}

impl Series {
    #[must_use]
    pub fn from_new(id: DocumentId, new: NewSeries) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            cover_url: new.cover_url,
            banner_url: new.banner_url,
            genres: new.genres,
            rating: new.rating,
            featured: new.featured,
            creator_ids: new.creator_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_take_defaults() {
        let series: NewSeries = serde_json::from_str(r#"{"title": "Test Show"}"#).unwrap();
        assert_eq!(series, NewSeries::titled("Test Show"));
        assert_eq!(series.rating, Some(0.0));
        assert!(series.genres.is_empty());
        assert!(!series.featured);
    }

    #[test]
    fn explicit_null_rating_is_kept() {
        let series: NewSeries =
            serde_json::from_str(r#"{"title": "Unrated", "rating": null}"#).unwrap();
        assert_eq!(series.rating, None);
        assert!(series.validate().is_ok());
    }

    #[test]
    fn missing_title_fails_to_parse() {
        assert!(serde_json::from_str::<NewSeries>(r#"{"rating": 3}"#).is_err());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for rating in [0.0, 2.5, 5.0] {
            let series = NewSeries {
                rating: Some(rating),
                ..NewSeries::titled("ok")
            };
            assert!(series.validate().is_ok(), "{rating} should be accepted");
        }

        for rating in [-0.1, 5.01, 7.0] {
            let series = NewSeries {
                rating: Some(rating),
                ..NewSeries::titled("bad")
            };
            let errors = series.validate().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "rating");
        }
    }

    #[test]
    fn stored_series_serializes_id_as_string() {
        let series = Series::from_new(DocumentId::new(3), NewSeries::titled("Test Show"));
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["id"], "3");
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["rating"], 0.0);
        assert_eq!(json["creator_ids"], serde_json::json!([]));
    }
}
