use serde::{Deserialize, Serialize};

use super::{FieldError, Validate, finish};
use crate::domain::DocumentId;

#[allow(clippy::unnecessary_wraps)]
const fn default_season() -> Option<i32> {
    Some(1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEpisode {
    /// Soft reference to a series; never checked for existence.
    pub series_id: String,
    pub title: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub thumb_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    pub episode_number: i32,
    #[serde(default = "default_season")]
    pub season: Option<i32>,
    #[serde(default)]
    pub duration_sec: Option<i32>,
}

impl NewEpisode {
    pub fn new(series_id: impl Into<String>, title: impl Into<String>, episode_number: i32) -> Self {
        Self {
            series_id: series_id.into(),
            title: title.into(),
            synopsis: None,
            thumb_url: None,
            video_url: None,
            episode_number,
            season: default_season(),
            duration_sec: None,
        }
    }
}

impl Validate for NewEpisode {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.episode_number < 1 {
            errors.push(FieldError::new(
                "episode_number",
                format!("must be at least 1, got {}", self.episode_number),
            ));
        }

        if let Some(season) = self.season
            && season < 1
        {
            errors.push(FieldError::new(
                "season",
                format!("must be at least 1, got {season}"),
            ));
        }

        if let Some(duration) = self.duration_sec
            && duration < 0
        {
            errors.push(FieldError::new(
                "duration_sec",
                format!("must not be negative, got {duration}"),
            ));
        }

        finish(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: DocumentId,
    pub series_id: String,
    pub title: String,
    pub synopsis: Option<String>,
    pub thumb_url: Option<String>,
    pub video_url: Option<String>,
    pub episode_number: i32,
    pub season: Option<i32>,
    pub duration_sec: Option<i32>,
}

impl Episode {
    #[must_use]
    pub fn from_new(id: DocumentId, new: NewEpisode) -> Self {
        Self {
            id,
            series_id: new.series_id,
            title: new.title,
            synopsis: new.synopsis,
            thumb_url: new.thumb_url,
            video_url: new.video_url,
            episode_number: new.episode_number,
            season: new.season,
            duration_sec: new.duration_sec,
        }
    }
}
