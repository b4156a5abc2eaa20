use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{FieldError, Validate};
use crate::domain::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCreator {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Network name to profile link, e.g. `"twitter" -> "https://..."`.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

impl Validate for NewCreator {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: DocumentId,
    pub name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub social: BTreeMap<String, String>,
}

impl Creator {
    #[must_use]
    pub fn from_new(id: DocumentId, new: NewCreator) -> Self {
        Self {
            id,
            name: new.name,
            avatar_url: new.avatar_url,
            bio: new.bio,
            social: new.social,
        }
    }
}
