//! Typed records for each collection.
//!
//! `New*` types are what clients send and what gets inserted; the plain types
//! are stored records carrying their `id`.

pub mod creator;
pub mod episode;
pub mod series;

pub use creator::{Creator, NewCreator};
pub use episode::{Episode, NewEpisode};
pub use series::{NewSeries, Series};

use serde::Serialize;
use std::fmt;

/// A single rejected field of a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Field-level constraints that serde alone cannot express.
pub trait Validate {
    /// Returns every violated constraint, or `Ok` when the payload may be stored.
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

pub(crate) fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
