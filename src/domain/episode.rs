//! A single episode of a season.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{owned_string, DomainError};
use super::time::TimeOfDay;

/// An episode with its own title storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EpisodeRecord")]
pub struct Episode {
    number: i32,
    title: String,
    duration: TimeOfDay,
    rating: f32,
}

/// Serialized form, validated through [`Episode::new`]
#[derive(Deserialize)]
struct EpisodeRecord {
    number: i32,
    title: String,
    duration: TimeOfDay,
    rating: f32,
}

impl TryFrom<EpisodeRecord> for Episode {
    type Error = DomainError;

    fn try_from(record: EpisodeRecord) -> Result<Self, Self::Error> {
        Self::new(record.number, &record.title, record.duration, record.rating)
    }
}

impl Episode {
    /// Create a new episode, copying the title
    pub fn new(
        number: i32,
        title: &str,
        duration: TimeOfDay,
        rating: f32,
    ) -> Result<Self, DomainError> {
        if title.is_empty() {
            return Err(DomainError::InvalidArgument("episode title is empty"));
        }

        Ok(Self {
            number,
            title: owned_string(title)?,
            duration,
            rating,
        })
    }

    /// Deep copy with independent title storage
    pub fn try_clone(&self) -> Result<Self, DomainError> {
        Self::new(self.number, &self.title, self.duration, self.rating)
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> TimeOfDay {
        self.duration
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Episode {}: {} [{}] (Rating: {:.1})",
            self.number, self.title, self.duration, self.rating
        )
    }
}
