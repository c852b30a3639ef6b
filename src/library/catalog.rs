//! Catalog of all known shows.
//!
//! Shows are kept most recently added first. Lookups are linear scans by
//! exact (case-sensitive) name.

use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::domain::{DomainError, Episode, Season, Show, TimeOfDay};

/// Errors that can occur with the show catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Episode '{title}' already exists in season {season}")]
    DuplicateEpisode { title: String, season: i32 },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CatalogError {
    fn show_not_found(name: &str) -> Self {
        Self::NotFound {
            entity: "Show",
            key: name.to_string(),
        }
    }

    fn season_not_found(show_name: &str, number: i32) -> Self {
        Self::NotFound {
            entity: "Season",
            key: format!("{} #{}", show_name, number),
        }
    }
}

/// Result of merging a show into the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The show was not cataloged and has been added
    ShowCreated,

    /// The show existed; its first season was added along with the episode
    SeasonCreated,

    /// Show and season existed; the episode was appended
    EpisodeAdded,

    /// Nothing new to store
    Unchanged,
}

impl MergeOutcome {
    /// Check if the catalog was modified
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Catalog of shows
#[derive(Debug, Clone, Default)]
pub struct ShowCatalog {
    shows: VecDeque<Show>,
}

impl ShowCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a show by name
    pub fn find(&self, name: &str) -> Option<&Show> {
        self.shows.iter().find(|s| s.name() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Show> {
        self.shows.iter_mut().find(|s| s.name() == name)
    }

    /// Merge a show into the catalog.
    ///
    /// Only the first season of `show` and the first episode of that season
    /// are considered. Whatever already exists (show, season, episode title)
    /// is left untouched.
    pub fn merge(&mut self, show: &Show) -> Result<MergeOutcome, CatalogError> {
        let incoming_season = show.first_season();
        let incoming_episode = incoming_season.and_then(Season::first_episode);

        let position = self.shows.iter().position(|s| s.name() == show.name());
        let Some(index) = position else {
            let mut created = Show::new(show.name())?;
            if let Some(season) = incoming_season {
                let mut shell = Season::new(season.number(), season.release_date());
                if let Some(episode) = incoming_episode {
                    shell.enqueue_episode(episode.try_clone()?)?;
                }
                created.add_season(&shell)?;
            }

            self.shows.try_reserve(1).map_err(DomainError::from)?;
            self.shows.push_front(created);
            debug!(show = show.name(), "Show added to catalog");
            return Ok(MergeOutcome::ShowCreated);
        };

        let (Some(season), Some(episode)) = (incoming_season, incoming_episode) else {
            return Ok(MergeOutcome::Unchanged);
        };
        let existing = &mut self.shows[index];

        let season_added = existing
            .add_season(&Season::new(season.number(), season.release_date()))?
            .is_new();

        let target = existing
            .find_season_mut(season.number())
            .ok_or_else(|| CatalogError::season_not_found(show.name(), season.number()))?;

        // A freshly added season is empty, so a hit here means a re-merge
        if target.find_episode(episode.title()).is_some() {
            return Ok(MergeOutcome::Unchanged);
        }

        target.enqueue_episode(episode.try_clone()?)?;
        debug!(
            show = show.name(),
            season = season.number(),
            episode = episode.title(),
            "Episode merged into catalog"
        );

        Ok(if season_added {
            MergeOutcome::SeasonCreated
        } else {
            MergeOutcome::EpisodeAdded
        })
    }

    /// Add a copy of `episode` to an existing season of an existing show
    pub fn add_episode(
        &mut self,
        show_name: &str,
        season_number: i32,
        episode: &Episode,
    ) -> Result<(), CatalogError> {
        let show = self
            .find_mut(show_name)
            .ok_or_else(|| CatalogError::show_not_found(show_name))?;

        let season = show
            .find_season_mut(season_number)
            .ok_or_else(|| CatalogError::season_not_found(show_name, season_number))?;

        if season.find_episode(episode.title()).is_some() {
            return Err(CatalogError::DuplicateEpisode {
                title: episode.title().to_string(),
                season: season_number,
            });
        }

        season.enqueue_episode(episode.try_clone()?)?;
        Ok(())
    }

    /// Total duration of one season
    pub fn season_total_duration(
        &self,
        show_name: &str,
        season_number: i32,
    ) -> Result<TimeOfDay, CatalogError> {
        let show = self
            .find(show_name)
            .ok_or_else(|| CatalogError::show_not_found(show_name))?;

        let season = show
            .find_season(season_number)
            .ok_or_else(|| CatalogError::season_not_found(show_name, season_number))?;

        Ok(season.total_duration())
    }

    /// Average episode rating of one season.
    ///
    /// Returns `0.0` when the show or season is unknown or has no episodes.
    pub fn season_average_rating(&self, show_name: &str, season_number: i32) -> f32 {
        self.find(show_name)
            .and_then(|show| show.find_season(season_number))
            .map(Season::average_rating)
            .unwrap_or(0.0)
    }

    /// Get the number of shows
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Shows, most recently added first
    pub fn shows(&self) -> impl Iterator<Item = &Show> {
        self.shows.iter()
    }

    /// Drop every show
    pub fn clear(&mut self) {
        self.shows.clear();
    }
}

impl fmt::Display for ShowCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for show in &self.shows {
            write!(f, "{}", show)?;
        }
        Ok(())
    }
}
