//! A show and its list of seasons.
//!
//! Seasons are ordered most recently added first: [`Show::add_season`]
//! prepends, and [`Show::seasons`] iterates from the newest entry.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{owned_string, DomainError};
use super::season::Season;

/// Result of adding a season to a show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonAdd {
    /// A copy of the season was prepended
    Inserted,

    /// A season with this number already exists; nothing was changed
    AlreadyPresent,
}

impl SeasonAdd {
    /// Check if a new season was stored
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// A named show owning its seasons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShowRecord")]
pub struct Show {
    name: String,
    seasons: VecDeque<Season>,
}

/// Serialized form. Seasons are listed newest first and rebuilt through
/// [`Show::add_season`], so season numbers stay unique.
#[derive(Deserialize)]
struct ShowRecord {
    name: String,
    seasons: Vec<Season>,
}

impl TryFrom<ShowRecord> for Show {
    type Error = DomainError;

    fn try_from(record: ShowRecord) -> Result<Self, Self::Error> {
        let mut show = Show::new(&record.name)?;
        for season in record.seasons.iter().rev() {
            if !show.add_season(season)?.is_new() {
                return Err(DomainError::InvalidArgument("duplicate season number"));
            }
        }
        Ok(show)
    }
}

impl Show {
    /// Create a show with no seasons, copying the name
    pub fn new(name: &str) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidArgument("show name is empty"));
        }

        Ok(Self {
            name: owned_string(name)?,
            seasons: VecDeque::new(),
        })
    }

    /// Deep copy of the name, every season and every episode.
    ///
    /// Season order is preserved. On failure the partial copy is dropped.
    pub fn try_clone(&self) -> Result<Self, DomainError> {
        let mut copy = Self::new(&self.name)?;
        copy.seasons.try_reserve_exact(self.seasons.len())?;
        for season in &self.seasons {
            copy.seasons.push_back(season.try_clone()?);
        }
        Ok(copy)
    }

    /// Add a copy of `season` unless its number is already taken.
    ///
    /// An existing season is left as it is: episodes carried by `season`
    /// are not merged into it.
    pub fn add_season(&mut self, season: &Season) -> Result<SeasonAdd, DomainError> {
        if self.find_season(season.number()).is_some() {
            return Ok(SeasonAdd::AlreadyPresent);
        }

        let copy = season.try_clone()?;
        self.seasons.try_reserve(1)?;
        self.seasons.push_front(copy);
        Ok(SeasonAdd::Inserted)
    }

    /// Find a season by number
    pub fn find_season(&self, number: i32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.number() == number)
    }

    /// Find a season by number for mutation
    pub fn find_season_mut(&mut self, number: i32) -> Option<&mut Season> {
        self.seasons.iter_mut().find(|s| s.number() == number)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn season_count(&self) -> usize {
        self.seasons.len()
    }

    /// Seasons, most recently added first
    pub fn seasons(&self) -> impl Iterator<Item = &Season> {
        self.seasons.iter()
    }

    pub fn first_season(&self) -> Option<&Season> {
        self.seasons.front()
    }

    /// Drop every season (and their episodes), keeping the name
    pub fn clear(&mut self) {
        self.seasons.clear();
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Show: {}", self.name)?;
        writeln!(f, "Number of Seasons: {}", self.seasons.len())?;
        for season in &self.seasons {
            writeln!(f, "    {}", season)?;
            for episode in season.episodes() {
                writeln!(f, "      {}", episode)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Date, Episode, TimeOfDay};

    fn season_with(number: i32, titles: &[&str]) -> Season {
        let mut season = Season::new(number, Date::new(1, 1, 2000 + number));
        for (i, title) in titles.iter().enumerate() {
            let episode = Episode::new(i as i32 + 1, title, TimeOfDay::new(0, 30), 7.0).unwrap();
            season.enqueue_episode(episode).unwrap();
        }
        season
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(Show::new(""), Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_add_season_prepends() {
        let mut show = Show::new("Dark").unwrap();
        show.add_season(&season_with(1, &["Secrets"])).unwrap();
        show.add_season(&season_with(2, &["Beginnings"])).unwrap();

        let numbers: Vec<_> = show.seasons().map(Season::number).collect();
        assert_eq!(numbers, vec![2, 1]);
        assert_eq!(show.season_count(), 2);
    }

    #[test]
    fn test_add_season_is_idempotent_by_number() {
        let mut show = Show::new("Dark").unwrap();
        let first = show.add_season(&season_with(1, &["Secrets"])).unwrap();
        let second = show.add_season(&season_with(1, &["Lies", "Past"])).unwrap();

        assert!(first.is_new());
        assert_eq!(second, SeasonAdd::AlreadyPresent);
        assert_eq!(show.season_count(), 1);

        // The second season's episodes are not merged in
        let season = show.find_season(1).unwrap();
        assert_eq!(season.episode_count(), 1);
        assert!(season.find_episode("Lies").is_none());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut source = Show::new("Dark").unwrap();
        source.add_season(&season_with(1, &["Secrets", "Lies"])).unwrap();
        source.add_season(&season_with(2, &["Beginnings"])).unwrap();

        let copy = source.try_clone().unwrap();
        drop(source);

        assert_eq!(copy.name(), "Dark");
        let numbers: Vec<_> = copy.seasons().map(Season::number).collect();
        assert_eq!(numbers, vec![2, 1]);
        assert_eq!(copy.find_season(1).unwrap().episode_count(), 2);
    }

    #[test]
    fn test_show_display() {
        let mut show = Show::new("Dark").unwrap();
        show.add_season(&season_with(1, &["Secrets"])).unwrap();

        let expected = "Show: Dark\n\
                        Number of Seasons: 1\n    \
                        Season 1 (Release: 01/01/2001)\n      \
                        Episode 1: Secrets [00:30] (Rating: 7.0)\n";
        assert_eq!(show.to_string(), expected);
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let mut show = Show::new("Dark").unwrap();
        show.add_season(&season_with(1, &["Secrets"])).unwrap();
        show.add_season(&season_with(2, &["Beginnings"])).unwrap();

        let json = serde_json::to_string(&show).unwrap();
        let parsed: Show = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, show);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_seasons() {
        let mut show = Show::new("Dark").unwrap();
        show.add_season(&season_with(1, &["Secrets"])).unwrap();
        show.add_season(&season_with(2, &["Beginnings"])).unwrap();

        let mut value = serde_json::to_value(&show).unwrap();
        value["seasons"][0]["number"] = serde_json::json!(1);

        let err = serde_json::from_value::<Show>(value).unwrap_err();
        assert!(err.to_string().contains("duplicate season number"));
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let json = r#"{"name":"","seasons":[]}"#;
        assert!(serde_json::from_str::<Show>(json).is_err());
    }
}
