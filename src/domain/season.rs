//! A season and its queue of episodes.
//!
//! Episodes are kept in arrival order. The queue does not deduplicate on its
//! own; callers that need unique titles check with [`Season::find_episode`]
//! first.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::episode::Episode;
use super::error::DomainError;
use super::time::{Date, TimeOfDay};

/// A numbered season with an append-only episode queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    number: i32,
    release_date: Date,
    episodes: Vec<Episode>,
}

impl Season {
    /// Create an empty season
    pub fn new(number: i32, release_date: Date) -> Self {
        Self {
            number,
            release_date,
            episodes: Vec::new(),
        }
    }

    /// Deep copy of the season and every episode, in source order
    pub fn try_clone(&self) -> Result<Self, DomainError> {
        let mut copy = Self::new(self.number, self.release_date);
        copy.episodes.try_reserve_exact(self.episodes.len())?;
        for episode in &self.episodes {
            copy.episodes.push(episode.try_clone()?);
        }
        Ok(copy)
    }

    /// Append an episode at the tail of the queue
    pub fn enqueue_episode(&mut self, episode: Episode) -> Result<(), DomainError> {
        self.episodes.try_reserve(1)?;
        self.episodes.push(episode);
        Ok(())
    }

    /// Find an episode by exact title
    pub fn find_episode(&self, title: &str) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.title() == title)
    }

    /// Sum of all episode durations, minutes carried into hours
    pub fn total_duration(&self) -> TimeOfDay {
        self.episodes
            .iter()
            .fold(TimeOfDay::ZERO, |acc, e| acc + e.duration())
    }

    /// Mean episode rating, `0.0` for a season without episodes
    pub fn average_rating(&self) -> f32 {
        if self.episodes.is_empty() {
            return 0.0;
        }

        let sum: f32 = self.episodes.iter().map(Episode::rating).sum();
        sum / self.episodes.len() as f32
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn release_date(&self) -> Date {
        self.release_date
    }

    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    /// Episodes in arrival order
    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.episodes.iter()
    }

    pub fn first_episode(&self) -> Option<&Episode> {
        self.episodes.first()
    }

    /// Drop every episode
    pub fn clear(&mut self) {
        self.episodes.clear();
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Season {} (Release: {})", self.number, self.release_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(number: i32, title: &str, minutes: u32, rating: f32) -> Episode {
        Episode::new(number, title, TimeOfDay::new(0, minutes), rating).unwrap()
    }

    #[test]
    fn test_enqueue_keeps_arrival_order() {
        let mut season = Season::new(1, Date::new(1, 1, 2020));
        season.enqueue_episode(episode(1, "First", 30, 7.0)).unwrap();
        season.enqueue_episode(episode(2, "Second", 30, 8.0)).unwrap();

        let titles: Vec<_> = season.episodes().map(Episode::title).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(season.episode_count(), 2);
    }

    #[test]
    fn test_enqueue_does_not_deduplicate() {
        let mut season = Season::new(1, Date::default());
        season.enqueue_episode(episode(1, "Same", 30, 7.0)).unwrap();
        season.enqueue_episode(episode(1, "Same", 30, 7.0)).unwrap();
        assert_eq!(season.episode_count(), 2);
    }

    #[test]
    fn test_find_episode_is_case_sensitive() {
        let mut season = Season::new(1, Date::default());
        season.enqueue_episode(episode(1, "Pilot", 30, 7.0)).unwrap();

        assert!(season.find_episode("Pilot").is_some());
        assert!(season.find_episode("pilot").is_none());
    }

    #[test]
    fn test_total_duration_rollup() {
        let mut season = Season::new(1, Date::default());
        season.enqueue_episode(episode(1, "A", 50, 7.0)).unwrap();
        season.enqueue_episode(episode(2, "B", 40, 7.0)).unwrap();

        assert_eq!(season.total_duration(), TimeOfDay::new(1, 30));
    }

    #[test]
    fn test_average_rating() {
        let mut season = Season::new(1, Date::default());
        assert_eq!(season.average_rating(), 0.0);

        season.enqueue_episode(episode(1, "A", 30, 6.0)).unwrap();
        season.enqueue_episode(episode(2, "B", 30, 9.0)).unwrap();
        assert!((season.average_rating() - 7.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut source = Season::new(4, Date::new(2, 9, 2019));
        source.enqueue_episode(episode(1, "A", 30, 6.0)).unwrap();
        source.enqueue_episode(episode(2, "B", 30, 9.0)).unwrap();

        let copy = source.try_clone().unwrap();
        source.clear();
        drop(source);

        assert_eq!(copy.number(), 4);
        assert_eq!(copy.release_date(), Date::new(2, 9, 2019));
        let titles: Vec<_> = copy.episodes().map(Episode::title).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_clear_twice() {
        let mut season = Season::new(1, Date::default());
        season.enqueue_episode(episode(1, "A", 30, 6.0)).unwrap();
        season.clear();
        season.clear();
        assert_eq!(season.episode_count(), 0);
    }
}
