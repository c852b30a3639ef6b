//! Film records kept in the watch history.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{owned_string, DomainError};
use super::time::{Date, TimeOfDay};

/// Film genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmGenre {
    Action,
    Comedy,
    Drama,
    Horror,
    ScienceFiction,
    Documentary,
}

impl FilmGenre {
    /// Genre for a numeric record code (0-based)
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Action),
            1 => Some(Self::Comedy),
            2 => Some(Self::Drama),
            3 => Some(Self::Horror),
            4 => Some(Self::ScienceFiction),
            5 => Some(Self::Documentary),
            _ => None,
        }
    }
}

impl fmt::Display for FilmGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilmGenre::Action => write!(f, "action"),
            FilmGenre::Comedy => write!(f, "comedy"),
            FilmGenre::Drama => write!(f, "drama"),
            FilmGenre::Horror => write!(f, "horror"),
            FilmGenre::ScienceFiction => write!(f, "science_fiction"),
            FilmGenre::Documentary => write!(f, "documentary"),
        }
    }
}

impl FromStr for FilmGenre {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "action" => Ok(FilmGenre::Action),
            "comedy" => Ok(FilmGenre::Comedy),
            "drama" => Ok(FilmGenre::Drama),
            "horror" => Ok(FilmGenre::Horror),
            "science_fiction" | "scifi" | "sci-fi" => Ok(FilmGenre::ScienceFiction),
            "documentary" => Ok(FilmGenre::Documentary),
            _ => anyhow::bail!("Unknown film genre: {}", s),
        }
    }
}

/// A film. Only the name matters to the watch stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FilmRecord")]
pub struct Film {
    pub name: String,
    pub duration: TimeOfDay,
    pub genre: FilmGenre,
    pub release: Date,
    pub rating: f32,
    pub is_adult: bool,
}

#[derive(Deserialize)]
struct FilmRecord {
    name: String,
    duration: TimeOfDay,
    genre: FilmGenre,
    release: Date,
    rating: f32,
    is_adult: bool,
}

impl TryFrom<FilmRecord> for Film {
    type Error = DomainError;

    fn try_from(record: FilmRecord) -> Result<Self, Self::Error> {
        Self::new(
            &record.name,
            record.duration,
            record.genre,
            record.release,
            record.rating,
            record.is_adult,
        )
    }
}

impl Film {
    /// Create a new film, copying the name
    pub fn new(
        name: &str,
        duration: TimeOfDay,
        genre: FilmGenre,
        release: Date,
        rating: f32,
        is_adult: bool,
    ) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidArgument("film name is empty"));
        }

        Ok(Self {
            name: owned_string(name)?,
            duration,
            genre,
            release,
            rating,
            is_adult,
        })
    }

    /// Deep copy with independent name storage
    pub fn try_clone(&self) -> Result<Self, DomainError> {
        Self::new(
            &self.name,
            self.duration,
            self.genre,
            self.release,
            self.rating,
            self.is_adult,
        )
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} ({}) (Rating: {:.1}){}",
            self.name,
            self.duration,
            self.genre,
            self.release,
            self.rating,
            if self.is_adult { " +18" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_codes() {
        assert_eq!(FilmGenre::from_code(0), Some(FilmGenre::Action));
        assert_eq!(FilmGenre::from_code(4), Some(FilmGenre::ScienceFiction));
        assert_eq!(FilmGenre::from_code(6), None);
        assert_eq!(FilmGenre::from_code(-1), None);
    }

    #[test]
    fn test_genre_from_str() {
        assert_eq!("Drama".parse::<FilmGenre>().unwrap(), FilmGenre::Drama);
        assert_eq!("sci-fi".parse::<FilmGenre>().unwrap(), FilmGenre::ScienceFiction);
        assert!("western".parse::<FilmGenre>().is_err());
    }

    #[test]
    fn test_film_display() {
        let film = Film::new(
            "Alien",
            TimeOfDay::new(1, 57),
            FilmGenre::Horror,
            Date::new(25, 5, 1979),
            8.5,
            true,
        )
        .unwrap();
        assert_eq!(
            film.to_string(),
            "Alien [01:57] horror (25/05/1979) (Rating: 8.5) +18"
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Film::new(
            "",
            TimeOfDay::ZERO,
            FilmGenre::Comedy,
            Date::default(),
            0.0,
            false,
        );
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let film = Film::new(
            "Heat",
            TimeOfDay::new(2, 50),
            FilmGenre::Action,
            Date::new(15, 12, 1995),
            8.3,
            false,
        )
        .unwrap();
        let json = serde_json::to_string(&film).unwrap();
        assert_eq!(serde_json::from_str::<Film>(&json).unwrap(), film);

        let empty = json.replace("\"Heat\"", "\"\"");
        assert!(serde_json::from_str::<Film>(&empty).is_err());
    }
}
