//! LIFO watch history of films.
//!
//! A film name appears at most once in the stack, anywhere in it.

use thiserror::Error;

use crate::domain::{DomainError, Film};

/// Errors that can occur with the watch stack
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WatchStackError {
    #[error("Film already exists: {0}")]
    AlreadyExists(String),

    #[error("Watch stack is empty")]
    EmptyStructure,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Stack of watched films, most recent on top
#[derive(Debug, Clone, Default)]
pub struct WatchStack {
    // Top of the stack is the last element
    films: Vec<Film>,
}

impl WatchStack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a copy of `film`, rejecting a name already in the stack
    pub fn push(&mut self, film: &Film) -> Result<(), WatchStackError> {
        if self.contains(&film.name) {
            return Err(WatchStackError::AlreadyExists(film.name.clone()));
        }

        let copy = film.try_clone()?;
        self.films.try_reserve(1).map_err(DomainError::from)?;
        self.films.push(copy);
        Ok(())
    }

    /// The most recently pushed film
    pub fn top(&self) -> Option<&Film> {
        self.films.last()
    }

    /// Remove and return the top film
    pub fn pop(&mut self) -> Result<Film, WatchStackError> {
        self.films.pop().ok_or(WatchStackError::EmptyStructure)
    }

    /// Check whether a film with this exact name is in the stack
    pub fn contains(&self, name: &str) -> bool {
        self.films.iter().any(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Films from top to bottom
    pub fn films(&self) -> impl Iterator<Item = &Film> {
        self.films.iter().rev()
    }

    /// Drop every film
    pub fn clear(&mut self) {
        self.films.clear();
    }
}
