//! Delimited text records.
//!
//! A record is one line split on a single-character delimiter. Fields are
//! trimmed; typed accessors report the position of a bad field.

use thiserror::Error;

use crate::domain::{DomainError, TemporalParseError};

/// Errors raised while turning a record into domain values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expected {expected} fields, found {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("Field {pos} is missing")]
    MissingField { pos: usize },

    #[error("Field {pos} is not an integer: '{value}'")]
    InvalidInteger { pos: usize, value: String },

    #[error("Field {pos} is not a number: '{value}'")]
    InvalidReal { pos: usize, value: String },

    #[error("Field {pos} is not a boolean: '{value}'")]
    InvalidBool { pos: usize, value: String },

    #[error("Invalid date: {0}")]
    InvalidDate(TemporalParseError),

    #[error("Invalid time: {0}")]
    InvalidTime(TemporalParseError),

    #[error("Unknown genre code: {0}")]
    UnknownGenre(i64),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A single record split into fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvEntry {
    fields: Vec<String>,
}

impl CsvEntry {
    /// Split a line into trimmed fields
    pub fn parse(line: &str, delimiter: char) -> Self {
        Self {
            fields: line
                .split(delimiter)
                .map(|f| f.trim().to_string())
                .collect(),
        }
    }

    #[cfg(test)]
    fn from_fields(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Fail unless the entry has exactly `expected` fields
    pub fn expect_fields(&self, expected: usize) -> Result<(), ParseError> {
        if self.fields.len() != expected {
            return Err(ParseError::FieldCount {
                expected,
                actual: self.fields.len(),
            });
        }
        Ok(())
    }

    pub fn field(&self, pos: usize) -> Result<&str, ParseError> {
        self.fields
            .get(pos)
            .map(String::as_str)
            .ok_or(ParseError::MissingField { pos })
    }

    pub fn get_as_integer(&self, pos: usize) -> Result<i64, ParseError> {
        let value = self.field(pos)?;
        value.parse().map_err(|_| ParseError::InvalidInteger {
            pos,
            value: value.to_string(),
        })
    }

    pub fn get_as_real(&self, pos: usize) -> Result<f32, ParseError> {
        let value = self.field(pos)?;
        value.parse().map_err(|_| ParseError::InvalidReal {
            pos,
            value: value.to_string(),
        })
    }

    /// Accepts `0`/`1` as well as `true`/`false`
    pub fn get_as_bool(&self, pos: usize) -> Result<bool, ParseError> {
        let value = self.field(pos)?;
        match value.to_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            _ => Err(ParseError::InvalidBool {
                pos,
                value: value.to_string(),
            }),
        }
    }

    /// Integer field narrowed to `i32`
    pub(crate) fn get_as_i32(&self, pos: usize) -> Result<i32, ParseError> {
        let value = self.get_as_integer(pos)?;
        i32::try_from(value).map_err(|_| ParseError::InvalidInteger {
            pos,
            value: value.to_string(),
        })
    }
}
