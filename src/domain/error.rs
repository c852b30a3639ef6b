//! Errors raised while building or copying domain values.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur when constructing, copying or growing domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Copy a string into freshly reserved owned storage.
///
/// Allocation failure is reported instead of aborting the process.
pub(crate) fn owned_string(src: &str) -> Result<String, DomainError> {
    let mut owned = String::new();
    owned.try_reserve_exact(src.len())?;
    owned.push_str(src);
    Ok(owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_string_is_independent_copy() {
        let src = String::from("Pilot");
        let copy = owned_string(&src).unwrap();
        drop(src);
        assert_eq!(copy, "Pilot");
    }

    #[test]
    fn test_owned_string_empty() {
        assert_eq!(owned_string("").unwrap(), "");
    }
}
