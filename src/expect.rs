//! Assertion helpers returning [`Error::Assertion`] instead of panicking.

use std::fmt::Debug;

use crate::error::{Error, Result};

/// Fails unless `actual == expected`.
///
/// # Example
///
/// ```
/// use acceptance_suite::expect::ensure_eq;
///
/// assert!(ensure_eq("header", "Logged In", "Logged In").is_ok());
/// assert!(ensure_eq("header", "Logged In", "Oops").unwrap_err().is_assertion());
/// ```
pub fn ensure_eq<T>(check: &str, expected: T, actual: T) -> Result<()>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(Error::assertion(check, expected, actual))
    }
}

/// Fails unless `actual` contains `needle`.
pub fn ensure_contains(check: &str, needle: &str, actual: &str) -> Result<()> {
    if actual.contains(needle) {
        Ok(())
    } else {
        Err(Error::assertion(
            check,
            format_args!("text containing {needle:?}"),
            actual,
        ))
    }
}
