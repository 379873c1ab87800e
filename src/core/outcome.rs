//! Outcome wrapper - a binary success/failure value

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a computation that is either a value or a failure message
///
/// The value of a failed outcome (or the message of a successful one) cannot
/// be reached: callers go through [`Outcome::value`], [`Outcome::message`] or
/// a `match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// Computation produced a value
    Success(T),
    /// Computation failed with a reason
    Failure(String),
}

impl<T> Outcome<T> {
    /// Create a successful outcome
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The carried value, if successful
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure message, if failed
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(message) => Some(message),
        }
    }

    /// Transform the carried value, leaving failures untouched
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Chain another fallible computation onto a success
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(message) => Err(message),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success: {}", value),
            Outcome::Failure(message) => write!(f, "Failure: {}", message),
        }
    }
}
