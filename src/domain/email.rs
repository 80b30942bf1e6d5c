//! Manager email validation.
//!
//! Emails are checked against an [`EmailPattern`] before they can reach the
//! database. The default pattern only accepts `letters@letters.letters`:
//! no digits, hyphens or subdomains.

use std::fmt;

use regex::Regex;
use serde::Serialize;

use super::error::DomainError;

/// Pattern used when configuration does not override it.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[A-Za-z]+@[A-Za-z]+\.[A-Za-z]+$";

const DEFAULT_EMAIL_DESCRIPTION: &str = "ccc@aaa.bbb (letters only)";

/// Compiled email pattern plus the wording used in validation errors.
#[derive(Debug, Clone)]
pub struct EmailPattern {
    regex: Regex,
    description: String,
}

impl EmailPattern {
    /// Compile a pattern from its source text.
    ///
    /// # Errors
    /// Returns the regex compilation error for malformed patterns.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        let description = if pattern == DEFAULT_EMAIL_PATTERN {
            DEFAULT_EMAIL_DESCRIPTION.to_string()
        } else {
            format!("the pattern {pattern}")
        };
        Ok(Self { regex, description })
    }

    /// True when `candidate` matches the pattern.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Human-readable description of accepted emails.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Source text of the compiled pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for EmailPattern {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_PATTERN).expect("default email pattern compiles")
    }
}

/// An email address that passed an [`EmailPattern`], or the blank address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate `candidate` against `pattern`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidEmail`] when the candidate does not match.
    pub fn parse(candidate: &str, pattern: &EmailPattern) -> Result<Self, DomainError> {
        if !pattern.is_match(candidate) {
            return Err(DomainError::InvalidEmail {
                expected: pattern.description().to_string(),
            });
        }
        Ok(Self(candidate.to_string()))
    }

    /// The empty address, written as-is to clear a stored email.
    #[must_use]
    pub fn blank() -> Self {
        Self(String::new())
    }

    /// Get the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
