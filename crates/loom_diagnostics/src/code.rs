//! Diagnostic codes: a category letter plus a three-digit number.
//!
//! Loom allocates them by crate: `E3xx` for design-building failures,
//! `W1xx` for lint warnings, `C2xx` for naming conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Rejected designs (`E`).
    Error,
    /// Suspicious but buildable designs (`W`).
    Warning,
    /// Style conventions (`C`).
    Convention,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
            Category::Convention => 'C',
        }
    }

    /// The category whose prefix is `c`, case-insensitively.
    pub fn from_prefix(c: char) -> Option<Category> {
        match c.to_ascii_uppercase() {
            'E' => Some(Category::Error),
            'W' => Some(Category::Warning),
            'C' => Some(Category::Convention),
            _ => None,
        }
    }
}

/// A diagnostic code such as `E303` or `W101`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

/// Text that is not a diagnostic code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a diagnostic code (expected e.g. `W101`)")]
pub struct ParseCodeError(pub String);

impl FromStr for DiagnosticCode {
    type Err = ParseCodeError;

    /// Parses `W101`, `w101` or `E7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCodeError(s.to_string());
        let mut chars = s.chars();
        let category = chars.next().and_then(Category::from_prefix).ok_or_else(err)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let number = digits.parse().map_err(|_| err())?;
        Ok(DiagnosticCode::new(category, number))
    }
}
