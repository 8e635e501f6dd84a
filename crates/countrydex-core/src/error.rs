//! Error types for countrydex-core

use thiserror::Error;

/// Errors raised while looking a code up in the ISO country table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The code contains something other than ASCII letters
    #[error("invalid character {found:?} in country code {code:?}")]
    InvalidCharacter { code: String, found: char },
}

/// Errors raised by a calling code resolver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The region is not a two-letter code
    #[error("invalid region code: {0:?}")]
    InvalidRegion(String),

    /// The resolver has no metadata source available
    #[error("calling code metadata unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by the query service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A random entry was requested from a catalog with no records
    #[error("country catalog is empty")]
    EmptyCatalog,
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
