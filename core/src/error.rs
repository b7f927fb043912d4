//! Error types for retrieval and scoring.
//!
//! Two classes of failure exist: strict lookups that miss (`TermNotFound`) and
//! arithmetic whose preconditions do not hold (`DivisionByZero`,
//! `DimensionMismatch`, `UndefinedLogarithm`). Neither class is retried or
//! papered over inside the crate.

use std::fmt;
use thiserror::Error;

/// Result type alias for retrieval operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by boolean retrieval, scoring and vector similarity
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A boolean query named a term with no postings
    #[error("term not found in inverted index: {term:?}")]
    TermNotFound {
        /// The missing term
        term: String,
    },

    /// A formula divided by a quantity that was zero
    #[error("division by zero: {0}")]
    DivisionByZero(ZeroDivisor),

    /// Two vectors of different dimension were combined
    #[error("vector dimension mismatch: {left} != {right}")]
    DimensionMismatch {
        /// Dimension of the first operand
        left: usize,
        /// Dimension of the second operand
        right: usize,
    },

    /// IDF was requested with a total document count of zero, i.e. `ln(0)`
    #[error("inverse document frequency of {term:?} is undefined for zero total documents")]
    UndefinedLogarithm {
        /// The term being scored
        term: String,
    },
}

/// The zero-valued divisor behind [`Error::DivisionByZero`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZeroDivisor {
    /// The term occurs in no document of the corpus
    DocumentFrequency {
        /// The term being scored
        term: String,
    },
    /// A vector passed to cosine similarity has Euclidean length zero
    VectorLength,
}

impl fmt::Display for ZeroDivisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroDivisor::DocumentFrequency { term } => {
                write!(f, "document frequency of {term:?} is zero")
            }
            ZeroDivisor::VectorLength => write!(f, "vector length is zero"),
        }
    }
}

impl Error {
    pub(crate) fn term_not_found(term: &str) -> Self {
        Error::TermNotFound { term: term.to_string() }
    }

    pub(crate) fn zero_document_frequency(term: &str) -> Self {
        Error::DivisionByZero(ZeroDivisor::DocumentFrequency { term: term.to_string() })
    }

    /// True for any division-by-zero failure, whatever the divisor
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Error::DivisionByZero(_))
    }
}
