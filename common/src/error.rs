use std::path::PathBuf;

use thiserror::Error;

use crate::product::ProductId;

/// Failure to load or validate a fixture bundle.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("price breakdown of product {id:?} sums to {sum}, expected {price}")]
    UnbalancedBreakdown { id: ProductId, sum: u64, price: u64 },

    #[error("price breakdown of product {0:?} does not fit in a u64")]
    BreakdownOverflow(ProductId),

    #[error("duplicate product id {0:?}")]
    DuplicateProduct(ProductId),

    #[error("demand item {0:?} has no location records")]
    EmptyDemand(String),
}

/// Failure to parse a user-facing name (category, sort key, date, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown {kind} {value:?}, expected one of: {expected}")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    Date(String),

    #[error("invalid month {0:?}, expected YYYY-MM")]
    Month(String),
}

impl ParseError {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &'static str) -> Self {
        ParseError::UnknownVariant {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
