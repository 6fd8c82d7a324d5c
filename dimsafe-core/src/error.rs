//! Error types for parsing quantities and loading unit catalogs.

use std::path::PathBuf;

use crate::dimension::Exponents;

/// Result type for text parsing.
pub type ParseResult<T> = Result<T, ParseQuantityError>;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error returned when text cannot be read as a quantity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseQuantityError {
    /// Nothing but whitespace.
    #[error("empty input")]
    Empty,

    /// The leading number could not be read.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A symbol is not in the unit table.
    #[error("unknown unit: {0:?}")]
    UnknownUnit(String),

    /// Operators or exponents do not form a valid signature.
    #[error("malformed unit signature {signature:?}: {reason}")]
    MalformedSignature {
        /// The offending signature text.
        signature: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The unit is valid but measures something else.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the target type.
        expected: Exponents,
        /// Dimension of the parsed unit.
        found: Exponents,
    },

    /// An offset unit (°C, °F) combined with other terms or raised to a power.
    #[error("unit {0:?} has an offset and cannot appear in a compound signature")]
    AffineInCompound(String),
}

/// Error returned by [`UnitRegistry`](crate::registry::UnitRegistry) construction and updates.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The catalog file could not be read.
    #[error("failed to read unit catalog {}: {source}", .path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid TOML or does not match the expected layout.
    #[cfg(feature = "catalog")]
    #[error("failed to parse unit catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// The symbol is taken, by a built-in unit or an earlier entry.
    #[error("unit symbol {0:?} is already registered")]
    DuplicateSymbol(String),

    /// The entry breaks a structural rule (bad symbol, zero factor, …).
    #[error("invalid unit {symbol:?}: {reason}")]
    InvalidEntry {
        /// Symbol of the rejected entry.
        symbol: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A `definition` string did not parse.
    #[error("invalid definition for unit {symbol:?}: {source}")]
    Definition {
        /// Symbol of the rejected entry.
        symbol: String,
        /// Parser failure.
        #[source]
        source: ParseQuantityError,
    },
}

impl RegistryError {
    pub(crate) fn invalid(symbol: &str, reason: impl Into<String>) -> Self {
        RegistryError::InvalidEntry {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }
}

impl ParseQuantityError {
    pub(crate) fn malformed(signature: &str, reason: impl Into<String>) -> Self {
        ParseQuantityError::MalformedSignature {
            signature: signature.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = ParseQuantityError::DimensionMismatch {
            expected: Exponents([1, 0, -1, 0, 0]),
            found: Exponents([0, 1, 0, 0, 0]),
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected L·T⁻¹, found M");

        let e = ParseQuantityError::malformed("m//s", "empty term");
        assert_eq!(e.to_string(), "malformed unit signature \"m//s\": empty term");

        let e = RegistryError::invalid("x", "factor must be finite and non-zero");
        assert_eq!(e.to_string(), "invalid unit \"x\": factor must be finite and non-zero");
    }

    #[test]
    fn definition_error_keeps_source() {
        use std::error::Error;

        let e = RegistryError::Definition {
            symbol: "furlong".into(),
            source: ParseQuantityError::UnknownUnit("chains".into()),
        };
        assert!(e.source().is_some());
    }
}
