/**
 * Conversion error taxonomy
 *
 * Distinguishable failure conditions surfaced to callers. Not-applicable
 * inputs are not errors; they produce empty compiled units instead.
 */
use thiserror::Error;

use crate::apex::parser::ParseError;
use crate::apex::service::Readiness;

/// Failure conditions raised by conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The apex parser service has not finished warming up. Carries a
    /// readiness handle so the caller can wait and retry the same input.
    #[error("apex parser not ready; wait on the readiness handle and retry")]
    NotReady { readiness: Readiness },

    /// A required token or path component is missing. Aborts the current
    /// unit without emitting partial output.
    #[error("{path}: {message}")]
    Structural { path: String, message: String },

    /// The unit's source text could not be parsed as an apex compilation
    /// unit.
    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },

    /// A boundary string named no known metadata kind.
    #[error("unsupported metadata kind: {kind}")]
    UnsupportedKind { kind: String },
}

impl ConvertError {
    pub fn structural(path: &str, message: impl Into<String>) -> Self {
        ConvertError::Structural {
            path: path.to_string(),
            message: message.into(),
        }
    }
}
