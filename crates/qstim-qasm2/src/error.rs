//! Error types for the QASM2 to Stim translator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during translation.
///
/// Every error is fatal: the translator never produces partial output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslateError {
    /// The input file could not be read.
    #[error("File path {} is inaccessible: {source}", path.display())]
    InaccessibleFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The declared version is not 2.0.
    #[error("QASM version {version:.3} at line {line} not compatible")]
    UnsupportedVersion { line: usize, version: f64 },

    /// A qubit reference did not match `q[<digits>]`.
    #[error("Malformed qubit reference at line {line}: expected {expected}, found {found}")]
    MalformedQubitRef {
        line: usize,
        expected: &'static str,
        found: String,
    },

    /// The version number is not a plain decimal literal.
    #[error("Malformed version at line {line}: expected a digit, found {found}")]
    MalformedVersion { line: usize, found: String },

    /// A gate mnemonic hit the length cap.
    #[error("Gate name '{name}...' at line {line} is too long")]
    GateNameTooLong { line: usize, name: String },

    /// The mnemonic is not in the gate catalog.
    #[error("Unknown gate '{name}' at line {line}")]
    UnknownGate { line: usize, name: String },
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;
