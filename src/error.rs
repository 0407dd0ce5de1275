//! Driver-level error taxonomy.
//!
//! `UsageError` and `IoError` are real `Result`-level failures: they abort
//! a binary with exit code 1. Decode-time anomalies (`TruncatedStream`,
//! `UnknownOpcode`) are deliberately NOT part of this enum, they surface
//! as data (`Instruction::Unknown`, or an early return from the decoder)
//! because the decoder must never abort on malformed input.

#[derive(thiserror::Error, Debug)]
pub enum DriverError {
    #[error("usage: {0} <input-binary-path>")]
    UsageError(String),
    #[error("unable to open file {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
