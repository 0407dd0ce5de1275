//! Shared CLI argument shape for the two binaries. Mirrors the host
//! repo's `clap::Args` + `serde::Deserialize` `ConfigOption` convention
//! (`command/action/build.rs`): the `Deserialize` derive is carried for
//! stack alignment even though nothing in this crate loads a config
//! file from disk today.

use std::path::PathBuf;

use clap::Args;
use serde::Deserialize;

/// Default cap on how much of the input file is read into the decode
/// buffer, generalizing the reference implementation's fixed 1000-byte
/// stack array.
pub const DEFAULT_MAX_BYTES: usize = 65536;

#[derive(Clone, Debug, Deserialize, Args)]
pub struct ConfigOption {
    /// Path to a raw 8086 machine-code byte stream.
    pub input: PathBuf,

    /// Cap on how many bytes of `input` are read into the buffer.
    #[clap(long, default_value_t = DEFAULT_MAX_BYTES)]
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_max_bytes() -> usize {
    DEFAULT_MAX_BYTES
}
