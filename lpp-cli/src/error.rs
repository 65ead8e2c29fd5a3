// LPP Codec - Command-line decoder
// Copyright (c) 2025 LPP Codec contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// Payload could not be decoded
    #[error("Decoding error: {0}")]
    Decode(#[from] lpp_codec::LppError),

    /// Payload file or stdin could not be read
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `--records` only applies to LPP payloads
    #[error("--records is only supported with the lpp decoder")]
    RecordsUnsupported,
}

pub type Result<T> = std::result::Result<T, CliError>;
