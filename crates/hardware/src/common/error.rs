//! Simulator error definitions.
//!
//! The fetch-decode-execute loop itself never fails: decoding is total, reserved
//! opcodes are no-ops, and the halt address idles. Errors only arise at the
//! edges of the simulator. This module provides:
//! 1. **Loading errors:** File access and malformed S-record images.
//! 2. **Configuration errors:** JSON that does not describe a valid `Config`.
//! 3. **Host errors:** Failure to wire the interrupt signal to the run-flag.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the loader, configuration layer, and host integration.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An S-record line is structurally invalid (missing `S`, unknown type, bad length).
    #[error("line {line}: malformed S-record: {reason}")]
    MalformedRecord {
        /// 1-based line number in the image.
        line: usize,
        /// What was wrong with the record.
        reason: String,
    },

    /// An S-record contains characters that are not hexadecimal digits.
    #[error("line {line}: invalid hex digits in S-record")]
    InvalidHex {
        /// 1-based line number in the image.
        line: usize,
    },

    /// An S-record checksum does not match its contents.
    #[error("line {line}: checksum mismatch (expected {expected:#04x}, found {found:#04x})")]
    ChecksumMismatch {
        /// 1-based line number in the image.
        line: usize,
        /// Checksum computed from the record body.
        expected: u8,
        /// Checksum stored in the record.
        found: u8,
    },

    /// A data segment would extend past the top of the 64 KiB address space.
    #[error("segment at {address:#06x} with {len} bytes runs past the end of memory")]
    ImageOverflow {
        /// Start address of the offending segment.
        address: u16,
        /// Length of the segment in bytes.
        len: usize,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The interrupt signal handler could not be installed.
    #[error("could not install interrupt handler: {0}")]
    SignalHandler(String),
}
