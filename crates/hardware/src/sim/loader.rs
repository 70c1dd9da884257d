//! Program Loader.
//!
//! This module reads program images from disk and places them in memory. It performs:
//! 1. **File loading:** Reads an image file into a byte buffer.
//! 2. **S-record parsing:** Decodes Motorola S-records (`S0`, `S1`, `S5`, `S6`, `S9`) with checksum checks.
//! 3. **Installation:** Writes every segment onto the bus and points PC at the start address.

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::common::constants::MEMORY_SIZE;
use crate::core::Cpu;
use crate::soc::System;

/// On-disk image format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Motorola S-records (`.xme`, `.s19`, `.srec`).
    SRecord,
    /// Raw little-endian bytes placed at a base address.
    Binary,
}

impl ImageFormat {
    /// Picks a format from the file extension; anything unrecognized is raw binary.
    pub fn detect(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("xme" | "s19" | "srec") => ImageFormat::SRecord,
            _ => ImageFormat::Binary,
        }
    }
}

/// A parsed program image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedImage {
    /// Module name from the `S0` header, or the file stem for raw images.
    pub name: String,
    /// Data segments as `(address, bytes)` in file order.
    pub segments: Vec<(u16, Vec<u8>)>,
    /// Start address from the `S9` record, or the base of a raw image.
    pub start: Option<u16>,
}

impl LoadedImage {
    /// Writes every segment into the system's memory.
    pub fn install(&self, system: &mut System) {
        for (address, data) in &self.segments {
            system.load_at(data, *address);
        }
    }

    /// Total number of data bytes across all segments.
    pub fn byte_count(&self) -> usize {
        self.segments.iter().map(|(_, data)| data.len()).sum()
    }
}

/// Reads a file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the image file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses Motorola S-record text.
///
/// Blank lines are skipped. `S5`/`S6` count records are accepted and ignored.
///
/// # Errors
///
/// Fails on the first record that is malformed, contains non-hex digits,
/// carries a wrong checksum, or would run past the top of memory.
pub fn parse_srecords(text: &str) -> Result<LoadedImage, SimError> {
    let mut image = LoadedImage::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }

        let malformed = |reason: &str| SimError::MalformedRecord {
            line,
            reason: reason.to_string(),
        };

        let mut chars = record.chars();
        if !matches!(chars.next(), Some('S' | 's')) {
            return Err(malformed("record does not start with 'S'"));
        }
        let Some(kind) = chars.next() else {
            return Err(malformed("missing record type"));
        };

        let bytes = decode_hex(chars.as_str(), line)?;
        let Some((&checksum, counted)) = bytes.split_last() else {
            return Err(malformed("record has no byte count"));
        };
        if counted.is_empty() || counted[0] as usize != bytes.len() - 1 {
            return Err(malformed("byte count does not match record length"));
        }

        let sum = counted.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        let expected = !sum;
        if expected != checksum {
            return Err(SimError::ChecksumMismatch {
                line,
                expected,
                found: checksum,
            });
        }

        let body = &counted[1..];
        if body.len() < 2 {
            return Err(malformed("record too short for an address"));
        }
        let address = u16::from_be_bytes([body[0], body[1]]);
        let data = &body[2..];

        match kind {
            '0' => {
                image.name = String::from_utf8_lossy(data)
                    .trim_end_matches('\0')
                    .trim()
                    .to_string();
            }
            '1' => {
                if address as usize + data.len() > MEMORY_SIZE {
                    return Err(SimError::ImageOverflow {
                        address,
                        len: data.len(),
                    });
                }
                image.segments.push((address, data.to_vec()));
            }
            '5' | '6' => {}
            '9' => image.start = Some(address),
            other => {
                return Err(malformed(&format!("unsupported record type S{}", other)));
            }
        }
    }

    Ok(image)
}

fn decode_hex(digits: &str, line: usize) -> Result<Vec<u8>, SimError> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SimError::InvalidHex { line });
    }
    if digits.len() % 2 != 0 {
        return Err(SimError::MalformedRecord {
            line,
            reason: "odd number of hex digits".to_string(),
        });
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| SimError::InvalidHex { line })
}

/// Reads and parses an image without installing it.
///
/// # Arguments
///
/// * `path` - Image file.
/// * `format` - How to interpret the file.
/// * `base` - Load address for raw binaries; ignored for S-records.
pub fn load_image(path: &Path, format: ImageFormat, base: u16) -> Result<LoadedImage, SimError> {
    let bytes = load_file(path)?;
    match format {
        ImageFormat::SRecord => parse_srecords(&String::from_utf8_lossy(&bytes)),
        ImageFormat::Binary => {
            if base as usize + bytes.len() > MEMORY_SIZE {
                return Err(SimError::ImageOverflow {
                    address: base,
                    len: bytes.len(),
                });
            }
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(LoadedImage {
                name,
                segments: vec![(base, bytes)],
                start: Some(base),
            })
        }
    }
}

/// Loads a program into the CPU's memory and sets PC to its start address.
///
/// PC is left unchanged when an S-record image has no `S9` record.
///
/// # Arguments
///
/// * `cpu` - CPU whose bus receives the image.
/// * `path` - Image file.
/// * `format` - How to interpret the file.
/// * `base` - Load address for raw binaries.
pub fn load_program(
    cpu: &mut Cpu,
    path: &Path,
    format: ImageFormat,
    base: u16,
) -> Result<LoadedImage, SimError> {
    let image = load_image(path, format, base)?;
    image.install(&mut cpu.bus);
    if let Some(start) = image.start {
        cpu.regs.set_pc(start);
    }

    tracing::info!(
        name = %image.name,
        segments = image.segments.len(),
        bytes = image.byte_count(),
        start = format!("{:#06x}", cpu.regs.pc()),
        "program loaded"
    );
    Ok(image)
}
