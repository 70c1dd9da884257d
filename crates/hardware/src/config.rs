//! Configuration system for the XM23 simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline values (start address, load address) used when a field is omitted.
//! 2. **Structures:** Hierarchical config for general run control and memory loading.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! The CLI builds a `Config` from its flags, optionally starting from a JSON file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// PC after reset.
    pub const START_PC: u16 = 0x0000;

    /// Address where raw binary images are placed.
    pub const LOAD_ADDRESS: u16 = 0x0000;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use xm23_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "start_pc": 256,
///         "max_cycles": 1000,
///         "breakpoints": [266, 300]
///     },
///     "memory": { "load_address": 256 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0x100);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.general.breakpoints, vec![266, 300]);
/// assert_eq!(config.memory.load_address, 0x100);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Program image placement
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// Omitted sections and fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
///
/// Contains run-control configuration such as tracing, the initial program
/// counter, and the stop conditions checked between cycles.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event with the disassembly of every executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value; a loaded S9 record or raw image base overrides it
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u16,

    /// Stop after this many cycles (idle cycles included)
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Stop when PC reaches any of these addresses
    #[serde(default)]
    pub breakpoints: Vec<u16>,

    /// Initial stack pointer (R5); left at zero if not set
    #[serde(default)]
    pub initial_sp: Option<u16>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    fn default_start_pc() -> u16 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            max_cycles: None,
            breakpoints: Vec::new(),
            initial_sp: None,
        }
    }
}

/// Program image placement.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Base address for raw binary images
    #[serde(default = "MemoryConfig::default_load_address")]
    pub load_address: u16,
}

impl MemoryConfig {
    fn default_load_address() -> u16 {
        defaults::LOAD_ADDRESS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            load_address: defaults::LOAD_ADDRESS,
        }
    }
}
