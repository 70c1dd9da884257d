//! XM23 instruction-set simulator library.
//!
//! This crate implements a fetch-decode-execute simulator for the 16-bit XM23 CPU with the following:
//! 1. **Core:** Register file, status word, dispatch tables, and one handler per mnemonic.
//! 2. **ISA:** Bit-exact decoding of every 16-bit word, plus a disassembler.
//! 3. **SoC:** 64 KiB little-endian memory and per-cycle devices behind a bus.
//! 4. **Simulation:** The cycle loop, cancellation, S-record loading, configuration, and statistics.

/// Common types and constants (registers, widths, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (status word, cycle actions, dispatch, handlers, execution units).
pub mod core;
/// Instruction set (layout, opcodes, decode, disassembly).
pub mod isa;
/// Simulation loop, run-flag, and loader.
pub mod sim;
/// System-on-chip (builder, memory, traits).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, clock, bus, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; owns the CPU and the run-flag.
pub use crate::sim::Simulator;
/// Top-level system (memory and devices); construct with `System::new`.
pub use crate::soc::System;
