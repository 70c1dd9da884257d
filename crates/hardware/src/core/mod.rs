//! Core processor implementation.
//!
//! This module contains the CPU state, the per-state actions of the
//! fetch-decode-execute cycle, the dispatch tables and opcode handlers, the
//! architectural views, and the execution units.

/// Architecture-specific components (status word).
pub mod arch;

/// CPU state, cycle actions, dispatch tables, and handlers.
pub mod cpu;

/// Execution units (ALU, branch unit, load/store unit).
pub mod units;

pub use self::cpu::Cpu;
