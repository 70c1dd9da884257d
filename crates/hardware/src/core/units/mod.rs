//! Execution units.
//!
//! Pure functions used by the opcode handlers: the ALU for arithmetic-class
//! instructions, the branch unit for condition evaluation and targets, and
//! the load/store unit for effective addresses.

/// Arithmetic Logic Unit for word and byte operations.
pub mod alu;

/// Branch Resolution Unit (conditions and targets).
pub mod bru;

/// Load/Store Unit (effective address computation).
pub mod lsu;
