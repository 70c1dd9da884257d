//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the bit-exact instruction layout, opcode constants, the decoder,
//! and the disassembler for the XM23 instruction set.
//!
//! # Instruction Classes
//!
//! * `BL`: branch-and-link with a 12-bit word offset.
//! * `BEQ`..`BAL`: conditional branches with a 10-bit word offset.
//! * Two-operand arithmetic and data movement (`ADD`..`SWAP`).
//! * Indexed `LD`/`ST` and immediate `MOVL`/`MOVLZ`/`MOVH`.
//! * Base-relative `LDR`/`STR`.

/// Instruction decoding into classes and operand records.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Bit extraction helpers for every instruction field.
pub mod instruction;

/// Class patterns, opcode numbers, and condition codes.
pub mod opcodes;

pub use decode::{Decoded, InstructionClass, classify, decode};
