//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Address space size and the reserved halt address.
//! 2. **Register Constants:** Architectural register indices and count.
//! 3. **Instruction Constants:** Instruction size in bytes.

/// Size of the byte-addressable memory space (64 KiB).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Reserved "Halt/Catch-Fire" address.
///
/// The fetch path never presents this address to the memory bus; a fetch from
/// it produces an idle cycle instead.
pub const HCF_ADDRESS: u16 = 0xFFFF;

/// Size of an instruction word in bytes. PC advances by this much every cycle.
pub const INSTRUCTION_SIZE: u16 = 2;

/// Number of architectural registers.
pub const NUM_REGISTERS: usize = 8;

/// Link register index (return address for `BL`).
pub const REG_LR: usize = 4;

/// Stack pointer index.
pub const REG_SP: usize = 5;

/// Program status word index.
pub const REG_PSW: usize = 6;

/// Program counter index.
pub const REG_PC: usize = 7;

/// Role names for R0–R7, used by dumps and the disassembler.
pub const REG_NAMES: [&str; NUM_REGISTERS] = ["R0", "R1", "R2", "R3", "LR", "SP", "PSW", "PC"];
