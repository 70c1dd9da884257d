//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight XM23 registers.
//! It provides:
//! 1. **Storage:** Eight signed 16-bit registers with fixed architectural roles.
//! 2. **Access:** Signed and unsigned views, plus named accessors for PC, LR, SP, and PSW.
//! 3. **Observability:** A dump of the complete register state for debugging.

use super::constants::{NUM_REGISTERS, REG_LR, REG_NAMES, REG_PC, REG_PSW, REG_SP};

/// The eight-entry register file.
///
/// `R0`–`R3` are general purpose, `R4` is the link register, `R5` the stack
/// pointer, `R6` the program status word, and `R7` the program counter. Indices
/// outside `0..8` are masked to three bits, matching the width of every
/// register field in the instruction encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i16; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register as a signed value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    pub fn read(&self, idx: usize) -> i16 {
        self.regs[idx & 0x7]
    }

    /// Writes a signed value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The value to write.
    pub fn write(&mut self, idx: usize, val: i16) {
        self.regs[idx & 0x7] = val;
    }

    /// Reads a register as its raw 16-bit pattern.
    #[inline]
    pub fn read_u16(&self, idx: usize) -> u16 {
        self.read(idx) as u16
    }

    /// Writes a raw 16-bit pattern to a register.
    #[inline]
    pub fn write_u16(&mut self, idx: usize, val: u16) {
        self.write(idx, val as i16);
    }

    /// Program counter.
    #[inline]
    pub fn pc(&self) -> u16 {
        self.read_u16(REG_PC)
    }

    /// Sets the program counter.
    #[inline]
    pub fn set_pc(&mut self, val: u16) {
        self.write_u16(REG_PC, val);
    }

    /// Link register.
    #[inline]
    pub fn lr(&self) -> u16 {
        self.read_u16(REG_LR)
    }

    /// Stack pointer.
    #[inline]
    pub fn sp(&self) -> u16 {
        self.read_u16(REG_SP)
    }

    /// Raw program status word.
    #[inline]
    pub fn psw_bits(&self) -> u16 {
        self.read_u16(REG_PSW)
    }

    /// Returns a copy of all eight registers.
    pub fn snapshot(&self) -> [i16; NUM_REGISTERS] {
        self.regs
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal and signed decimal values.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            println!(
                "R{} {:<3}={:#06x} ({:>6})   R{} {:<3}={:#06x} ({:>6})",
                i,
                REG_NAMES[i],
                self.regs[i] as u16,
                self.regs[i],
                i + 1,
                REG_NAMES[i + 1],
                self.regs[i + 1] as u16,
                self.regs[i + 1]
            );
        }
    }
}
