//! Program Status Word.
//!
//! This module implements the decomposed view over R6. It provides:
//! 1. **Bit Definitions:** Positions of the carry, zero, negative, sleep, and overflow flags.
//! 2. **Decomposition:** Conversion between the raw register and a struct of flags.
//! 3. **Preservation:** Bits the simulator does not interpret survive a round trip unchanged.

/// Carry flag bit.
pub const PSW_C: u16 = 1 << 0;
/// Zero flag bit.
pub const PSW_Z: u16 = 1 << 1;
/// Negative flag bit.
pub const PSW_N: u16 = 1 << 2;
/// Sleep flag bit.
pub const PSW_SLP: u16 = 1 << 3;
/// Overflow flag bit.
pub const PSW_V: u16 = 1 << 4;

/// Mask of every bit modeled by `Psw`.
const PSW_FLAGS: u16 = PSW_C | PSW_Z | PSW_N | PSW_SLP | PSW_V;

/// Decomposed program status word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Psw {
    /// Carry.
    pub c: bool,
    /// Zero.
    pub z: bool,
    /// Negative.
    pub n: bool,
    /// Sleep. Modeled as a flag only; the run loop does not act on it.
    pub slp: bool,
    /// Overflow.
    pub v: bool,
    /// Uninterpreted bits (5-15), carried through unchanged.
    pub other: u16,
}

impl Psw {
    /// Splits a raw R6 value into flags.
    pub fn from_bits(bits: u16) -> Self {
        Self {
            c: bits & PSW_C != 0,
            z: bits & PSW_Z != 0,
            n: bits & PSW_N != 0,
            slp: bits & PSW_SLP != 0,
            v: bits & PSW_V != 0,
            other: bits & !PSW_FLAGS,
        }
    }

    /// Reassembles the raw R6 value.
    pub fn to_bits(self) -> u16 {
        let mut bits = self.other & !PSW_FLAGS;
        if self.c {
            bits |= PSW_C;
        }
        if self.z {
            bits |= PSW_Z;
        }
        if self.n {
            bits |= PSW_N;
        }
        if self.slp {
            bits |= PSW_SLP;
        }
        if self.v {
            bits |= PSW_V;
        }
        bits
    }
}
