//! Branch Resolution Unit (BRU).
//!
//! Evaluates branch conditions against the status word and computes
//! PC-relative branch targets. Offsets are in words; targets are relative to
//! the already-incremented PC.

use crate::core::arch::Psw;
use crate::isa::opcodes::cond;

/// Returns whether branch condition `condition` (0-7) holds for `psw`.
///
/// # Arguments
///
/// * `condition` - Condition code from bits 12-10; only the low three bits are used.
/// * `psw` - Current status word.
pub fn condition_holds(condition: u8, psw: Psw) -> bool {
    match condition & 0x7 {
        cond::EQ => psw.z,
        cond::NE => !psw.z,
        cond::C => psw.c,
        cond::NC => !psw.c,
        cond::N => psw.n,
        cond::GE => psw.n == psw.v,
        cond::LT => psw.n != psw.v,
        _ => true,
    }
}

/// Computes `pc + 2 * offset` with 16-bit wrap.
///
/// # Arguments
///
/// * `pc` - PC after the fetch increment.
/// * `offset` - Signed word offset.
#[inline]
pub fn target(pc: u16, offset: i16) -> u16 {
    pc.wrapping_add((offset as u16) << 1)
}
