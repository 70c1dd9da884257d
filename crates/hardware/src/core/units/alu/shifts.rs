//! ALU single-operand operations.
//!
//! Implements arithmetic shift right (SRA), rotate right through carry (RRC),
//! byte swap (SWPB), and sign extension (SXT). All shifts move by exactly one
//! bit; the bit shifted out becomes C.

use super::set_nz;
use crate::common::Width;
use crate::core::arch::Psw;

/// Arithmetic shift right by one, keeping the sign bit.
pub fn sra(a: u16, width: Width, psw: Psw) -> (u16, Psw) {
    let a = a & width.mask();
    let sign = a & width.sign_bit();
    let result = (a >> 1) | sign;

    let mut psw = psw;
    psw.c = a & 1 != 0;
    psw.v = false;
    set_nz(&mut psw, result, width);
    (result, psw)
}

/// Rotate right by one through the carry flag.
pub fn rrc(a: u16, width: Width, psw: Psw) -> (u16, Psw) {
    let a = a & width.mask();
    let carry_in = if psw.c { width.sign_bit() } else { 0 };
    let result = (a >> 1) | carry_in;

    let mut psw = psw;
    psw.c = a & 1 != 0;
    psw.v = false;
    set_nz(&mut psw, result, width);
    (result, psw)
}

/// Swaps the high and low bytes of a word. Flags are unaffected.
pub fn swpb(a: u16) -> u16 {
    a.rotate_left(8)
}

/// Sign-extends the low byte into a full word.
pub fn sxt(a: u16, psw: Psw) -> (u16, Psw) {
    let result = a as u8 as i8 as i16 as u16;
    let mut psw = psw;
    set_nz(&mut psw, result, Width::Word);
    psw.c = !psw.z;
    psw.v = false;
    (result, psw)
}
