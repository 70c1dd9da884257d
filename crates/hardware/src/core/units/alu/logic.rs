//! ALU logical operations.
//!
//! `AND`, `BIT`, and `XOR` update N and Z and derive C from the result
//! (C = result is non-zero). `BIC` and `BIS` leave the status word alone and
//! are handled inline by [`Alu::execute`](super::Alu::execute).

use super::set_nz;
use crate::common::Width;
use crate::core::arch::Psw;

/// Bitwise AND; V is cleared.
pub fn and(a: u16, b: u16, width: Width, psw: Psw) -> (u16, Psw) {
    let result = a & b & width.mask();
    let mut psw = psw;
    set_nz(&mut psw, result, width);
    psw.c = !psw.z;
    psw.v = false;
    (result, psw)
}

/// Bitwise XOR; V is set when both operands are negative.
pub fn xor(a: u16, b: u16, width: Width, psw: Psw) -> (u16, Psw) {
    let result = (a ^ b) & width.mask();
    let sign = width.sign_bit();
    let mut psw = psw;
    set_nz(&mut psw, result, width);
    psw.c = !psw.z;
    psw.v = a & sign != 0 && b & sign != 0;
    (result, psw)
}
