//! ALU arithmetic operations.
//!
//! Implements binary addition and subtraction with carry in, plus packed-BCD
//! addition. Subtraction is computed as `a + !b + carry_in`, so a set carry
//! after `SUB`/`CMP` means "no borrow".

use super::set_nz;
use crate::common::Width;
use crate::core::arch::Psw;

/// Adds `a + b + carry_in` at the given width.
///
/// # Returns
///
/// The masked sum and a status word with V, N, Z, and C updated.
pub fn add(a: u16, b: u16, carry_in: bool, width: Width, psw: Psw) -> (u16, Psw) {
    let mask = width.mask();
    let a = a & mask;
    let b = b & mask;
    let sum = a as u32 + b as u32 + carry_in as u32;
    let result = (sum as u16) & mask;

    let mut psw = psw;
    psw.c = sum > mask as u32;
    // Overflow: both operands share a sign that the result does not.
    psw.v = (a ^ result) & (b ^ result) & width.sign_bit() != 0;
    set_nz(&mut psw, result, width);
    (result, psw)
}

/// Subtracts as `a + !b + carry_in` at the given width.
pub fn sub(a: u16, b: u16, carry_in: bool, width: Width, psw: Psw) -> (u16, Psw) {
    add(a, !b & width.mask(), carry_in, width, psw)
}

/// Adds two packed-BCD values with the carry flag as decimal carry in.
///
/// Each nibble is added separately; a nibble sum above 9 wraps by ten and
/// carries into the next nibble. The carry out of the top nibble becomes C.
/// V is left unchanged.
pub fn decimal_add(a: u16, b: u16, width: Width, psw: Psw) -> (u16, Psw) {
    let nibbles = width.bytes() * 2;
    let mut carry = psw.c as u16;
    let mut result = 0u16;

    for i in 0..nibbles {
        let shift = i * 4;
        let mut digit = ((a >> shift) & 0xF) + ((b >> shift) & 0xF) + carry;
        if digit > 9 {
            digit -= 10;
            carry = 1;
        } else {
            carry = 0;
        }
        result |= (digit & 0xF) << shift;
    }

    let mut psw = psw;
    psw.c = carry != 0;
    set_nz(&mut psw, result, width);
    (result, psw)
}
