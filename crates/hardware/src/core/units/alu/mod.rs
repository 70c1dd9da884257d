//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the XM23 ALU used by the arithmetic-class handlers.
//! Every operation works on word or byte operands and produces an updated
//! status word alongside its result.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add and subtract with carry, packed-BCD add
//! - [`logic`]:      And, Xor, Bit, Bic, Bis
//! - [`shifts`]:     Sra, Rrc, Swpb, Sxt

/// Binary and decimal addition and subtraction.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

/// Single-operand shifts, rotates, and byte manipulation.
pub mod shifts;

use crate::common::Width;
use crate::core::arch::Psw;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// dst + src.
    Add,
    /// dst + src + C.
    Addc,
    /// dst + ~src + 1.
    Sub,
    /// dst + ~src + C.
    Subc,
    /// Packed-BCD dst + src + C.
    Dadd,
    /// Flags of dst - src; no result.
    Cmp,
    /// dst ^ src.
    Xor,
    /// dst & src.
    And,
    /// Flags of dst & src; no result.
    Bit,
    /// dst & ~src.
    Bic,
    /// dst | src.
    Bis,
    /// src.
    Mov,
    /// Arithmetic shift right of dst.
    Sra,
    /// Rotate dst right through carry.
    Rrc,
    /// Swap bytes of dst (word only).
    Swpb,
    /// Sign-extend low byte of dst (word only).
    Sxt,
}

/// Result of an ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// Value to write back, masked to the operation width; `None` for compare-style ops.
    pub result: Option<u16>,
    /// Status word after the operation.
    pub psw: Psw,
}

/// Arithmetic Logic Unit.
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`    - The operation to perform.
    /// * `dst`   - Current destination operand (full register value).
    /// * `src`   - Source operand (register value or constant).
    /// * `width` - Operand width; `Swpb` and `Sxt` always operate on words.
    /// * `psw`   - Status word before the operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use xm23_core::common::Width;
    /// use xm23_core::core::arch::Psw;
    /// use xm23_core::core::units::alu::{Alu, AluOp};
    ///
    /// let out = Alu::execute(AluOp::Add, 0xFFFF, 1, Width::Word, Psw::default());
    /// assert_eq!(out.result, Some(0));
    /// assert!(out.psw.c && out.psw.z);
    ///
    /// let out = Alu::execute(AluOp::Add, 0x12FF, 1, Width::Byte, Psw::default());
    /// assert_eq!(out.result, Some(0x00));
    /// ```
    pub fn execute(op: AluOp, dst: u16, src: u16, width: Width, psw: Psw) -> AluOutput {
        let (result, psw) = match op {
            AluOp::Add => wrap(arithmetic::add(dst, src, false, width, psw)),
            AluOp::Addc => wrap(arithmetic::add(dst, src, psw.c, width, psw)),
            AluOp::Sub => wrap(arithmetic::sub(dst, src, true, width, psw)),
            AluOp::Subc => wrap(arithmetic::sub(dst, src, psw.c, width, psw)),
            AluOp::Dadd => wrap(arithmetic::decimal_add(dst, src, width, psw)),
            AluOp::Cmp => (None, arithmetic::sub(dst, src, true, width, psw).1),
            AluOp::Xor => wrap(logic::xor(dst, src, width, psw)),
            AluOp::And => wrap(logic::and(dst, src, width, psw)),
            AluOp::Bit => (None, logic::and(dst, src, width, psw).1),
            AluOp::Bic => (Some(dst & !src & width.mask()), psw),
            AluOp::Bis => (Some((dst | src) & width.mask()), psw),
            AluOp::Mov => (Some(src & width.mask()), psw),
            AluOp::Sra => wrap(shifts::sra(dst, width, psw)),
            AluOp::Rrc => wrap(shifts::rrc(dst, width, psw)),
            AluOp::Swpb => (Some(shifts::swpb(dst)), psw),
            AluOp::Sxt => wrap(shifts::sxt(dst, psw)),
        };
        AluOutput { result, psw }
    }
}

#[inline]
fn wrap((value, psw): (u16, Psw)) -> (Option<u16>, Psw) {
    (Some(value), psw)
}

/// Updates N and Z from a width-masked result.
#[inline]
pub(crate) fn set_nz(psw: &mut Psw, result: u16, width: Width) {
    psw.n = result & width.sign_bit() != 0;
    psw.z = result & width.mask() == 0;
}
