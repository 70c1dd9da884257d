//! Instruction field extraction.
//!
//! Provides the bit extraction helpers used to decode XM23 instruction
//! words. Each helper reads one fixed bit range; the ranges are part of the
//! instruction encoding and must not move.

/// Bit mask for a 3-bit register field.
pub const REG_MASK: u16 = 0x7;
/// Bit mask for an 8-bit immediate byte.
pub const BYTE_MASK: u16 = 0xFF;
/// Bit mask for the 12-bit `BL` offset (bits 11-0).
pub const BL_OFFSET_MASK: u16 = 0x0FFF;
/// Width in bits of the `BL` offset.
pub const BL_OFFSET_BITS: u32 = 12;
/// Bit mask for the 10-bit branch offset (bits 9-0).
pub const BRANCH_OFFSET_MASK: u16 = 0x03FF;
/// Width in bits of the conditional branch offset.
pub const BRANCH_OFFSET_BITS: u32 = 10;
/// Bit mask for the 7-bit relative offset after shifting (bits 13-7).
pub const REL_OFFSET_MASK: u16 = 0x7F;
/// Width in bits of the `LDR`/`STR` offset.
pub const REL_OFFSET_BITS: u32 = 7;

/// Sign extends the low `bits` bits of `val` to a signed 16-bit value.
///
/// # Arguments
///
/// * `val` - The raw field value.
/// * `bits` - The number of valid bits in `val` (1-16).
#[inline]
pub fn sign_extend(val: u16, bits: u32) -> i16 {
    let shift = 16 - bits;
    ((val << shift) as i16) >> shift
}

/// Trait for extracting instruction fields from a 16-bit instruction word.
///
/// Field names follow the assembler operand names; which fields are meaningful
/// depends on the instruction class.
pub trait InstructionBits {
    /// Destination register (bits 2-0).
    fn dst(&self) -> usize;
    /// Source register or constant selector (bits 5-3).
    fn src(&self) -> usize;
    /// W/B flag (bit 6); set means byte.
    fn wb(&self) -> bool;
    /// R/C flag (bit 7); set means the SRC field selects a constant.
    fn rc(&self) -> bool;
    /// Arithmetic opcode (bits 12-8).
    fn arith_opcode(&self) -> u8;
    /// Branch condition (bits 12-10).
    fn condition(&self) -> u8;
    /// Sign-extended branch offset in words (bits 9-0).
    fn branch_offset(&self) -> i16;
    /// Sign-extended `BL` offset in words (bits 11-0).
    fn bl_offset(&self) -> i16;
    /// LD/ST/MOVL/MOVLZ sub-type (bits 12-11).
    fn ldst_type(&self) -> u8;
    /// Pre/post-index flag (bit 10); set means pre.
    fn prpo(&self) -> bool;
    /// Auto-decrement flag (bit 9).
    fn dec(&self) -> bool;
    /// Auto-increment flag (bit 8).
    fn inc(&self) -> bool;
    /// Immediate byte of `MOVL`/`MOVLZ`/`MOVH` (bits 10-3).
    fn imm_byte(&self) -> u8;
    /// Sign-extended `LDR`/`STR` byte offset (bits 13-7).
    fn rel_offset(&self) -> i16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn dst(&self) -> usize {
        (self & REG_MASK) as usize
    }

    #[inline(always)]
    fn src(&self) -> usize {
        ((self >> 3) & REG_MASK) as usize
    }

    #[inline(always)]
    fn wb(&self) -> bool {
        self & (1 << 6) != 0
    }

    #[inline(always)]
    fn rc(&self) -> bool {
        self & (1 << 7) != 0
    }

    #[inline(always)]
    fn arith_opcode(&self) -> u8 {
        ((self >> 8) & 0x1F) as u8
    }

    #[inline(always)]
    fn condition(&self) -> u8 {
        ((self >> 10) & 0x7) as u8
    }

    #[inline(always)]
    fn branch_offset(&self) -> i16 {
        sign_extend(self & BRANCH_OFFSET_MASK, BRANCH_OFFSET_BITS)
    }

    #[inline(always)]
    fn bl_offset(&self) -> i16 {
        sign_extend(self & BL_OFFSET_MASK, BL_OFFSET_BITS)
    }

    #[inline(always)]
    fn ldst_type(&self) -> u8 {
        ((self >> 11) & 0x3) as u8
    }

    #[inline(always)]
    fn prpo(&self) -> bool {
        self & (1 << 10) != 0
    }

    #[inline(always)]
    fn dec(&self) -> bool {
        self & (1 << 9) != 0
    }

    #[inline(always)]
    fn inc(&self) -> bool {
        self & (1 << 8) != 0
    }

    #[inline(always)]
    fn imm_byte(&self) -> u8 {
        ((self >> 3) & BYTE_MASK) as u8
    }

    #[inline(always)]
    fn rel_offset(&self) -> i16 {
        sign_extend((self >> 7) & REL_OFFSET_MASK, REL_OFFSET_BITS)
    }
}
