//! Operand Width.
//!
//! Every memory access and every two-operand ALU instruction carries a width
//! selector. This module defines it once so the bus, decoder, and ALU agree on
//! the meaning of the W/B bit.

/// Width of a memory access or ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// 16-bit access (W/B bit clear).
    Word,
    /// 8-bit access (W/B bit set).
    Byte,
}

impl Width {
    /// Decodes the W/B bit of an instruction (`1` = byte).
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit { Width::Byte } else { Width::Word }
    }

    /// Number of bytes covered by an access of this width.
    #[inline]
    pub fn bytes(self) -> u16 {
        match self {
            Width::Word => 2,
            Width::Byte => 1,
        }
    }

    /// Mask selecting the bits that belong to an operand of this width.
    #[inline]
    pub fn mask(self) -> u16 {
        match self {
            Width::Word => 0xFFFF,
            Width::Byte => 0x00FF,
        }
    }

    /// Mask selecting the sign bit of an operand of this width.
    #[inline]
    pub fn sign_bit(self) -> u16 {
        match self {
            Width::Word => 0x8000,
            Width::Byte => 0x0080,
        }
    }

    /// Assembler suffix used by the disassembler (`.w` / `.b`).
    pub fn suffix(self) -> &'static str {
        match self {
            Width::Word => ".w",
            Width::Byte => ".b",
        }
    }
}
