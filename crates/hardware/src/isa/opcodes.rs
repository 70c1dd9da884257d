//! XM23 Opcode Definitions.
//!
//! Defines the class discriminant patterns (high bits of the instruction word),
//! the arithmetic opcode numbers (bits 12-8), the branch condition codes
//! (bits 12-10), and the LD/ST/MOVL/MOVLZ sub-types (bits 12-11).

/// Mask of the 4-bit discriminant shared by `BL` and `MOVH`.
pub const NIBBLE_CLASS_MASK: u16 = 0xF000;

/// Mask of the 3-bit discriminant used by branch, arithmetic, and LD/ST classes.
pub const TRIAD_CLASS_MASK: u16 = 0xE000;

/// Mask of the 2-bit discriminant used by `LDR` and `STR`.
pub const PAIR_CLASS_MASK: u16 = 0xC000;

/// `BL`: `0001 oooo oooo oooo`.
pub const CLASS_BL: u16 = 0x1000;

/// Conditional branches: `001c ccoo oooo oooo`.
pub const CLASS_BRANCH: u16 = 0x2000;

/// Arithmetic and register moves: `010o oooo RWss sddd`.
pub const CLASS_ARITHMETIC: u16 = 0x4000;

/// `LD`, `ST`, `MOVL`, `MOVLZ`: `011t t...`.
pub const CLASS_LD_ST_MOVL_MOVLZ: u16 = 0x6000;

/// `MOVH`: `0000 xbbb bbbb bddd`.
pub const CLASS_MOVH: u16 = 0x0000;

/// `LDR`: `10oo oooo oWss sddd`.
pub const CLASS_LDR: u16 = 0x8000;

/// `STR`: `11oo oooo oWss sddd`.
pub const CLASS_STR: u16 = 0xC000;

/// Arithmetic opcode numbers (bits 12-8). Gaps are reserved slots.
pub mod arith {
    /// `ADD`: dst += src.
    pub const ADD: u8 = 0;
    /// `ADDC`: dst += src + C.
    pub const ADDC: u8 = 2;
    /// `SUB`: dst -= src.
    pub const SUB: u8 = 4;
    /// `SUBC`: dst += ~src + C.
    pub const SUBC: u8 = 6;
    /// `DADD`: packed-BCD add with carry.
    pub const DADD: u8 = 8;
    /// `CMP`: flags of dst - src.
    pub const CMP: u8 = 10;
    /// `XOR`: dst ^= src.
    pub const XOR: u8 = 12;
    /// `AND`: dst &= src.
    pub const AND: u8 = 14;
    /// `BIT`: flags of dst & src.
    pub const BIT: u8 = 16;
    /// `SRA`: arithmetic shift right of dst.
    pub const SRA: u8 = 17;
    /// `BIC`: dst &= ~src.
    pub const BIC: u8 = 18;
    /// `RRC`: rotate dst right through carry.
    pub const RRC: u8 = 19;
    /// `BIS`: dst |= src.
    pub const BIS: u8 = 20;
    /// `SWPB`: swap the bytes of dst.
    pub const SWPB: u8 = 21;
    /// `MOV`: dst = src.
    pub const MOV: u8 = 22;
    /// `SXT`: sign-extend the low byte of dst.
    pub const SXT: u8 = 23;
    /// `SWAP`: exchange two registers.
    pub const SWAP: u8 = 24;

    /// Number of slots in the arithmetic dispatch table.
    pub const SLOTS: usize = 32;

    /// Mnemonics indexed by opcode number; `None` marks a reserved slot.
    pub const MNEMONICS: [Option<&str>; SLOTS] = [
        Some("add"),
        None,
        Some("addc"),
        None,
        Some("sub"),
        None,
        Some("subc"),
        None,
        Some("dadd"),
        None,
        Some("cmp"),
        None,
        Some("xor"),
        None,
        Some("and"),
        None,
        Some("bit"),
        Some("sra"),
        Some("bic"),
        Some("rrc"),
        Some("bis"),
        Some("swpb"),
        Some("mov"),
        Some("sxt"),
        Some("swap"),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
    ];

    /// Returns true for opcodes that act on the destination register alone.
    pub fn is_single_operand(opcode: u8) -> bool {
        matches!(opcode, SRA | RRC | SWPB | SXT)
    }
}

/// Branch condition codes (bits 12-10).
pub mod cond {
    /// `BEQ`/`BZ`: Z set.
    pub const EQ: u8 = 0;
    /// `BNE`/`BNZ`: Z clear.
    pub const NE: u8 = 1;
    /// `BC`/`BHS`: C set.
    pub const C: u8 = 2;
    /// `BNC`/`BLO`: C clear.
    pub const NC: u8 = 3;
    /// `BN`: N set.
    pub const N: u8 = 4;
    /// `BGE`: N equals V.
    pub const GE: u8 = 5;
    /// `BLT`: N differs from V.
    pub const LT: u8 = 6;
    /// `BAL`: always.
    pub const AL: u8 = 7;

    /// Number of slots in the branch dispatch table.
    pub const SLOTS: usize = 8;

    /// Mnemonics indexed by condition code.
    pub const MNEMONICS: [&str; SLOTS] = ["beq", "bne", "bc", "bnc", "bn", "bge", "blt", "bal"];
}

/// LD/ST/MOVL/MOVLZ sub-types (bits 12-11).
pub mod ldst {
    /// Indexed load.
    pub const LD: u8 = 0b00;
    /// Indexed store.
    pub const ST: u8 = 0b01;
    /// Move byte into the low half.
    pub const MOVL: u8 = 0b10;
    /// Move byte into the low half, clearing the high half.
    pub const MOVLZ: u8 = 0b11;
}

/// Source constants selected by the SRC field when R/C is set.
pub const CONSTANTS: [i16; 8] = [0, 1, 2, 4, 8, 16, 32, -1];
