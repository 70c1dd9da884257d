//! XM23 Instruction Decoder.
//!
//! This module classifies a raw 16-bit instruction word and extracts its
//! operand fields into a `Decoded` record. Decoding is total: every one of the
//! 65,536 possible words maps to exactly one class, and reserved encodings are
//! left for the dispatch tables to resolve as no-ops.
//!
//! Classes are tested in a fixed priority order against the high bits of the
//! word: `BL`, conditional branch, arithmetic, LD/ST/MOVL/MOVLZ, `MOVH`, then
//! `LDR`/`STR`.

use crate::common::Width;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::{self, ldst};

/// Instruction class selected by the discriminant bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Unconditional branch that saves the return address in LR.
    BranchAndLink,
    /// Conditional branch selected by a 3-bit condition code.
    Branch,
    /// Two-operand ALU and register data movement.
    Arithmetic,
    /// Indexed load/store and low-byte immediate moves.
    LdStMovlMovlz,
    /// Immediate move into the high byte.
    MoveHigh,
    /// Base-relative load.
    LoadRelative,
    /// Base-relative store.
    StoreRelative,
}

/// Operands of an arithmetic-class instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArithOperands {
    /// SRC field is a constant selector rather than a register.
    pub constant: bool,
    /// Operand width.
    pub width: Width,
    /// Source register or constant selector (0-7).
    pub src: usize,
    /// Destination register (0-7).
    pub dst: usize,
}

/// Operands of an indexed `LD`/`ST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexedOperands {
    /// Adjust the pointer before the access (otherwise after).
    pub pre: bool,
    /// Decrement the pointer register.
    pub dec: bool,
    /// Increment the pointer register.
    pub inc: bool,
    /// Access width.
    pub width: Width,
    /// Source register.
    pub src: usize,
    /// Destination register.
    pub dst: usize,
}

/// Operands of `MOVL`, `MOVLZ`, and `MOVH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteOperands {
    /// Immediate byte.
    pub byte: u8,
    /// Destination register.
    pub dst: usize,
}

/// Operands of `LDR`/`STR`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelativeOperands {
    /// Signed byte offset added to the base register.
    pub offset: i16,
    /// Access width.
    pub width: Width,
    /// Source register.
    pub src: usize,
    /// Destination register.
    pub dst: usize,
}

/// A fully decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// `BL` with its signed word offset.
    BranchAndLink {
        /// Signed offset in words.
        offset: i16,
    },
    /// Conditional branch.
    Branch {
        /// Condition code (0-7), index into the branch table.
        condition: u8,
        /// Signed offset in words.
        offset: i16,
    },
    /// Arithmetic-class instruction.
    Arithmetic {
        /// Opcode (0-31), index into the arithmetic table.
        opcode: u8,
        /// Operand fields.
        operands: ArithOperands,
    },
    /// Indexed load.
    Load(IndexedOperands),
    /// Indexed store.
    Store(IndexedOperands),
    /// `MOVL`.
    MoveLow(ByteOperands),
    /// `MOVLZ`.
    MoveLowZero(ByteOperands),
    /// `MOVH`.
    MoveHigh(ByteOperands),
    /// `LDR`.
    LoadRelative(RelativeOperands),
    /// `STR`.
    StoreRelative(RelativeOperands),
}

impl Decoded {
    /// Returns the class this instruction belongs to.
    pub fn class(&self) -> InstructionClass {
        match self {
            Decoded::BranchAndLink { .. } => InstructionClass::BranchAndLink,
            Decoded::Branch { .. } => InstructionClass::Branch,
            Decoded::Arithmetic { .. } => InstructionClass::Arithmetic,
            Decoded::Load(_)
            | Decoded::Store(_)
            | Decoded::MoveLow(_)
            | Decoded::MoveLowZero(_) => InstructionClass::LdStMovlMovlz,
            Decoded::MoveHigh(_) => InstructionClass::MoveHigh,
            Decoded::LoadRelative(_) => InstructionClass::LoadRelative,
            Decoded::StoreRelative(_) => InstructionClass::StoreRelative,
        }
    }
}

/// Classifies an instruction word without extracting operands.
///
/// # Arguments
///
/// * `inst` - The raw 16-bit instruction word.
pub fn classify(inst: u16) -> InstructionClass {
    if inst & opcodes::NIBBLE_CLASS_MASK == opcodes::CLASS_BL {
        InstructionClass::BranchAndLink
    } else if inst & opcodes::TRIAD_CLASS_MASK == opcodes::CLASS_BRANCH {
        InstructionClass::Branch
    } else if inst & opcodes::TRIAD_CLASS_MASK == opcodes::CLASS_ARITHMETIC {
        InstructionClass::Arithmetic
    } else if inst & opcodes::TRIAD_CLASS_MASK == opcodes::CLASS_LD_ST_MOVL_MOVLZ {
        InstructionClass::LdStMovlMovlz
    } else if inst & opcodes::NIBBLE_CLASS_MASK == opcodes::CLASS_MOVH {
        InstructionClass::MoveHigh
    } else if inst & opcodes::PAIR_CLASS_MASK == opcodes::CLASS_LDR {
        InstructionClass::LoadRelative
    } else {
        InstructionClass::StoreRelative
    }
}

/// Decodes an instruction word into its class and operand fields.
///
/// # Arguments
///
/// * `inst` - The raw 16-bit instruction word.
///
/// # Returns
///
/// A `Decoded` value; this never fails.
pub fn decode(inst: u16) -> Decoded {
    match classify(inst) {
        InstructionClass::BranchAndLink => Decoded::BranchAndLink {
            offset: inst.bl_offset(),
        },
        InstructionClass::Branch => Decoded::Branch {
            condition: inst.condition(),
            offset: inst.branch_offset(),
        },
        InstructionClass::Arithmetic => Decoded::Arithmetic {
            opcode: inst.arith_opcode(),
            operands: ArithOperands {
                constant: inst.rc(),
                width: Width::from_bit(inst.wb()),
                src: inst.src(),
                dst: inst.dst(),
            },
        },
        InstructionClass::LdStMovlMovlz => decode_ld_st_movl_movlz(inst),
        InstructionClass::MoveHigh => Decoded::MoveHigh(byte_operands(inst)),
        InstructionClass::LoadRelative => Decoded::LoadRelative(relative_operands(inst)),
        InstructionClass::StoreRelative => Decoded::StoreRelative(relative_operands(inst)),
    }
}

/// Splits the LD/ST/MOVL/MOVLZ class on bits 12-11.
fn decode_ld_st_movl_movlz(inst: u16) -> Decoded {
    match inst.ldst_type() {
        ldst::LD => Decoded::Load(indexed_operands(inst)),
        ldst::ST => Decoded::Store(indexed_operands(inst)),
        ldst::MOVL => Decoded::MoveLow(byte_operands(inst)),
        _ => Decoded::MoveLowZero(byte_operands(inst)),
    }
}

fn indexed_operands(inst: u16) -> IndexedOperands {
    IndexedOperands {
        pre: inst.prpo(),
        dec: inst.dec(),
        inc: inst.inc(),
        width: Width::from_bit(inst.wb()),
        src: inst.src(),
        dst: inst.dst(),
    }
}

fn byte_operands(inst: u16) -> ByteOperands {
    ByteOperands {
        byte: inst.imm_byte(),
        dst: inst.dst(),
    }
}

fn relative_operands(inst: u16) -> RelativeOperands {
    RelativeOperands {
        offset: inst.rel_offset(),
        width: Width::from_bit(inst.wb()),
        src: inst.src(),
        dst: inst.dst(),
    }
}
