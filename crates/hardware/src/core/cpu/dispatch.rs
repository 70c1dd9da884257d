//! Opcode dispatch tables.
//!
//! Two fixed-size arrays of handler function pointers, indexed directly by the
//! decoded condition code and arithmetic opcode. Every slot is populated:
//! reserved arithmetic opcodes map to an explicit no-op, so dispatch can never
//! land on a missing entry.

use super::Cpu;
use super::handlers as h;
use crate::isa::decode::ArithOperands;
use crate::isa::opcodes::{arith, cond};

/// Handler for a conditional branch; receives the signed word offset.
pub type BranchHandler = fn(&mut Cpu, i16);

/// Handler for an arithmetic-class instruction.
pub type ArithHandler = fn(&mut Cpu, ArithOperands);

/// Branch handlers indexed by condition code (bits 12-10).
pub static BRANCH_TABLE: [BranchHandler; cond::SLOTS] = [
    h::beq, // 0 BEQ/BZ
    h::bne, // 1 BNE/BNZ
    h::bc,  // 2 BC/BHS
    h::bnc, // 3 BNC/BLO
    h::bn,  // 4 BN
    h::bge, // 5 BGE
    h::blt, // 6 BLT
    h::bal, // 7 BAL
];

/// Arithmetic handlers indexed by opcode (bits 12-8).
pub static ARITHMETIC_TABLE: [ArithHandler; arith::SLOTS] = [
    h::add,      // 0
    h::reserved, // 1
    h::addc,     // 2
    h::reserved, // 3
    h::sub,      // 4
    h::reserved, // 5
    h::subc,     // 6
    h::reserved, // 7
    h::dadd,     // 8
    h::reserved, // 9
    h::cmp,      // 10
    h::reserved, // 11
    h::xor,      // 12
    h::reserved, // 13
    h::and,      // 14
    h::reserved, // 15
    h::bit,      // 16
    h::sra,      // 17
    h::bic,      // 18
    h::rrc,      // 19
    h::bis,      // 20
    h::swpb,     // 21
    h::mov,      // 22
    h::sxt,      // 23
    h::swap,     // 24
    h::reserved, // 25
    h::reserved, // 26
    h::reserved, // 27
    h::reserved, // 28
    h::reserved, // 29
    h::reserved, // 30
    h::reserved, // 31
];

/// Looks up the branch handler for a condition code.
#[inline]
pub fn branch_handler(condition: u8) -> BranchHandler {
    BRANCH_TABLE[(condition as usize) % cond::SLOTS]
}

/// Looks up the arithmetic handler for an opcode.
#[inline]
pub fn arithmetic_handler(opcode: u8) -> ArithHandler {
    ARITHMETIC_TABLE[(opcode as usize) % arith::SLOTS]
}
