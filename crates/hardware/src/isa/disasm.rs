//! Instruction Disassembler for XM23.
//!
//! Converts a 16-bit instruction word into a human-readable mnemonic string
//! for debug tracing, listings, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use xm23_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x1004), "bl #+4");
//! assert_eq!(disassemble(0x568A), "mov.w #1,r2");
//! ```

use crate::isa::decode::{
    ArithOperands, ByteOperands, Decoded, IndexedOperands, RelativeOperands, decode,
};
use crate::isa::opcodes::{CONSTANTS, arith, cond};

/// Register names for r0–r7.
const REG_NAMES: [&str; 8] = ["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"];

#[inline]
fn reg(idx: usize) -> &'static str {
    REG_NAMES[idx & 0x7]
}

/// Disassembles a 16-bit XM23 instruction into a human-readable string.
///
/// Reserved arithmetic encodings render as a `.word` directive.
///
/// # Arguments
///
/// * `inst` - The raw 16-bit instruction word.
pub fn disassemble(inst: u16) -> String {
    match decode(inst) {
        Decoded::BranchAndLink { offset } => format!("bl #{:+}", offset),
        Decoded::Branch { condition, offset } => {
            format!("{} #{:+}", cond::MNEMONICS[condition as usize], offset)
        }
        Decoded::Arithmetic { opcode, operands } => arithmetic(inst, opcode, operands),
        Decoded::Load(ops) => {
            let ptr = pointer(ops, ops.src);
            format!("ld{} {},{}", ops.width.suffix(), ptr, reg(ops.dst))
        }
        Decoded::Store(ops) => {
            let ptr = pointer(ops, ops.dst);
            format!("st{} {},{}", ops.width.suffix(), reg(ops.src), ptr)
        }
        Decoded::MoveLow(ops) => immediate("movl", ops),
        Decoded::MoveLowZero(ops) => immediate("movlz", ops),
        Decoded::MoveHigh(ops) => immediate("movh", ops),
        Decoded::LoadRelative(ops) => relative("ldr", ops, true),
        Decoded::StoreRelative(ops) => relative("str", ops, false),
    }
}

fn arithmetic(inst: u16, opcode: u8, ops: ArithOperands) -> String {
    let Some(name) = arith::MNEMONICS[opcode as usize] else {
        return format!(".word ${:04x}", inst);
    };

    match opcode {
        arith::SWPB | arith::SXT => format!("{} {}", name, reg(ops.dst)),
        arith::SRA | arith::RRC => format!("{}{} {}", name, ops.width.suffix(), reg(ops.dst)),
        arith::SWAP => format!("{} {},{}", name, reg(ops.src), reg(ops.dst)),
        _ => {
            let source = if ops.constant {
                format!("#{}", CONSTANTS[ops.src])
            } else {
                reg(ops.src).to_string()
            };
            format!("{}{} {},{}", name, ops.width.suffix(), source, reg(ops.dst))
        }
    }
}

/// Renders the pointer operand of an indexed access with its adjustment marks.
fn pointer(ops: IndexedOperands, idx: usize) -> String {
    let mut marks = String::new();
    if ops.dec {
        marks.push('-');
    }
    if ops.inc {
        marks.push('+');
    }
    if ops.pre {
        format!("{}{}", marks, reg(idx))
    } else {
        format!("{}{}", reg(idx), marks)
    }
}

fn immediate(name: &str, ops: ByteOperands) -> String {
    format!("{} #${:02x},{}", name, ops.byte, reg(ops.dst))
}

fn relative(name: &str, ops: RelativeOperands, load: bool) -> String {
    let offset = format!("#{:+}", ops.offset);
    let operands = if load {
        format!("{},{},{}", reg(ops.src), offset, reg(ops.dst))
    } else {
        format!("{},{},{}", reg(ops.src), reg(ops.dst), offset)
    };
    format!("{}{} {}", name, ops.width.suffix(), operands)
}
