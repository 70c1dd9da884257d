//! Opcode handlers.
//!
//! One function per mnemonic. Handlers receive the CPU and the decoded operand
//! record and touch only the registers, flags, and memory those operands name.
//! The arithmetic and branch handlers are reached through the dispatch tables;
//! `BL` and the load/store/move handlers are called directly by `execute`.
//!
//! Where an instruction writes both a destination register and the status
//! word, the status word is written first so that an explicit write to R6
//! (`PSW`) takes effect.

use super::Cpu;
use crate::common::Width;
use crate::common::constants::REG_LR;
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::{bru, lsu};
use crate::isa::decode::{ArithOperands, ByteOperands, IndexedOperands, RelativeOperands};
use crate::isa::opcodes::{CONSTANTS, cond};
use crate::soc::MemoryBus;

/// `BL`: saves the return address in LR and branches.
pub fn branch_and_link(cpu: &mut Cpu, offset: i16) {
    let pc = cpu.regs.pc();
    cpu.regs.write_u16(REG_LR, pc);
    cpu.regs.set_pc(bru::target(pc, offset));
}

fn branch_if(cpu: &mut Cpu, condition: u8, offset: i16) {
    if bru::condition_holds(condition, cpu.psw()) {
        cpu.stats.branches_taken += 1;
        let pc = cpu.regs.pc();
        cpu.regs.set_pc(bru::target(pc, offset));
    }
}

/// `BEQ`/`BZ`.
pub fn beq(cpu: &mut Cpu, offset: i16) {
    branch_if(cpu, cond::EQ, offset);
}

/// `BNE`/`BNZ`.
pub fn bne(cpu: &mut Cpu, offset: i16) {
    branch_if(cpu, cond::NE, offset);
}

/// `BC`/`BHS`.
pub fn bc(cpu: &mut Cpu, offset: i16) {
    branch_if(cpu, cond::C, offset);
}

/// `BNC`/`BLO`.
pub fn bnc(cpu: &mut Cpu, offset: i16) {
    branch_if(cpu, cond::NC, offset);
}

/// `BN`.
pub fn bn(cpu: &mut Cpu, offset: i16) {
    branch_if(cpu, cond::N, offset);
}

/// `BGE`.
pub fn bge(cpu: &mut Cpu, offset: i16) {
    branch_if(cpu, cond::GE, offset);
}

/// `BLT`.
pub fn blt(cpu: &mut Cpu, offset: i16) {
    branch_if(cpu, cond::LT, offset);
}

/// `BAL`.
pub fn bal(cpu: &mut Cpu, offset: i16) {
    branch_if(cpu, cond::AL, offset);
}

/// Resolves the source operand: a register, or a constant when R/C is set.
fn source(cpu: &Cpu, ops: ArithOperands) -> u16 {
    if ops.constant {
        CONSTANTS[ops.src & 0x7] as u16
    } else {
        cpu.regs.read_u16(ops.src)
    }
}

/// Runs an ALU operation and writes back the flags and, if any, the result.
fn alu(cpu: &mut Cpu, op: AluOp, ops: ArithOperands) {
    let dst = cpu.regs.read_u16(ops.dst);
    let src = source(cpu, ops);
    let out = Alu::execute(op, dst, src, ops.width, cpu.psw());

    cpu.set_psw(out.psw);
    if let Some(result) = out.result {
        cpu.write_reg(ops.dst, ops.width, result);
    }
}

/// Reserved arithmetic slot: no architectural effect.
pub fn reserved(cpu: &mut Cpu, _ops: ArithOperands) {
    cpu.stats.inst_reserved += 1;
}

/// `ADD`.
pub fn add(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Add, ops);
}

/// `ADDC`.
pub fn addc(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Addc, ops);
}

/// `SUB`.
pub fn sub(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Sub, ops);
}

/// `SUBC`.
pub fn subc(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Subc, ops);
}

/// `DADD`.
pub fn dadd(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Dadd, ops);
}

/// `CMP`.
pub fn cmp(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Cmp, ops);
}

/// `XOR`.
pub fn xor(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Xor, ops);
}

/// `AND`.
pub fn and(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::And, ops);
}

/// `BIT`.
pub fn bit(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Bit, ops);
}

/// `BIC`.
pub fn bic(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Bic, ops);
}

/// `BIS`.
pub fn bis(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Bis, ops);
}

/// `MOV`.
pub fn mov(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Mov, ops);
}

/// `SRA`.
pub fn sra(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Sra, ops);
}

/// `RRC`.
pub fn rrc(cpu: &mut Cpu, ops: ArithOperands) {
    alu(cpu, AluOp::Rrc, ops);
}

/// `SWPB`: always a word operation.
pub fn swpb(cpu: &mut Cpu, ops: ArithOperands) {
    let ops = ArithOperands {
        width: Width::Word,
        ..ops
    };
    alu(cpu, AluOp::Swpb, ops);
}

/// `SXT`: always a word operation.
pub fn sxt(cpu: &mut Cpu, ops: ArithOperands) {
    let ops = ArithOperands {
        width: Width::Word,
        ..ops
    };
    alu(cpu, AluOp::Sxt, ops);
}

/// `SWAP`: exchanges registers SRC and DST. R/C and W/B are ignored.
pub fn swap(cpu: &mut Cpu, ops: ArithOperands) {
    let a = cpu.regs.read(ops.src);
    let b = cpu.regs.read(ops.dst);
    cpu.regs.write(ops.src, b);
    cpu.regs.write(ops.dst, a);
}

/// `LD`: `DST <- mem[SRC]`, with SRC as the auto-indexed pointer.
pub fn load(cpu: &mut Cpu, ops: IndexedOperands) {
    let access = lsu::indexed(
        cpu.regs.read_u16(ops.src),
        ops.pre,
        ops.dec,
        ops.inc,
        ops.width,
    );
    let value = cpu.bus.read(access.address, ops.width);

    cpu.regs.write_u16(ops.src, access.pointer);
    cpu.write_reg(ops.dst, ops.width, value);
    cpu.stats.inst_load += 1;
}

/// `ST`: `mem[DST] <- SRC`, with DST as the auto-indexed pointer.
pub fn store(cpu: &mut Cpu, ops: IndexedOperands) {
    let value = cpu.regs.read_u16(ops.src);
    let access = lsu::indexed(
        cpu.regs.read_u16(ops.dst),
        ops.pre,
        ops.dec,
        ops.inc,
        ops.width,
    );

    cpu.bus.write(access.address, ops.width, value);
    cpu.regs.write_u16(ops.dst, access.pointer);
    cpu.stats.inst_store += 1;
}

/// `LDR`: `DST <- mem[SRC + offset]`.
pub fn load_relative(cpu: &mut Cpu, ops: RelativeOperands) {
    let address = lsu::relative(cpu.regs.read_u16(ops.src), ops.offset);
    let value = cpu.bus.read(address, ops.width);
    cpu.write_reg(ops.dst, ops.width, value);
}

/// `STR`: `mem[DST + offset] <- SRC`.
pub fn store_relative(cpu: &mut Cpu, ops: RelativeOperands) {
    let address = lsu::relative(cpu.regs.read_u16(ops.dst), ops.offset);
    let value = cpu.regs.read_u16(ops.src);
    cpu.bus.write(address, ops.width, value);
}

/// `MOVL`: replaces the low byte of DST.
pub fn movl(cpu: &mut Cpu, ops: ByteOperands) {
    cpu.write_reg(ops.dst, Width::Byte, ops.byte as u16);
    cpu.stats.inst_move += 1;
}

/// `MOVLZ`: loads the byte zero-extended.
pub fn movlz(cpu: &mut Cpu, ops: ByteOperands) {
    cpu.regs.write_u16(ops.dst, ops.byte as u16);
    cpu.stats.inst_move += 1;
}

/// `MOVH`: replaces the high byte of DST.
pub fn movh(cpu: &mut Cpu, ops: ByteOperands) {
    let low = cpu.regs.read_u16(ops.dst) & 0x00FF;
    cpu.regs.write_u16(ops.dst, ((ops.byte as u16) << 8) | low);
}
