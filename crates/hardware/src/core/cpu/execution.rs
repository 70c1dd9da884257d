//! Cycle Actions.
//!
//! This module implements the per-state work of the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the word at PC, unless PC is the halt address, and advances PC by 2.
//! 2. **Execute:** Routes a decoded instruction to its handler and advances the clock.
//! 3. **Device Service:** Gives every attached device its per-cycle turn.
//!
//! The loop that sequences these actions lives in `sim::simulator`.

use super::Cpu;
use super::dispatch;
use super::handlers;
use crate::common::{HCF_ADDRESS, INSTRUCTION_SIZE, Width};
use crate::isa::Decoded;
use crate::soc::MemoryBus;

impl Cpu {
    /// Fetches the instruction at PC.
    ///
    /// PC is advanced by 2 (wrapping) whether or not a word was read. When PC
    /// holds the halt address the bus is not touched and `None` is returned;
    /// the caller treats that as an idle cycle.
    pub fn fetch(&mut self) -> Option<u16> {
        let pc = self.regs.pc();
        self.regs.set_pc(pc.wrapping_add(INSTRUCTION_SIZE));

        if pc == HCF_ADDRESS {
            tracing::debug!(pc = format!("{:#06x}", pc), "idle at halt address");
            return None;
        }
        Some(self.bus.read(pc, Width::Word))
    }

    /// Executes a decoded instruction and advances the system clock by one.
    ///
    /// `BL` and the load/store/move forms go straight to their handlers;
    /// conditional branches and arithmetic instructions go through the
    /// dispatch tables.
    pub fn execute(&mut self, decoded: Decoded) {
        self.stats.record(decoded.class());

        match decoded {
            Decoded::BranchAndLink { offset } => handlers::branch_and_link(self, offset),
            Decoded::Branch { condition, offset } => {
                dispatch::branch_handler(condition)(self, offset)
            }
            Decoded::Arithmetic { opcode, operands } => {
                dispatch::arithmetic_handler(opcode)(self, operands)
            }
            Decoded::Load(ops) => handlers::load(self, ops),
            Decoded::Store(ops) => handlers::store(self, ops),
            Decoded::MoveLow(ops) => handlers::movl(self, ops),
            Decoded::MoveLowZero(ops) => handlers::movlz(self, ops),
            Decoded::MoveHigh(ops) => handlers::movh(self, ops),
            Decoded::LoadRelative(ops) => handlers::load_relative(self, ops),
            Decoded::StoreRelative(ops) => handlers::store_relative(self, ops),
        }

        self.clock += 1;
    }

    /// Services every attached device once.
    pub fn handle_devices(&mut self) {
        self.bus.handle_devices();
    }
}
