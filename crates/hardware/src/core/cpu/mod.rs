//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and the system clock.
//! 2. **Cycle Actions:** Fetch with halt-address interception, execute, and device service.
//! 3. **Dispatch:** Fixed tables mapping branch conditions and arithmetic opcodes to handlers.
//! 4. **System Integration:** Owns the bus and its devices.

/// Branch and arithmetic dispatch tables.
pub mod dispatch;

/// Fetch, execute, and device-service actions of a cycle.
pub mod execution;

/// One handler per mnemonic.
pub mod handlers;

use crate::common::constants::{REG_PSW, REG_SP};
use crate::common::{RegisterFile, Width};
use crate::config::Config;
use crate::core::arch::Psw;
use crate::soc::System;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
pub struct Cpu {
    /// R0-R7, including LR, SP, PSW, and PC.
    pub regs: RegisterFile,
    /// System clock; counts instructions that reached execute.
    pub clock: u64,
    /// System bus and devices.
    pub bus: System,
    /// Execution statistics.
    pub stats: SimStats,
    /// Enable instruction tracing.
    pub trace: bool,
}

impl Cpu {
    /// Creates a new CPU instance with the specified system and configuration.
    ///
    /// # Arguments
    ///
    /// * `system` - Bus with memory and devices already attached.
    /// * `config` - Supplies the start PC, optional stack pointer, and trace flag.
    pub fn new(system: System, config: &Config) -> Self {
        let mut regs = RegisterFile::new();
        regs.set_pc(config.general.start_pc);
        if let Some(sp) = config.general.initial_sp {
            regs.write_u16(REG_SP, sp);
        }

        Self {
            regs,
            clock: 0,
            bus: system,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Current status flags decoded from R6.
    #[inline]
    pub fn psw(&self) -> Psw {
        Psw::from_bits(self.regs.psw_bits())
    }

    /// Writes status flags back to R6.
    #[inline]
    pub fn set_psw(&mut self, psw: Psw) {
        self.regs.write_u16(REG_PSW, psw.to_bits());
    }

    /// Writes `val` into a register at the given width.
    ///
    /// A byte write replaces only the low byte; the high byte is preserved.
    pub fn write_reg(&mut self, idx: usize, width: Width, val: u16) {
        let merged = match width {
            Width::Word => val,
            Width::Byte => (self.regs.read_u16(idx) & 0xFF00) | (val & 0x00FF),
        };
        self.regs.write_u16(idx, merged);
    }
}
