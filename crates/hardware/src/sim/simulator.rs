//! Simulator: the fetch-decode-execute loop around a `Cpu`.
//!
//! Each cycle walks the states `Fetch -> Decode -> Execute -> HandleDevices`.
//! A fetch at the halt address skips straight to `HandleDevices`. The stop
//! conditions (run-flag, cycle limit, breakpoints) are checked only between
//! complete cycles.

use std::fmt;

use crate::config::Config;
use crate::core::Cpu;
use crate::isa::disasm::disassemble;
use crate::isa::{Decoded, decode};
use crate::sim::cancel::RunFlag;
use crate::soc::System;

/// State of the cycle state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    /// Read the word at PC and advance PC.
    Fetch,
    /// Split the fetched word into class and operands.
    Decode {
        /// Address the word was fetched from.
        pc: u16,
        /// Raw instruction word.
        word: u16,
    },
    /// Run the handler for the decoded instruction.
    Execute(Decoded),
    /// Service attached devices; ends the cycle.
    HandleDevices,
}

/// Why `Simulator::run` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The run-flag was cleared.
    Cancelled,
    /// The configured cycle budget for this run was used up.
    CycleLimit,
    /// PC reached a breakpoint.
    Breakpoint(u16),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Cancelled => write!(f, "cancelled"),
            StopReason::CycleLimit => write!(f, "cycle limit reached"),
            StopReason::Breakpoint(pc) => write!(f, "breakpoint at {:#06x}", pc),
        }
    }
}

/// Top-level simulator: CPU state plus run control.
pub struct Simulator {
    /// CPU architectural state (registers, clock, bus, stats).
    pub cpu: Cpu,
    run_flag: RunFlag,
    /// Maximum cycles per `run` call.
    pub max_cycles: Option<u64>,
    /// Addresses that stop `run` when PC reaches them.
    pub breakpoints: Vec<u16>,
}

impl Simulator {
    /// Creates a new simulator with the given system and configuration.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(system, config),
            run_flag: RunFlag::new(),
            max_cycles: config.general.max_cycles,
            breakpoints: config.general.breakpoints.clone(),
        }
    }

    /// Handle to the run-flag; clear it to stop a run at the next cycle boundary.
    pub fn run_flag(&self) -> &RunFlag {
        &self.run_flag
    }

    /// Runs cycles until a stop condition holds.
    ///
    /// The run-flag is set at the start of every call. Breakpoints are not
    /// checked before the first cycle, so a run stopped at a breakpoint can be
    /// resumed by calling `run` again.
    pub fn run(&mut self) -> StopReason {
        self.run_flag.arm();
        let mut ran: u64 = 0;

        let reason = loop {
            if !self.run_flag.is_running() {
                break StopReason::Cancelled;
            }
            if self.max_cycles.is_some_and(|limit| ran >= limit) {
                break StopReason::CycleLimit;
            }
            let pc = self.cpu.regs.pc();
            if ran > 0 && self.breakpoints.contains(&pc) {
                break StopReason::Breakpoint(pc);
            }

            self.step();
            ran += 1;
        };

        tracing::debug!(
            reason = %reason,
            cycles = ran,
            clock = self.cpu.clock,
            "run stopped"
        );
        reason
    }

    /// Runs exactly one complete cycle.
    pub fn step(&mut self) {
        let mut state = CpuState::Fetch;
        loop {
            state = match state {
                CpuState::Fetch => {
                    let pc = self.cpu.regs.pc();
                    match self.cpu.fetch() {
                        Some(word) => CpuState::Decode { pc, word },
                        None => {
                            self.cpu.stats.idle_cycles += 1;
                            CpuState::HandleDevices
                        }
                    }
                }
                CpuState::Decode { pc, word } => {
                    if self.cpu.trace {
                        tracing::trace!(
                            pc = format!("{:#06x}", pc),
                            word = format!("{:#06x}", word),
                            "{}",
                            disassemble(word)
                        );
                    }
                    CpuState::Execute(decode(word))
                }
                CpuState::Execute(decoded) => {
                    self.cpu.execute(decoded);
                    CpuState::HandleDevices
                }
                CpuState::HandleDevices => {
                    self.cpu.handle_devices();
                    self.cpu.stats.cycles += 1;
                    return;
                }
            };
        }
    }
}
