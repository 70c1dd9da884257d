//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the XM23 simulator. It provides:
//! 1. **Cycles:** Total cycles, executed instructions, and idle cycles spent at the halt address.
//! 2. **Instruction mix:** Counts by class (branch-and-link, branch, ALU, memory, moves).
//! 3. **Branches:** How many conditional branches were taken.

use std::time::Instant;

use crate::isa::InstructionClass;

/// Simulation statistics structure tracking execution metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed, idle cycles included.
    pub cycles: u64,
    /// Number of instructions that reached execute.
    pub instructions: u64,
    /// Cycles where the fetch address was the halt address.
    pub idle_cycles: u64,

    /// Count of `BL` instructions executed.
    pub inst_branch_link: u64,
    /// Count of conditional branches executed.
    pub inst_branch: u64,
    /// Conditional branches whose condition held.
    pub branches_taken: u64,
    /// Count of arithmetic-class instructions executed.
    pub inst_alu: u64,
    /// Arithmetic-class instructions that landed on a reserved opcode.
    pub inst_reserved: u64,
    /// Count of `LD` and `LDR` instructions executed.
    pub inst_load: u64,
    /// Count of `ST` and `STR` instructions executed.
    pub inst_store: u64,
    /// Count of `MOVL`, `MOVLZ`, and `MOVH` instructions executed.
    pub inst_move: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions: 0,
            idle_cycles: 0,
            inst_branch_link: 0,
            inst_branch: 0,
            branches_taken: 0,
            inst_alu: 0,
            inst_reserved: 0,
            inst_load: 0,
            inst_store: 0,
            inst_move: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

impl SimStats {
    /// Counts one executed instruction of the given class.
    ///
    /// Loads and stores share a class with the low-byte moves, so the
    /// handlers refine those counts themselves.
    pub fn record(&mut self, class: InstructionClass) {
        self.instructions += 1;
        match class {
            InstructionClass::BranchAndLink => self.inst_branch_link += 1,
            InstructionClass::Branch => self.inst_branch += 1,
            InstructionClass::Arithmetic => self.inst_alu += 1,
            InstructionClass::MoveHigh => self.inst_move += 1,
            InstructionClass::LoadRelative => self.inst_load += 1,
            InstructionClass::StoreRelative => self.inst_store += 1,
            InstructionClass::LdStMovlMovlz => {}
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let instr = self.instructions.max(1);
        let pct = |n: u64, total: u64| (n as f64 / total as f64) * 100.0;

        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("XM23 SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {:.4} s", seconds);
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {:.2} kHz", khz);
            println!("sim_insts                {}", self.instructions);
            println!(
                "sim_idle                 {} ({:.2}%)",
                self.idle_cycles,
                pct(self.idle_cycles, cyc)
            );
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            let rows = [
                ("op.bl", self.inst_branch_link),
                ("op.branch", self.inst_branch),
                ("op.alu", self.inst_alu),
                ("op.reserved", self.inst_reserved),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.move", self.inst_move),
            ];
            for (name, count) in rows {
                println!("  {:<22} {} ({:.2}%)", name, count, pct(count, instr));
            }
            println!("----------------------------------------------------------");
        }
        if want("branch") {
            let total = self.inst_branch.max(1);
            println!("BRANCHES");
            println!("  branch.conditional     {}", self.inst_branch);
            println!(
                "  branch.taken           {} ({:.2}%)",
                self.branches_taken,
                pct(self.branches_taken, total)
            );
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
