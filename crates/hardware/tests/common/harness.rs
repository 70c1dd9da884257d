use xm23_core::Simulator;
use xm23_core::common::Width;
use xm23_core::config::Config;
use xm23_core::core::Cpu;
use xm23_core::soc::{Device, MemoryBus, System};

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_system(System::new())
    }

    /// Build around a caller-assembled system (custom memory or devices).
    pub fn with_system(system: System) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        let config = Config::default();
        Self {
            sim: Simulator::new(system, &config),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    pub fn with_device(mut self, device: Box<dyn Device>) -> Self {
        self.sim.cpu.bus.add_device(device);
        self
    }

    /// Load a sequence of instruction words at `addr` and set the PC.
    pub fn load_program(mut self, addr: u16, instructions: &[u16]) -> Self {
        for (i, inst) in instructions.iter().enumerate() {
            let offset = addr.wrapping_add((i as u16) * 2);
            self.sim.cpu.bus.write(offset, Width::Word, *inst);
        }
        self.sim.cpu.regs.set_pc(addr);
        self
    }

    /// Set a register value (raw 16-bit pattern).
    pub fn set_reg(&mut self, reg: usize, val: u16) {
        self.sim.cpu.regs.write_u16(reg, val);
    }

    /// Read a register value (raw 16-bit pattern).
    pub fn get_reg(&self, reg: usize) -> u16 {
        self.sim.cpu.regs.read_u16(reg)
    }

    pub fn read_word(&mut self, addr: u16) -> u16 {
        self.sim.cpu.bus.read(addr, Width::Word)
    }

    pub fn write_word(&mut self, addr: u16, val: u16) {
        self.sim.cpu.bus.write(addr, Width::Word, val);
    }

    pub fn read_byte(&mut self, addr: u16) -> u8 {
        self.sim.cpu.bus.read_u8(addr)
    }

    /// Run exactly `cycles` complete cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.sim.step();
        }
    }
}
