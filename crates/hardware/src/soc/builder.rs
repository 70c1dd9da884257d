//! System construction and top-level `System` type.
//!
//! This module assembles the memory bus and the attached devices. It performs:
//! 1. **Memory setup:** Installs the 64 KiB RAM, or a caller-supplied backing store.
//! 2. **Device registration:** Keeps devices in registration order for per-cycle service.
//! 3. **Binary loading:** Copies program images onto the bus via `load_at`.

use crate::common::Width;
use crate::soc::memory::Memory;
use crate::soc::traits::{Device, MemoryBus};

/// Top-level system instance: memory plus devices.
///
/// `System` itself implements `MemoryBus` by forwarding to its backing store,
/// so handlers and the fetch path see a single bus.
pub struct System {
    memory: Box<dyn MemoryBus>,
    devices: Vec<Box<dyn Device>>,
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

impl System {
    /// Builds a system with zero-filled RAM and no devices.
    pub fn new() -> Self {
        Self::with_memory(Box::new(Memory::new()))
    }

    /// Builds a system around a caller-supplied backing store.
    ///
    /// # Arguments
    ///
    /// * `memory` - Any `MemoryBus` implementation (RAM, a recording mock, ...).
    pub fn with_memory(memory: Box<dyn MemoryBus>) -> Self {
        Self {
            memory,
            devices: Vec::new(),
        }
    }

    /// Attaches a device; devices are serviced in the order they are added.
    pub fn add_device(&mut self, device: Box<dyn Device>) {
        tracing::debug!(device = device.name(), "device attached");
        self.devices.push(device);
    }

    /// Number of attached devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Loads a binary into memory at the given address, wrapping at `0xFFFF`.
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes to write.
    /// * `addr` - First byte address.
    pub fn load_at(&mut self, data: &[u8], addr: u16) {
        for (i, byte) in data.iter().enumerate() {
            self.memory.write_u8(addr.wrapping_add(i as u16), *byte);
        }
    }

    /// Services every attached device once (the HANDLE_DEVICES state).
    pub fn handle_devices(&mut self) {
        for device in self.devices.iter_mut() {
            device.service(self.memory.as_mut());
        }
    }
}

impl MemoryBus for System {
    fn read(&mut self, addr: u16, width: Width) -> u16 {
        self.memory.read(addr, width)
    }

    fn write(&mut self, addr: u16, width: Width, val: u16) {
        self.memory.write(addr, width, val);
    }
}
