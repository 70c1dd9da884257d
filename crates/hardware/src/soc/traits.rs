//! Bus and device traits.
//!
//! This module defines the two seams between the CPU and the rest of the system. It provides:
//! 1. **MemoryBus:** Byte-addressable word/byte reads and writes with a little-endian guarantee.
//! 2. **Device:** A per-cycle service hook for peripherals and interrupt sources.
//!
//! All implementors must be `Send` so a whole `System` can move to a simulation thread.

use crate::common::Width;

/// Byte-addressable memory as seen by the CPU.
///
/// Word accesses at address `a` cover bytes `a` and `a + 1` (wrapping at the
/// top of the address space) and combine them little-endian: the byte at `a`
/// is the low byte. This holds regardless of host byte order.
pub trait MemoryBus: Send {
    /// Reads a word or a zero-extended byte.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address.
    /// * `width` - Access width.
    fn read(&mut self, addr: u16, width: Width) -> u16;

    /// Writes a word, or the low byte of `val` for a byte access.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address.
    /// * `width` - Access width.
    /// * `val` - Value to store.
    fn write(&mut self, addr: u16, width: Width, val: u16);

    /// Reads one byte.
    fn read_u8(&mut self, addr: u16) -> u8 {
        self.read(addr, Width::Byte) as u8
    }

    /// Writes one byte.
    fn write_u8(&mut self, addr: u16, val: u8) {
        self.write(addr, Width::Byte, val as u16);
    }
}

/// A peripheral serviced once per CPU cycle.
///
/// `service` runs in the HANDLE_DEVICES state of every cycle, including cycles
/// that idle at the halt address. Devices see memory through the bus only.
pub trait Device: Send {
    /// Returns a short name for this device (e.g., `"TIMER"`).
    fn name(&self) -> &str;

    /// Performs this device's per-cycle work.
    fn service(&mut self, memory: &mut dyn MemoryBus);
}
