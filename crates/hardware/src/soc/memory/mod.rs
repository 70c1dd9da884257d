//! Physical System Memory.
//!
//! This module implements the main memory array: 64 KiB of byte storage
//! implementing `MemoryBus`. It provides:
//! 1. **Storage:** A zero-initialized byte buffer covering the whole address space.
//! 2. **Access:** Little-endian word and byte reads and writes with 16-bit address wrap.
//! 3. **Loading:** Bulk copy of program images.

use crate::common::Width;
use crate::common::constants::MEMORY_SIZE;
use crate::soc::traits::MemoryBus;

/// System Memory structure.
pub struct Memory {
    bytes: Vec<u8>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a new, zero-filled 64 KiB memory.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE],
        }
    }

    /// Loads a byte slice into memory starting at `addr`.
    ///
    /// Bytes past `0xFFFF` wrap around to the bottom of memory.
    ///
    /// # Arguments
    ///
    /// * `data` - The data to write.
    /// * `addr` - The first byte address written.
    pub fn load(&mut self, data: &[u8], addr: u16) {
        for (i, byte) in data.iter().enumerate() {
            let a = addr.wrapping_add(i as u16) as usize;
            self.bytes[a] = *byte;
        }
    }

    /// Returns `len` bytes starting at `addr`, clamped to the end of memory.
    pub fn read_slice(&self, addr: u16, len: usize) -> &[u8] {
        let start = addr as usize;
        let end = (start + len).min(MEMORY_SIZE);
        &self.bytes[start..end]
    }
}

impl MemoryBus for Memory {
    fn read(&mut self, addr: u16, width: Width) -> u16 {
        let lo = self.bytes[addr as usize];
        match width {
            Width::Byte => lo as u16,
            Width::Word => {
                let hi = self.bytes[addr.wrapping_add(1) as usize];
                u16::from_le_bytes([lo, hi])
            }
        }
    }

    fn write(&mut self, addr: u16, width: Width, val: u16) {
        let [lo, hi] = val.to_le_bytes();
        self.bytes[addr as usize] = lo;
        if width == Width::Word {
            self.bytes[addr.wrapping_add(1) as usize] = hi;
        }
    }
}
