//! System Components.
//!
//! This module organizes the components outside the CPU: the memory bus
//! contract, the RAM array, the device hook, and the `System` that ties them
//! together.

/// System builder for assembling memory and devices.
pub mod builder;

/// Main memory implementation.
pub mod memory;

/// Memory bus and device trait definitions.
pub mod traits;

pub use builder::System;
pub use memory::Memory;
pub use traits::{Device, MemoryBus};
