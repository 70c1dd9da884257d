//! Common utilities and types used throughout the XM23 simulator.
//!
//! This module provides the building blocks shared by every other component. It includes:
//! 1. **Constants:** Architectural addresses, register indices, and sizes.
//! 2. **Access Width:** The word/byte selector carried by memory and ALU operations.
//! 3. **Error Handling:** The `SimError` type for fallible operations outside the core loop.
//! 4. **Register Management:** The eight-entry architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory and operand width definitions.
pub mod data;

/// Error types for loading, configuration, and host integration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{HCF_ADDRESS, INSTRUCTION_SIZE};
pub use data::Width;
pub use error::SimError;
pub use reg::RegisterFile;
