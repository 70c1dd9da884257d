//! Simulation loop, run control, and program loading.
//!
//! Provides the fetch-decode-execute loop, the cancellation flag with its
//! SIGINT wiring, and utilities for loading program images into memory.

/// Run-flag and SIGINT handler installation.
pub mod cancel;

/// S-record and raw binary loading.
pub mod loader;

/// The cycle state machine and stop conditions.
pub mod simulator;

pub use cancel::{RunFlag, install_interrupt_handler};
pub use simulator::{CpuState, Simulator, StopReason};
