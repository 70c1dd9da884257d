//! Run-flag and interrupt-signal wiring.
//!
//! The run-flag is the only state shared between the simulation loop and
//! anything outside it. The loop polls it between complete cycles; a signal
//! handler, a device, or another thread clears it to stop the run.

use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::common::SimError;

/// Shared run/stop flag.
///
/// Clones share the same underlying flag.
#[derive(Clone, Debug, Default)]
pub struct RunFlag(Arc<AtomicBool>);

impl RunFlag {
    /// Creates a flag in the stopped state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the flag as running. Called at the start of every run.
    pub fn arm(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Requests a stop at the next cycle boundary.
    pub fn cancel(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Returns whether the loop should keep cycling.
    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn same_as(&self, other: &RunFlag) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Flag cleared by the SIGINT handler. Set once per process.
static INTERRUPT_TARGET: OnceLock<RunFlag> = OnceLock::new();

#[cfg(unix)]
extern "C" fn on_interrupt(_signal: libc::c_int) {
    if let Some(flag) = INTERRUPT_TARGET.get() {
        flag.cancel();
    }
    // SAFETY: re-installing the same handler; `signal` is async-signal-safe.
    let _ = unsafe { libc::signal(libc::SIGINT, interrupt_handler_address()) };
}

#[cfg(unix)]
fn interrupt_handler_address() -> libc::sighandler_t {
    on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t
}

/// Installs a SIGINT handler that cancels `flag`.
///
/// The handler re-arms itself after every delivery, so each further Ctrl-C is
/// observed as well. Only one flag can be registered per process; installing
/// again with the same flag is allowed.
///
/// # Errors
///
/// Returns `SimError::SignalHandler` if a different flag is already
/// registered, if the platform call fails, or on non-Unix hosts.
pub fn install_interrupt_handler(flag: &RunFlag) -> Result<(), SimError> {
    let registered = INTERRUPT_TARGET.get_or_init(|| flag.clone());
    if !registered.same_as(flag) {
        return Err(SimError::SignalHandler(
            "an interrupt handler is already registered for another simulator".to_string(),
        ));
    }
    register_signal()
}

#[cfg(unix)]
fn register_signal() -> Result<(), SimError> {
    // SAFETY: `on_interrupt` only touches atomics and re-installs itself.
    let previous = unsafe { libc::signal(libc::SIGINT, interrupt_handler_address()) };
    if previous == libc::SIG_ERR {
        return Err(SimError::SignalHandler(
            std::io::Error::last_os_error().to_string(),
        ));
    }
    tracing::debug!("SIGINT handler installed");
    Ok(())
}

#[cfg(not(unix))]
fn register_signal() -> Result<(), SimError> {
    Err(SimError::SignalHandler(
        "interrupt handling is only supported on Unix hosts".to_string(),
    ))
}
