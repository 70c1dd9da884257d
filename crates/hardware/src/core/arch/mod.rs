//! XM23 architecture-specific components.
//!
//! The register file itself lives in `common::reg`; this module holds the
//! architectural views layered on top of it.

/// Program status word flags over R6.
pub mod psw;

pub use psw::Psw;
