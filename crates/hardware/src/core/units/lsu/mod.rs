//! Load/Store Unit (LSU).
//!
//! Computes effective addresses for the two memory addressing forms:
//! indexed (`LD`/`ST` with pre/post auto-increment/decrement) and
//! base-relative (`LDR`/`STR` with a signed byte offset).

use crate::common::Width;

/// Address computation for an indexed access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexedAccess {
    /// Address presented to the bus.
    pub address: u16,
    /// Value written back to the pointer register.
    pub pointer: u16,
}

/// Computes an indexed access.
///
/// The pointer moves by the access size: DEC subtracts it, INC adds it (both
/// together cancel). In pre mode the moved pointer is the address; in post
/// mode the original pointer is.
///
/// # Arguments
///
/// * `pointer` - Current value of the pointer register.
/// * `pre` - Adjust before the access.
/// * `dec` - Auto-decrement.
/// * `inc` - Auto-increment.
/// * `width` - Access width (1 or 2 byte step).
pub fn indexed(pointer: u16, pre: bool, dec: bool, inc: bool, width: Width) -> IndexedAccess {
    let step = width.bytes();
    let mut moved = pointer;
    if dec {
        moved = moved.wrapping_sub(step);
    }
    if inc {
        moved = moved.wrapping_add(step);
    }

    IndexedAccess {
        address: if pre { moved } else { pointer },
        pointer: moved,
    }
}

/// Computes `base + offset` with 16-bit wrap.
#[inline]
pub fn relative(base: u16, offset: i16) -> u16 {
    base.wrapping_add(offset as u16)
}
