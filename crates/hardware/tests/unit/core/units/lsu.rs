//! Load/Store Unit Tests.
//!
//! Effective addresses for pre/post indexed accesses at both widths and for
//! base-relative accesses.

use xm23_core::common::Width;
use xm23_core::core::units::lsu::{IndexedAccess, indexed, relative};

#[test]
fn plain_access_leaves_pointer() {
    let access = indexed(0x0400, false, false, false, Width::Word);
    assert_eq!(
        access,
        IndexedAccess {
            address: 0x0400,
            pointer: 0x0400,
        }
    );
}

#[test]
fn post_increment_uses_old_pointer() {
    let access = indexed(0x0400, false, false, true, Width::Word);
    assert_eq!(access.address, 0x0400);
    assert_eq!(access.pointer, 0x0402);
}

#[test]
fn pre_decrement_uses_new_pointer() {
    let access = indexed(0x0400, true, true, false, Width::Word);
    assert_eq!(access.address, 0x03FE);
    assert_eq!(access.pointer, 0x03FE);
}

#[test]
fn byte_accesses_step_by_one() {
    let post = indexed(0x0400, false, false, true, Width::Byte);
    assert_eq!(post.pointer, 0x0401);
    let pre = indexed(0x0400, true, true, false, Width::Byte);
    assert_eq!(pre.address, 0x03FF);
}

#[test]
fn decrement_and_increment_cancel() {
    let access = indexed(0x0400, true, true, true, Width::Word);
    assert_eq!(access.address, 0x0400);
    assert_eq!(access.pointer, 0x0400);
}

#[test]
fn pointers_wrap() {
    let down = indexed(0x0000, true, true, false, Width::Word);
    assert_eq!(down.address, 0xFFFE);
    let up = indexed(0xFFFF, false, false, true, Width::Byte);
    assert_eq!(up.pointer, 0x0000);
}

#[test]
fn relative_offsets_are_signed_bytes() {
    assert_eq!(relative(0x0410, -16), 0x0400);
    assert_eq!(relative(0x0400, 63), 0x043F);
    assert_eq!(relative(0x0010, -64), 0xFFD0);
}
