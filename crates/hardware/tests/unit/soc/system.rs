//! # System Tests
//!
//! Bus delegation to the backing store, image loading, and the order in
//! which devices are serviced.

use crate::common::mocks::bus::{MockBus, MockPeripheral, SyncDevice};
use crate::common::mocks::memory::TickCounter;
use mockall::Sequence;
use mockall::predicate::eq;
use xm23_core::common::Width;
use xm23_core::soc::{MemoryBus, System};

#[test]
fn reads_and_writes_reach_backing_store() {
    let mut bus = MockBus::new();
    bus.expect_write()
        .with(eq(0x0400), eq(Width::Word), eq(0xBEEF))
        .times(1)
        .return_const(());
    bus.expect_read()
        .with(eq(0x0400), eq(Width::Byte))
        .times(1)
        .return_const(0x00EFu16);

    let mut system = System::with_memory(Box::new(bus));
    system.write(0x0400, Width::Word, 0xBEEF);
    assert_eq!(system.read(0x0400, Width::Byte), 0x00EF);
}

#[test]
fn load_at_copies_bytes_and_wraps() {
    let mut system = System::new();
    system.load_at(&[0x04, 0x10, 0xAA], 0xFFFE);
    assert_eq!(system.read(0xFFFE, Width::Word), 0x1004);
    assert_eq!(system.read(0x0000, Width::Byte), 0xAA);
}

#[test]
fn devices_are_serviced_in_registration_order() {
    let mut seq = Sequence::new();
    let mut first = MockPeripheral::new();
    first
        .expect_serviced()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    let mut second = MockPeripheral::new();
    second
        .expect_serviced()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut system = System::new();
    let first = SyncDevice::new(first, "FIRST");
    let second = SyncDevice::new(second, "SECOND");
    system.add_device(Box::new(first));
    system.add_device(Box::new(second));
    assert_eq!(system.device_count(), 2);

    system.handle_devices();
}

#[test]
fn every_device_runs_each_cycle() {
    let mut system = System::new();
    system.add_device(Box::new(TickCounter::new(0x0600)));
    system.add_device(Box::new(TickCounter::new(0x0600)));

    system.handle_devices();
    // Both counters write 1; the second overwrites the first.
    assert_eq!(system.read(0x0600, Width::Word), 1);

    system.handle_devices();
    assert_eq!(system.read(0x0600, Width::Word), 2);
}

#[test]
fn no_devices_is_a_no_op() {
    let mut system = System::new();
    assert_eq!(system.device_count(), 0);
    system.handle_devices();
    assert_eq!(system.read(0x0000, Width::Word), 0);
}
