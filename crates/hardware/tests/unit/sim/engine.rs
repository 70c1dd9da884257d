//! # Run Loop Tests
//!
//! Cycle-level behavior of the simulator: PC advance, the halt address,
//! device service, and the stop conditions checked between cycles.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::common::builder::instruction::{Indexing, ld, movh, movlz};
use crate::common::harness::TestContext;
use crate::common::mocks::bus::{MockBus, MockPeripheral, SyncDevice};
use crate::common::mocks::memory::{Access, CancelAfter, RecordingMemory, TickCounter};
use proptest::prelude::*;
use xm23_core::common::Width;
use xm23_core::common::constants::{HCF_ADDRESS, REG_PC};
use xm23_core::sim::StopReason;
use xm23_core::soc::System;

// ─── PC and clock ────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pc_advances_two_per_cycle(start: u16, cycles in 0u64..300) {
        let mut ctx = TestContext::new().load_program(start, &[]);
        ctx.run(cycles);

        let idles = (0..cycles)
            .filter(|k| start.wrapping_add((*k as u16).wrapping_mul(2)) == HCF_ADDRESS)
            .count() as u64;
        prop_assert_eq!(ctx.get_reg(REG_PC), start.wrapping_add((cycles as u16).wrapping_mul(2)));
        prop_assert_eq!(ctx.cpu().clock, cycles - idles);
        prop_assert_eq!(ctx.cpu().stats.cycles, cycles);
        prop_assert_eq!(ctx.cpu().stats.idle_cycles, idles);
    }
}

// ─── Halt address ────────────────────────────────────────────────────────────

#[test]
fn halt_address_idles_without_touching_the_bus() {
    // No expectations: any bus access fails the test.
    let system = System::with_memory(Box::new(MockBus::new()));
    let ctx = TestContext::with_system(system);
    let mut ctx = ctx.load_program(HCF_ADDRESS, &[]);

    ctx.run(1);

    assert_eq!(ctx.get_reg(REG_PC), 0x0001);
    assert_eq!(ctx.cpu().clock, 0);
    assert_eq!(ctx.cpu().stats.idle_cycles, 1);
    assert_eq!(ctx.cpu().stats.cycles, 1);
}

#[test]
fn devices_run_on_idle_cycles() {
    let mut peripheral = MockPeripheral::new();
    peripheral.expect_serviced().times(3).return_const(());
    let device = SyncDevice::new(peripheral, "PERIPHERAL");
    let handle = device.clone();

    let mut ctx = TestContext::new()
        .with_device(Box::new(device))
        .load_program(HCF_ADDRESS, &[]);
    ctx.run(3);

    assert_eq!(ctx.cpu().clock, 2);
    handle.mock.lock().unwrap().checkpoint();
}

#[test]
fn fetch_skips_the_halt_address_mid_program() {
    let (memory, log) = RecordingMemory::new();
    let system = System::with_memory(Box::new(memory));
    let mut ctx = TestContext::with_system(system).load_program(0xFFFD, &[]);
    log.lock().unwrap().clear();

    ctx.run(3);

    let fetches = vec![
        Access::Read(0xFFFD, Width::Word),
        Access::Read(0x0001, Width::Word),
    ];
    assert_eq!(*log.lock().unwrap(), fetches);
    assert_eq!(ctx.cpu().clock, 2);
    assert_eq!(ctx.get_reg(REG_PC), 0x0003);
    assert_eq!(ctx.cpu().stats.instructions, 2);
    assert_eq!(ctx.cpu().stats.idle_cycles, 1);
}

// ─── Devices ─────────────────────────────────────────────────────────────────

#[test]
fn device_writes_are_visible_to_the_program() {
    let load = ld(Indexing::PLAIN, false, 1, 0);
    let program = [movlz(0x00, 1), movh(0x08, 1), load];
    let mut ctx = TestContext::new()
        .with_device(Box::new(TickCounter::new(0x0800)))
        .load_program(0x0100, &program);

    ctx.run(3);

    // Two services happened before the load executed.
    assert_eq!(ctx.get_reg(0), 2);
    assert_eq!(ctx.read_word(0x0800), 3);
}

// ─── Stop conditions ─────────────────────────────────────────────────────────

#[test]
fn cancellation_is_seen_at_the_next_cycle_boundary() {
    let mut ctx = TestContext::new().load_program(0x0100, &[]);
    let device = CancelAfter::new(ctx.sim.run_flag().clone(), 3);
    let serviced = Arc::clone(&device.serviced);
    ctx = ctx.with_device(Box::new(device));

    assert_eq!(ctx.sim.run(), StopReason::Cancelled);
    assert_eq!(ctx.cpu().clock, 3);
    assert_eq!(*serviced.lock().unwrap(), 3);

    // The next run re-arms the flag; the device cancels again after one cycle.
    assert_eq!(ctx.sim.run(), StopReason::Cancelled);
    assert_eq!(ctx.cpu().clock, 4);
}

#[test]
fn devices_after_the_canceller_still_run() {
    let mut ctx = TestContext::new().load_program(0x0100, &[]);
    let canceller = CancelAfter::new(ctx.sim.run_flag().clone(), 2);
    let serviced = Arc::clone(&canceller.serviced);
    ctx = ctx
        .with_device(Box::new(canceller))
        .with_device(Box::new(TickCounter::new(0x0900)));

    assert_eq!(ctx.sim.run(), StopReason::Cancelled);
    // The cycle that raised the cancel completed, and no third fetch happened.
    assert_eq!(ctx.cpu().clock, 2);
    assert_eq!(*serviced.lock().unwrap(), 2);
    assert_eq!(ctx.read_word(0x0900), 2);
    assert_eq!(ctx.get_reg(REG_PC), 0x0104);
    assert_eq!(ctx.cpu().stats.cycles, 2);
}

#[test]
fn cancellation_from_another_thread() {
    let mut ctx = TestContext::new().load_program(0x0100, &[]);
    let flag = ctx.sim.run_flag().clone();
    let done = Arc::new(AtomicBool::new(false));
    let stopper = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            while !done.load(Ordering::Acquire) {
                thread::sleep(Duration::from_millis(1));
                flag.cancel();
            }
        })
    };

    assert_eq!(ctx.sim.run(), StopReason::Cancelled);
    done.store(true, Ordering::Release);
    stopper.join().unwrap();
}

#[test]
fn cycle_limit_applies_per_run() {
    let mut ctx = TestContext::new().load_program(0x0100, &[]);
    ctx.sim.max_cycles = Some(5);

    assert_eq!(ctx.sim.run(), StopReason::CycleLimit);
    assert_eq!(ctx.cpu().clock, 5);
    assert_eq!(ctx.sim.run(), StopReason::CycleLimit);
    assert_eq!(ctx.cpu().clock, 10);
}

#[test]
fn zero_cycle_limit_runs_nothing() {
    let mut ctx = TestContext::new().load_program(0x0100, &[]);
    ctx.sim.max_cycles = Some(0);
    assert_eq!(ctx.sim.run(), StopReason::CycleLimit);
    assert_eq!(ctx.cpu().clock, 0);
}

#[test]
fn breakpoint_stops_and_resumes() {
    let mut ctx = TestContext::new().load_program(0x0100, &[]);
    ctx.sim.breakpoints = vec![0x0106];

    assert_eq!(ctx.sim.run(), StopReason::Breakpoint(0x0106));
    assert_eq!(ctx.cpu().clock, 3);
    assert_eq!(ctx.get_reg(REG_PC), 0x0106);

    ctx.sim.max_cycles = Some(2);
    assert_eq!(ctx.sim.run(), StopReason::CycleLimit);
    assert_eq!(ctx.get_reg(REG_PC), 0x010A);
}

#[test]
fn breakpoint_at_start_is_not_checked_before_the_first_cycle() {
    let mut ctx = TestContext::new().load_program(0x0100, &[]);
    ctx.sim.breakpoints = vec![0x0100];
    ctx.sim.max_cycles = Some(4);
    assert_eq!(ctx.sim.run(), StopReason::CycleLimit);
}

#[test]
fn stop_reasons_display() {
    assert_eq!(StopReason::Cancelled.to_string(), "cancelled");
    assert_eq!(StopReason::CycleLimit.to_string(), "cycle limit reached");
    let breakpoint = StopReason::Breakpoint(0x10A);
    assert_eq!(breakpoint.to_string(), "breakpoint at 0x010a");
}

// ─── Tracing and stats ───────────────────────────────────────────────────────

#[test]
fn tracing_does_not_change_execution() {
    let program = [movlz(0x34, 2), movh(0x12, 2)];
    let mut ctx = TestContext::new().load_program(0x0100, &program);
    ctx.cpu_mut().trace = true;
    ctx.run(2);
    assert_eq!(ctx.get_reg(2), 0x1234);
}

#[test]
fn stats_separate_idle_cycles() {
    let mut ctx = TestContext::new().load_program(HCF_ADDRESS, &[]);
    ctx.run(3);
    let stats = &ctx.cpu().stats;
    assert_eq!(stats.cycles, 3);
    assert_eq!(stats.instructions, 2);
    assert_eq!(stats.idle_cycles, 1);
    assert_eq!(stats.inst_move, 2);
}
