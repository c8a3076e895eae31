//! # Stack Instructions
//!
//! This module implements the push/pull operations:
//! - PHA, PLA: Accumulator
//! - PHP, PLP: Status register
//!
//! The stack lives in page one (0x0100-0x01FF) and grows downward. A push
//! stores at 0x0100 + SP then decrements SP; a pull increments SP then loads.
//! SP wraps modulo 256 in both directions.

use crate::memory::Bus;
use crate::status::Status;
use crate::Cpu;

/// Executes PHA (Push Accumulator). No flags are affected.
pub(crate) fn execute_pha<B: Bus>(cpu: &mut Cpu<B>) {
    let a = cpu.a;
    cpu.push(a);
}

/// Executes PHP (Push Processor Status).
///
/// Pushes the packed status byte. No flags are affected.
pub(crate) fn execute_php<B: Bus>(cpu: &mut Cpu<B>) {
    let status = cpu.status.to_byte();
    cpu.push(status);
}

/// Executes PLA (Pull Accumulator).
///
/// Pulls a byte into the accumulator and updates Z and N from it.
pub(crate) fn execute_pla<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.update_nz(value);
}

/// Executes PLP (Pull Processor Status).
///
/// Replaces the whole status register with the pulled byte, every flag at
/// once. Bits 4 and 5 round-trip unchanged through push and pull.
pub(crate) fn execute_plp<B: Bus>(cpu: &mut Cpu<B>) {
    let byte = cpu.pull();
    cpu.status = Status::from_byte(byte);
}
