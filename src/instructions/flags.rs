//! # Flag Manipulation Instructions
//!
//! This module implements the explicit flag set/clear operations:
//! - CLC, SEC: Carry
//! - CLI, SEI: Interrupt disable
//! - CLV: Overflow (clear only; the 6502 has no "set overflow" instruction)
//! - CLD, SED: Decimal mode
//!
//! Decimal mode is tracked as a flag bit but has no effect on execution in
//! this core.

use crate::memory::Bus;
use crate::status::Status;
use crate::Cpu;

/// Executes CLC (Clear Carry).
pub(crate) fn execute_clc<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.status.remove(Status::CARRY);
}

/// Executes SEC (Set Carry).
pub(crate) fn execute_sec<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.status.insert(Status::CARRY);
}

/// Executes CLI (Clear Interrupt Disable).
pub(crate) fn execute_cli<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
}

/// Executes SEI (Set Interrupt Disable).
pub(crate) fn execute_sei<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
}

/// Executes CLV (Clear Overflow).
pub(crate) fn execute_clv<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.status.remove(Status::OVERFLOW);
}

/// Executes CLD (Clear Decimal Mode).
pub(crate) fn execute_cld<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.status.remove(Status::DECIMAL);
}

/// Executes SED (Set Decimal Mode).
pub(crate) fn execute_sed<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.status.insert(Status::DECIMAL);
}
