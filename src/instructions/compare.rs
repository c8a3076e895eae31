//! # Comparison Instructions
//!
//! This module implements the register/operand comparisons:
//! - CMP: Compare accumulator
//! - CPX: Compare X register
//! - CPY: Compare Y register
//!
//! Flag behavior:
//! - Carry (C): set when `operand <= register` (unsigned, "no borrow")
//! - Zero (Z) and Negative (N): applied to the register value itself
//!
//! Carry comes from the operand/register relationship directly, not from
//! bit 8 of a subtraction, and Overflow is never touched. The register is
//! never modified.

use crate::addressing::AddressingMode;
use crate::memory::Bus;
use crate::status::Status;
use crate::Cpu;

fn compare<B: Bus>(cpu: &mut Cpu<B>, register: u8, mode: AddressingMode) {
    let operand = cpu.operand_value(mode);

    cpu.status.assign(Status::CARRY, operand <= register);
    cpu.update_nz(register);
}

/// Executes CMP (Compare Accumulator).
pub(crate) fn execute_cmp<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let a = cpu.a;
    compare(cpu, a, mode);
}

/// Executes CPX (Compare X Register).
pub(crate) fn execute_cpx<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let x = cpu.x;
    compare(cpu, x, mode);
}

/// Executes CPY (Compare Y Register).
pub(crate) fn execute_cpy<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let y = cpu.y;
    compare(cpu, y, mode);
}
