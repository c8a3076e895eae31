//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register

use crate::addressing::AddressingMode;
use crate::memory::Bus;
use crate::Cpu;

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte into the accumulator, setting the zero and negative flags
/// from the loaded value.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a = value;
    cpu.update_nz(value);
}

/// Executes the LDX (Load X Register) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if X = 0
/// - Negative (N): Set if bit 7 of X is set
/// - Other flags: Not affected
pub(crate) fn execute_ldx<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.x = value;
    cpu.update_nz(value);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if Y = 0
/// - Negative (N): Set if bit 7 of Y is set
/// - Other flags: Not affected
pub(crate) fn execute_ldy<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.y = value;
    cpu.update_nz(value);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Writes the accumulator to memory. No flags are affected.
pub(crate) fn execute_sta<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    cpu.bus.write(addr, cpu.a);
}

/// Executes the STX (Store X Register) instruction. No flags are affected.
pub(crate) fn execute_stx<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    cpu.bus.write(addr, cpu.x);
}

/// Executes the STY (Store Y Register) instruction. No flags are affected.
pub(crate) fn execute_sty<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    cpu.bus.write(addr, cpu.y);
}
