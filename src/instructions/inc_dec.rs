//! # Increment and Decrement Instructions
//!
//! This module implements the register increment/decrement operations:
//! - INX, DEX: X register
//! - INY, DEY: Y register
//!
//! All four wrap modulo 256 (0xFF + 1 = 0x00, 0x00 - 1 = 0xFF) and update
//! the zero and negative flags from the result.

use crate::memory::Bus;
use crate::Cpu;

/// Executes INX (Increment X).
pub(crate) fn execute_inx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_nz(cpu.x);
}

/// Executes DEX (Decrement X).
pub(crate) fn execute_dex<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_nz(cpu.x);
}

/// Executes INY (Increment Y).
pub(crate) fn execute_iny<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_nz(cpu.y);
}

/// Executes DEY (Decrement Y).
pub(crate) fn execute_dey<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_nz(cpu.y);
}
