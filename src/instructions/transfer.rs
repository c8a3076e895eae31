//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers:
//! - TAX, TXA: Accumulator <-> X
//! - TAY, TYA: Accumulator <-> Y
//! - TSX, TXS: Stack pointer <-> X
//!
//! Every transfer except TXS updates the zero and negative flags from the
//! copied value. TXS is the one asymmetry: loading the stack pointer leaves
//! the flags untouched.

use crate::memory::Bus;
use crate::Cpu;

/// Executes TAX (Transfer A to X). Updates Z and N from the copied value.
pub(crate) fn execute_tax<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.a;
    cpu.update_nz(cpu.x);
}

/// Executes TXA (Transfer X to A). Updates Z and N from the copied value.
pub(crate) fn execute_txa<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.x;
    cpu.update_nz(cpu.a);
}

/// Executes TAY (Transfer A to Y). Updates Z and N from the copied value.
pub(crate) fn execute_tay<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.a;
    cpu.update_nz(cpu.y);
}

/// Executes TYA (Transfer Y to A). Updates Z and N from the copied value.
pub(crate) fn execute_tya<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.y;
    cpu.update_nz(cpu.a);
}

/// Executes TSX (Transfer SP to X). Updates Z and N from the copied value.
pub(crate) fn execute_tsx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.sp;
    cpu.update_nz(cpu.x);
}

/// Executes TXS (Transfer X to SP). No flags are affected.
pub(crate) fn execute_txs<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sp = cpu.x;
}
