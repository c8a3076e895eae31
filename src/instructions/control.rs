//! # Control Flow Instructions
//!
//! This module implements the unconditional control transfers:
//! - JMP: Jump, absolute and indirect
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//!
//! JSR pushes the address of its own last operand byte (the instruction's
//! start + 2), high byte first; RTS pulls that word and adds one, landing on
//! the byte after the JSR. The off-by-one is a matched pair: neither side
//! makes sense without the other.

use crate::addressing::AddressingMode;
use crate::memory::Bus;
use crate::Cpu;

/// Executes JMP (Jump).
///
/// Absolute mode jumps to the operand address. Indirect mode reads the
/// target from the pointer given by the operand, with a plain 16-bit
/// increment between the pointer bytes even across a page boundary.
pub(crate) fn execute_jmp<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let target = cpu.effective_address(mode);
    cpu.pc = target;
}

/// Executes JSR (Jump to Subroutine).
///
/// Pushes PC - 1 (pointing at the last operand byte) high byte first, then
/// jumps to the operand address.
pub(crate) fn execute_jsr<B: Bus>(cpu: &mut Cpu<B>) {
    let target = cpu.fetch_word();
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_addr);
    cpu.pc = target;
}

/// Executes RTS (Return from Subroutine).
///
/// Pulls the return address (low byte first) and resumes at that address
/// plus one.
pub(crate) fn execute_rts<B: Bus>(cpu: &mut Cpu<B>) {
    let return_addr = cpu.pull_word();
    cpu.pc = return_addr.wrapping_add(1);
}
