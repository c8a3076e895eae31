//! Tests for NOP and for the illegal-opcode policy.
//!
//! Tests cover:
//! - NOP advances PC by one and changes nothing else
//! - The default policy ignores unimplemented opcodes as one-byte NOPs
//! - The fault policy returns an error carrying the opcode and its address
//! - PC advances past the opcode byte under both policies

use m6502::{Bus, Cpu, FlatMemory, IllegalOpcodePolicy, Status, StepError};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = Cpu::new(memory);
    cpu.reset();
    cpu
}

#[test]
fn test_nop_advances_pc_only() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x11);
    cpu.set_status(Status::CARRY);
    cpu.bus_mut().write(0x8000, 0xEA); // NOP

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.status(), Status::CARRY);
}

#[test]
fn test_default_policy_ignores_illegal_opcode() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0x02); // no documented instruction
    cpu.bus_mut().load(0x8001, &[0xA9, 0x42]); // LDA #$42

    assert_eq!(cpu.step(), Ok(()));
    assert_eq!(cpu.pc(), 0x8001);

    // Execution continues normally on the next byte
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_fault_policy_reports_opcode_and_address() {
    let mut cpu = setup_cpu().with_illegal_opcode_policy(IllegalOpcodePolicy::Fault);
    cpu.bus_mut().write(0x8000, 0x02);

    assert_eq!(
        cpu.step(),
        Err(StepError::IllegalOpcode {
            opcode: 0x02,
            pc: 0x8000
        })
    );

    // PC advanced past the opcode byte; the caller can resume
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_fault_policy_applies_to_unimplemented_documented_opcodes() {
    let mut cpu = setup_cpu().with_illegal_opcode_policy(IllegalOpcodePolicy::Fault);
    cpu.bus_mut().write(0x8000, 0x00); // BRK is decoded but not dispatched

    assert_eq!(
        cpu.step(),
        Err(StepError::IllegalOpcode {
            opcode: 0x00,
            pc: 0x8000
        })
    );
}

#[test]
fn test_illegal_opcode_consumes_one_byte() {
    let mut cpu = setup_cpu();
    // 0xAF would be LAX abs on real silicon, three bytes; here it consumes
    // only the opcode byte
    cpu.bus_mut().write(0x8000, 0xAF);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_step_error_display() {
    let err = StepError::IllegalOpcode {
        opcode: 0x02,
        pc: 0x8000,
    };
    assert_eq!(err.to_string(), "Illegal opcode 0x02 at 0x8000");
}
