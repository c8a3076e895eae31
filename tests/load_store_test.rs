//! Tests for the load and store instructions (LDA, LDX, LDY, STA, STX, STY).
//!
//! Tests cover:
//! - Every addressing mode of every load/store opcode
//! - Z and N updates on loads, no flag changes on stores
//! - Zero-page indexed wraparound inside page zero
//! - Absolute indexed carry into the high address byte
//! - Zero-page pointer wraparound in the indirect modes

use m6502::{Bus, Cpu, FlatMemory, Status};

/// Creates a CPU with the reset vector pointing at 0x8000, already reset.
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = Cpu::new(memory);
    cpu.reset();
    cpu
}

// ========== LDA ==========

#[test]
fn test_lda_immediate() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xA9, 0x42]); // LDA #$42

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x8002);
    assert!(!cpu.status().contains(Status::ZERO));
    assert!(!cpu.status().contains(Status::NEGATIVE));
}

#[test]
fn test_lda_sets_zero_flag() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x55);
    cpu.bus_mut().load(0x8000, &[0xA9, 0x00]); // LDA #$00

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().contains(Status::ZERO));
    assert!(!cpu.status().contains(Status::NEGATIVE));
}

#[test]
fn test_lda_sets_negative_flag() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xA9, 0x80]); // LDA #$80

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.status().contains(Status::ZERO));
    assert!(cpu.status().contains(Status::NEGATIVE));
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x0042, 0x37);
    cpu.bus_mut().load(0x8000, &[0xA5, 0x42]); // LDA $42

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x05);
    cpu.bus_mut().write(0x0047, 0x37);
    cpu.bus_mut().load(0x8000, &[0xB5, 0x42]); // LDA $42,X

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x37);
}

#[test]
fn test_lda_zero_page_x_wraps_in_page_zero() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x20);
    // 0xF0 + 0x20 wraps to 0x10, never touching 0x0110
    cpu.bus_mut().write(0x0010, 0xAB);
    cpu.bus_mut().write(0x0110, 0xCD);
    cpu.bus_mut().load(0x8000, &[0xB5, 0xF0]); // LDA $F0,X

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAB);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x1234, 0x99);
    cpu.bus_mut().load(0x8000, &[0xAD, 0x34, 0x12]); // LDA $1234

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_lda_absolute_x_crosses_page() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x05);
    // 0x20FE + 5 = 0x2103: the carry propagates into the high byte
    cpu.bus_mut().write(0x2103, 0x77);
    cpu.bus_mut().load(0x8000, &[0xBD, 0xFE, 0x20]); // LDA $20FE,X

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_lda_absolute_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x10);
    cpu.bus_mut().write(0x1244, 0x55);
    cpu.bus_mut().load(0x8000, &[0xB9, 0x34, 0x12]); // LDA $1234,Y

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_lda_indexed_indirect() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x04);
    // Pointer at (0x20 + 0x04) & 0xFF = 0x24 -> 0x1234
    cpu.bus_mut().write(0x0024, 0x34);
    cpu.bus_mut().write(0x0025, 0x12);
    cpu.bus_mut().write(0x1234, 0x66);
    cpu.bus_mut().load(0x8000, &[0xA1, 0x20]); // LDA ($20,X)

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_lda_indexed_indirect_pointer_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    // Base 0xFF + X wraps to pointer at 0x00/0x01
    cpu.bus_mut().write(0x0000, 0x00);
    cpu.bus_mut().write(0x0001, 0x30);
    cpu.bus_mut().write(0x3000, 0x11);
    cpu.bus_mut().load(0x8000, &[0xA1, 0xFF]); // LDA ($FF,X)

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x11);
}

#[test]
fn test_lda_indirect_indexed() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x10);
    // Pointer at 0x20 -> 0x1234, plus Y = 0x1244
    cpu.bus_mut().write(0x0020, 0x34);
    cpu.bus_mut().write(0x0021, 0x12);
    cpu.bus_mut().write(0x1244, 0x88);
    cpu.bus_mut().load(0x8000, &[0xB1, 0x20]); // LDA ($20),Y

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x88);
}

#[test]
fn test_lda_indirect_indexed_pointer_high_byte_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x00);
    // Pointer at 0xFF: low from 0x00FF, high from 0x0000 (not 0x0100)
    cpu.bus_mut().write(0x00FF, 0x34);
    cpu.bus_mut().write(0x0000, 0x12);
    cpu.bus_mut().write(0x0100, 0x56); // decoy
    cpu.bus_mut().write(0x1234, 0x22);
    cpu.bus_mut().load(0x8000, &[0xB1, 0xFF]); // LDA ($FF),Y

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x22);
}

// ========== LDX ==========

#[test]
fn test_ldx_immediate() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xA2, 0x42]); // LDX #$42

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x42);
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x03);
    cpu.bus_mut().write(0x0045, 0x37);
    cpu.bus_mut().load(0x8000, &[0xB6, 0x42]); // LDX $42,Y

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x37);
}

#[test]
fn test_ldx_absolute_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x01);
    cpu.bus_mut().write(0x1235, 0x80);
    cpu.bus_mut().load(0x8000, &[0xBE, 0x34, 0x12]); // LDX $1234,Y

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.status().contains(Status::NEGATIVE));
}

// ========== LDY ==========

#[test]
fn test_ldy_immediate() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xA0, 0x00]); // LDY #$00

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.status().contains(Status::ZERO));
}

#[test]
fn test_ldy_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x02);
    cpu.bus_mut().write(0x0044, 0x0F);
    cpu.bus_mut().load(0x8000, &[0xB4, 0x42]); // LDY $42,X

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x0F);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x10);
    cpu.bus_mut().write(0x1244, 0x42);
    cpu.bus_mut().load(0x8000, &[0xBC, 0x34, 0x12]); // LDY $1234,X

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x42);
}

// ========== STA ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.bus_mut().load(0x8000, &[0x85, 0x10]); // STA $10

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0010), 0x42);
}

#[test]
fn test_sta_does_not_affect_flags() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x00); // would set Z if STA updated flags
    cpu.set_status(Status::NEGATIVE);
    cpu.bus_mut().load(0x8000, &[0x85, 0x10]); // STA $10

    cpu.step().unwrap();

    assert_eq!(cpu.status(), Status::NEGATIVE);
}

#[test]
fn test_sta_absolute() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x99);
    cpu.bus_mut().load(0x8000, &[0x8D, 0x00, 0x02]); // STA $0200

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0200), 0x99);
}

#[test]
fn test_sta_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x11);
    cpu.set_x(0x05);
    cpu.bus_mut().load(0x8000, &[0x9D, 0x00, 0x02]); // STA $0200,X

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0205), 0x11);
}

#[test]
fn test_sta_indexed_indirect() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x77);
    cpu.set_x(0x04);
    cpu.bus_mut().write(0x0024, 0x00);
    cpu.bus_mut().write(0x0025, 0x03);
    cpu.bus_mut().load(0x8000, &[0x81, 0x20]); // STA ($20,X)

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0300), 0x77);
}

#[test]
fn test_sta_indirect_indexed() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x88);
    cpu.set_y(0x10);
    cpu.bus_mut().write(0x0020, 0x00);
    cpu.bus_mut().write(0x0021, 0x03);
    cpu.bus_mut().load(0x8000, &[0x91, 0x20]); // STA ($20),Y

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0310), 0x88);
}

// ========== STX and STY ==========

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x42);
    cpu.set_y(0x03);
    cpu.bus_mut().load(0x8000, &[0x96, 0x10]); // STX $10,Y

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0013), 0x42);
}

#[test]
fn test_stx_absolute() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x55);
    cpu.bus_mut().load(0x8000, &[0x8E, 0x00, 0x02]); // STX $0200

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0200), 0x55);
}

#[test]
fn test_sty_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x66);
    cpu.set_x(0x01);
    cpu.bus_mut().load(0x8000, &[0x94, 0x10]); // STY $10,X

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0011), 0x66);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x77);
    cpu.bus_mut().load(0x8000, &[0x8C, 0x00, 0x02]); // STY $0200

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0200), 0x77);
}
