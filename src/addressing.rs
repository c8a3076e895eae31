//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502. Each mode
//! determines how many operand bytes an instruction consumes after its
//! opcode and how the effective operand location is computed.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndexedIndirect, IndirectIndexed
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Example: LSR A
    Accumulator,

    /// 8-bit constant operand in the instruction stream.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in the zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X.
    ///
    /// Example: LDA $80,X. The sum wraps within the zero page: base 0xF0
    /// with X = 0x20 resolves to 0x0010, never 0x0110.
    ZeroPageX,

    /// Zero page address indexed by Y.
    ///
    /// Example: LDX $80,Y. Wraps within the zero page like ZeroPageX.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (offset is relative to the PC after the operand)
    Relative,

    /// Full 16-bit little-endian address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Example: LDA $1234,X. The sum is a full 16-bit addition and may cross
    /// a page boundary: base 0x20FE with X = 0x05 resolves to 0x2103.
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Example: LDA $1234,Y. Full 16-bit addition, no zero-page wrap.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($1234) reads the target address from 0x1234/0x1235.
    /// The NMOS page-boundary quirk is not reproduced: the high byte is
    /// always read from pointer + 1.
    Indirect,

    /// Indexed indirect: (ZP + X), then dereference.
    ///
    /// Example: LDA ($40,X). X is added to the operand within the zero page,
    /// and the 16-bit target is read from that zero-page location.
    IndexedIndirect,

    /// Indirect indexed: ZP dereference, then + Y.
    ///
    /// Example: LDA ($40),Y. The 16-bit base is read from zero page 0x40,
    /// then Y is added with full 16-bit arithmetic.
    IndirectIndexed,
}
