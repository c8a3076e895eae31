//! # Opcode Dispatch Table
//!
//! This module contains the 256-entry decode table that maps every opcode
//! byte to an instruction kind and addressing mode. The table is the single
//! source of truth for decoding: `step()` indexes it with the fetched opcode
//! byte, making dispatch O(1) and the supported instruction set exhaustively
//! checkable.
//!
//! Entries for documented opcodes whose instruction family is not part of
//! this core (arithmetic, logical, shifts, branches, interrupts) keep their
//! real mnemonic and addressing mode but carry [`Op::Illegal`], so extending
//! the table is a matter of swapping the `op` field once the semantics
//! exist. Undocumented opcodes are marked with the `"???"` mnemonic.

use crate::addressing::AddressingMode;

/// Instruction kind executed by the CPU.
///
/// One variant per implemented instruction family member, plus
/// [`Op::Illegal`] for everything the decoder does not dispatch. What an
/// illegal opcode does at runtime is governed by
/// [`crate::IllegalOpcodePolicy`], not by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// No operation.
    Nop,
    /// Load accumulator, NZ update.
    Lda,
    /// Load X register, NZ update.
    Ldx,
    /// Load Y register, NZ update.
    Ldy,
    /// Store accumulator. No flags.
    Sta,
    /// Store X register. No flags.
    Stx,
    /// Store Y register. No flags.
    Sty,
    /// Transfer A to X, NZ update.
    Tax,
    /// Transfer X to A, NZ update.
    Txa,
    /// Transfer A to Y, NZ update.
    Tay,
    /// Transfer Y to A, NZ update.
    Tya,
    /// Transfer SP to X, NZ update.
    Tsx,
    /// Transfer X to SP. No flags.
    Txs,
    /// Increment X with wraparound, NZ update.
    Inx,
    /// Decrement X with wraparound, NZ update.
    Dex,
    /// Increment Y with wraparound, NZ update.
    Iny,
    /// Decrement Y with wraparound, NZ update.
    Dey,
    /// Compare accumulator with operand.
    Cmp,
    /// Compare X with operand.
    Cpx,
    /// Compare Y with operand.
    Cpy,
    /// Clear carry flag.
    Clc,
    /// Set carry flag.
    Sec,
    /// Clear interrupt disable flag.
    Cli,
    /// Set interrupt disable flag.
    Sei,
    /// Clear overflow flag.
    Clv,
    /// Clear decimal mode flag.
    Cld,
    /// Set decimal mode flag.
    Sed,
    /// Push accumulator.
    Pha,
    /// Push status byte.
    Php,
    /// Pull accumulator, NZ update.
    Pla,
    /// Pull status byte verbatim.
    Plp,
    /// Jump (absolute or indirect).
    Jmp,
    /// Jump to subroutine.
    Jsr,
    /// Return from subroutine.
    Rts,
    /// Not dispatched by this core; behavior set by the illegal-opcode
    /// policy. Consumes only the opcode byte.
    Illegal,
}

/// Decode table entry: instruction kind plus addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Three-letter mnemonic, or `"???"` for undocumented opcodes.
    pub mnemonic: &'static str,
    /// Instruction kind dispatched by the CPU.
    pub op: Op,
    /// How the operand bytes after the opcode are interpreted.
    pub mode: AddressingMode,
}

const fn entry(mnemonic: &'static str, op: Op, mode: AddressingMode) -> Opcode {
    Opcode { mnemonic, op, mode }
}

const ILLEGAL: Opcode = entry("???", Op::Illegal, AddressingMode::Implied);

use AddressingMode::*;

/// Complete 256-entry decode table indexed by opcode byte.
///
/// # Examples
///
/// ```
/// use m6502::{AddressingMode, Op, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.op, Op::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
///
/// // Undocumented opcode
/// assert_eq!(OPCODE_TABLE[0x02].mnemonic, "???");
/// assert_eq!(OPCODE_TABLE[0x02].op, Op::Illegal);
/// ```
pub const OPCODE_TABLE: [Opcode; 256] = [
    // 0x00-0x0F
    entry("BRK", Op::Illegal, Implied),        // 0x00
    entry("ORA", Op::Illegal, IndexedIndirect), // 0x01
    ILLEGAL,                                   // 0x02
    ILLEGAL,                                   // 0x03
    ILLEGAL,                                   // 0x04
    entry("ORA", Op::Illegal, ZeroPage),       // 0x05
    entry("ASL", Op::Illegal, ZeroPage),       // 0x06
    ILLEGAL,                                   // 0x07
    entry("PHP", Op::Php, Implied),            // 0x08
    entry("ORA", Op::Illegal, Immediate),      // 0x09
    entry("ASL", Op::Illegal, Accumulator),    // 0x0A
    ILLEGAL,                                   // 0x0B
    ILLEGAL,                                   // 0x0C
    entry("ORA", Op::Illegal, Absolute),       // 0x0D
    entry("ASL", Op::Illegal, Absolute),       // 0x0E
    ILLEGAL,                                   // 0x0F
    // 0x10-0x1F
    entry("BPL", Op::Illegal, Relative),       // 0x10
    entry("ORA", Op::Illegal, IndirectIndexed), // 0x11
    ILLEGAL,                                   // 0x12
    ILLEGAL,                                   // 0x13
    ILLEGAL,                                   // 0x14
    entry("ORA", Op::Illegal, ZeroPageX),      // 0x15
    entry("ASL", Op::Illegal, ZeroPageX),      // 0x16
    ILLEGAL,                                   // 0x17
    entry("CLC", Op::Clc, Implied),            // 0x18
    entry("ORA", Op::Illegal, AbsoluteY),      // 0x19
    ILLEGAL,                                   // 0x1A
    ILLEGAL,                                   // 0x1B
    ILLEGAL,                                   // 0x1C
    entry("ORA", Op::Illegal, AbsoluteX),      // 0x1D
    entry("ASL", Op::Illegal, AbsoluteX),      // 0x1E
    ILLEGAL,                                   // 0x1F
    // 0x20-0x2F
    entry("JSR", Op::Jsr, Absolute),           // 0x20
    entry("AND", Op::Illegal, IndexedIndirect), // 0x21
    ILLEGAL,                                   // 0x22
    ILLEGAL,                                   // 0x23
    entry("BIT", Op::Illegal, ZeroPage),       // 0x24
    entry("AND", Op::Illegal, ZeroPage),       // 0x25
    entry("ROL", Op::Illegal, ZeroPage),       // 0x26
    ILLEGAL,                                   // 0x27
    entry("PLP", Op::Plp, Implied),            // 0x28
    entry("AND", Op::Illegal, Immediate),      // 0x29
    entry("ROL", Op::Illegal, Accumulator),    // 0x2A
    ILLEGAL,                                   // 0x2B
    entry("BIT", Op::Illegal, Absolute),       // 0x2C
    entry("AND", Op::Illegal, Absolute),       // 0x2D
    entry("ROL", Op::Illegal, Absolute),       // 0x2E
    ILLEGAL,                                   // 0x2F
    // 0x30-0x3F
    entry("BMI", Op::Illegal, Relative),       // 0x30
    entry("AND", Op::Illegal, IndirectIndexed), // 0x31
    ILLEGAL,                                   // 0x32
    ILLEGAL,                                   // 0x33
    ILLEGAL,                                   // 0x34
    entry("AND", Op::Illegal, ZeroPageX),      // 0x35
    entry("ROL", Op::Illegal, ZeroPageX),      // 0x36
    ILLEGAL,                                   // 0x37
    entry("SEC", Op::Sec, Implied),            // 0x38
    entry("AND", Op::Illegal, AbsoluteY),      // 0x39
    ILLEGAL,                                   // 0x3A
    ILLEGAL,                                   // 0x3B
    ILLEGAL,                                   // 0x3C
    entry("AND", Op::Illegal, AbsoluteX),      // 0x3D
    entry("ROL", Op::Illegal, AbsoluteX),      // 0x3E
    ILLEGAL,                                   // 0x3F
    // 0x40-0x4F
    entry("RTI", Op::Illegal, Implied),        // 0x40
    entry("EOR", Op::Illegal, IndexedIndirect), // 0x41
    ILLEGAL,                                   // 0x42
    ILLEGAL,                                   // 0x43
    ILLEGAL,                                   // 0x44
    entry("EOR", Op::Illegal, ZeroPage),       // 0x45
    entry("LSR", Op::Illegal, ZeroPage),       // 0x46
    ILLEGAL,                                   // 0x47
    entry("PHA", Op::Pha, Implied),            // 0x48
    entry("EOR", Op::Illegal, Immediate),      // 0x49
    entry("LSR", Op::Illegal, Accumulator),    // 0x4A
    ILLEGAL,                                   // 0x4B
    entry("JMP", Op::Jmp, Absolute),           // 0x4C
    entry("EOR", Op::Illegal, Absolute),       // 0x4D
    entry("LSR", Op::Illegal, Absolute),       // 0x4E
    ILLEGAL,                                   // 0x4F
    // 0x50-0x5F
    entry("BVC", Op::Illegal, Relative),       // 0x50
    entry("EOR", Op::Illegal, IndirectIndexed), // 0x51
    ILLEGAL,                                   // 0x52
    ILLEGAL,                                   // 0x53
    ILLEGAL,                                   // 0x54
    entry("EOR", Op::Illegal, ZeroPageX),      // 0x55
    entry("LSR", Op::Illegal, ZeroPageX),      // 0x56
    ILLEGAL,                                   // 0x57
    entry("CLI", Op::Cli, Implied),            // 0x58
    entry("EOR", Op::Illegal, AbsoluteY),      // 0x59
    ILLEGAL,                                   // 0x5A
    ILLEGAL,                                   // 0x5B
    ILLEGAL,                                   // 0x5C
    entry("EOR", Op::Illegal, AbsoluteX),      // 0x5D
    entry("LSR", Op::Illegal, AbsoluteX),      // 0x5E
    ILLEGAL,                                   // 0x5F
    // 0x60-0x6F
    entry("RTS", Op::Rts, Implied),            // 0x60
    entry("ADC", Op::Illegal, IndexedIndirect), // 0x61
    ILLEGAL,                                   // 0x62
    ILLEGAL,                                   // 0x63
    ILLEGAL,                                   // 0x64
    entry("ADC", Op::Illegal, ZeroPage),       // 0x65
    entry("ROR", Op::Illegal, ZeroPage),       // 0x66
    ILLEGAL,                                   // 0x67
    entry("PLA", Op::Pla, Implied),            // 0x68
    entry("ADC", Op::Illegal, Immediate),      // 0x69
    entry("ROR", Op::Illegal, Accumulator),    // 0x6A
    ILLEGAL,                                   // 0x6B
    entry("JMP", Op::Jmp, Indirect),           // 0x6C
    entry("ADC", Op::Illegal, Absolute),       // 0x6D
    entry("ROR", Op::Illegal, Absolute),       // 0x6E
    ILLEGAL,                                   // 0x6F
    // 0x70-0x7F
    entry("BVS", Op::Illegal, Relative),       // 0x70
    entry("ADC", Op::Illegal, IndirectIndexed), // 0x71
    ILLEGAL,                                   // 0x72
    ILLEGAL,                                   // 0x73
    ILLEGAL,                                   // 0x74
    entry("ADC", Op::Illegal, ZeroPageX),      // 0x75
    entry("ROR", Op::Illegal, ZeroPageX),      // 0x76
    ILLEGAL,                                   // 0x77
    entry("SEI", Op::Sei, Implied),            // 0x78
    entry("ADC", Op::Illegal, AbsoluteY),      // 0x79
    ILLEGAL,                                   // 0x7A
    ILLEGAL,                                   // 0x7B
    ILLEGAL,                                   // 0x7C
    entry("ADC", Op::Illegal, AbsoluteX),      // 0x7D
    entry("ROR", Op::Illegal, AbsoluteX),      // 0x7E
    ILLEGAL,                                   // 0x7F
    // 0x80-0x8F
    ILLEGAL,                                   // 0x80
    entry("STA", Op::Sta, IndexedIndirect),    // 0x81
    ILLEGAL,                                   // 0x82
    ILLEGAL,                                   // 0x83
    entry("STY", Op::Sty, ZeroPage),           // 0x84
    entry("STA", Op::Sta, ZeroPage),           // 0x85
    entry("STX", Op::Stx, ZeroPage),           // 0x86
    ILLEGAL,                                   // 0x87
    entry("DEY", Op::Dey, Implied),            // 0x88
    ILLEGAL,                                   // 0x89
    entry("TXA", Op::Txa, Implied),            // 0x8A
    ILLEGAL,                                   // 0x8B
    entry("STY", Op::Sty, Absolute),           // 0x8C
    entry("STA", Op::Sta, Absolute),           // 0x8D
    entry("STX", Op::Stx, Absolute),           // 0x8E
    ILLEGAL,                                   // 0x8F
    // 0x90-0x9F
    entry("BCC", Op::Illegal, Relative),       // 0x90
    entry("STA", Op::Sta, IndirectIndexed),    // 0x91
    ILLEGAL,                                   // 0x92
    ILLEGAL,                                   // 0x93
    entry("STY", Op::Sty, ZeroPageX),          // 0x94
    entry("STA", Op::Sta, ZeroPageX),          // 0x95
    entry("STX", Op::Stx, ZeroPageY),          // 0x96
    ILLEGAL,                                   // 0x97
    entry("TYA", Op::Tya, Implied),            // 0x98
    entry("STA", Op::Sta, AbsoluteY),          // 0x99
    entry("TXS", Op::Txs, Implied),            // 0x9A
    ILLEGAL,                                   // 0x9B
    ILLEGAL,                                   // 0x9C
    entry("STA", Op::Sta, AbsoluteX),          // 0x9D
    ILLEGAL,                                   // 0x9E
    ILLEGAL,                                   // 0x9F
    // 0xA0-0xAF
    entry("LDY", Op::Ldy, Immediate),          // 0xA0
    entry("LDA", Op::Lda, IndexedIndirect),    // 0xA1
    entry("LDX", Op::Ldx, Immediate),          // 0xA2
    ILLEGAL,                                   // 0xA3
    entry("LDY", Op::Ldy, ZeroPage),           // 0xA4
    entry("LDA", Op::Lda, ZeroPage),           // 0xA5
    entry("LDX", Op::Ldx, ZeroPage),           // 0xA6
    ILLEGAL,                                   // 0xA7
    entry("TAY", Op::Tay, Implied),            // 0xA8
    entry("LDA", Op::Lda, Immediate),          // 0xA9
    entry("TAX", Op::Tax, Implied),            // 0xAA
    ILLEGAL,                                   // 0xAB
    entry("LDY", Op::Ldy, Absolute),           // 0xAC
    entry("LDA", Op::Lda, Absolute),           // 0xAD
    entry("LDX", Op::Ldx, Absolute),           // 0xAE
    ILLEGAL,                                   // 0xAF
    // 0xB0-0xBF
    entry("BCS", Op::Illegal, Relative),       // 0xB0
    entry("LDA", Op::Lda, IndirectIndexed),    // 0xB1
    ILLEGAL,                                   // 0xB2
    ILLEGAL,                                   // 0xB3
    entry("LDY", Op::Ldy, ZeroPageX),          // 0xB4
    entry("LDA", Op::Lda, ZeroPageX),          // 0xB5
    entry("LDX", Op::Ldx, ZeroPageY),          // 0xB6
    ILLEGAL,                                   // 0xB7
    entry("CLV", Op::Clv, Implied),            // 0xB8
    entry("LDA", Op::Lda, AbsoluteY),          // 0xB9
    entry("TSX", Op::Tsx, Implied),            // 0xBA
    ILLEGAL,                                   // 0xBB
    entry("LDY", Op::Ldy, AbsoluteX),          // 0xBC
    entry("LDA", Op::Lda, AbsoluteX),          // 0xBD
    entry("LDX", Op::Ldx, AbsoluteY),          // 0xBE
    ILLEGAL,                                   // 0xBF
    // 0xC0-0xCF
    entry("CPY", Op::Cpy, Immediate),          // 0xC0
    entry("CMP", Op::Cmp, IndexedIndirect),    // 0xC1
    ILLEGAL,                                   // 0xC2
    ILLEGAL,                                   // 0xC3
    entry("CPY", Op::Cpy, ZeroPage),           // 0xC4
    entry("CMP", Op::Cmp, ZeroPage),           // 0xC5
    entry("DEC", Op::Illegal, ZeroPage),       // 0xC6
    ILLEGAL,                                   // 0xC7
    entry("INY", Op::Iny, Implied),            // 0xC8
    entry("CMP", Op::Cmp, Immediate),          // 0xC9
    entry("DEX", Op::Dex, Implied),            // 0xCA
    ILLEGAL,                                   // 0xCB
    entry("CPY", Op::Cpy, Absolute),           // 0xCC
    entry("CMP", Op::Cmp, Absolute),           // 0xCD
    entry("DEC", Op::Illegal, Absolute),       // 0xCE
    ILLEGAL,                                   // 0xCF
    // 0xD0-0xDF
    entry("BNE", Op::Illegal, Relative),       // 0xD0
    entry("CMP", Op::Cmp, IndirectIndexed),    // 0xD1
    ILLEGAL,                                   // 0xD2
    ILLEGAL,                                   // 0xD3
    ILLEGAL,                                   // 0xD4
    entry("CMP", Op::Cmp, ZeroPageX),          // 0xD5
    entry("DEC", Op::Illegal, ZeroPageX),      // 0xD6
    ILLEGAL,                                   // 0xD7
    entry("CLD", Op::Cld, Implied),            // 0xD8
    entry("CMP", Op::Cmp, AbsoluteY),          // 0xD9
    ILLEGAL,                                   // 0xDA
    ILLEGAL,                                   // 0xDB
    ILLEGAL,                                   // 0xDC
    entry("CMP", Op::Cmp, AbsoluteX),          // 0xDD
    entry("DEC", Op::Illegal, AbsoluteX),      // 0xDE
    ILLEGAL,                                   // 0xDF
    // 0xE0-0xEF
    entry("CPX", Op::Cpx, Immediate),          // 0xE0
    entry("SBC", Op::Illegal, IndexedIndirect), // 0xE1
    ILLEGAL,                                   // 0xE2
    ILLEGAL,                                   // 0xE3
    entry("CPX", Op::Cpx, ZeroPage),           // 0xE4
    entry("SBC", Op::Illegal, ZeroPage),       // 0xE5
    entry("INC", Op::Illegal, ZeroPage),       // 0xE6
    ILLEGAL,                                   // 0xE7
    entry("INX", Op::Inx, Implied),            // 0xE8
    entry("SBC", Op::Illegal, Immediate),      // 0xE9
    entry("NOP", Op::Nop, Implied),            // 0xEA
    ILLEGAL,                                   // 0xEB
    entry("CPX", Op::Cpx, Absolute),           // 0xEC
    entry("SBC", Op::Illegal, Absolute),       // 0xED
    entry("INC", Op::Illegal, Absolute),       // 0xEE
    ILLEGAL,                                   // 0xEF
    // 0xF0-0xFF
    entry("BEQ", Op::Illegal, Relative),       // 0xF0
    entry("SBC", Op::Illegal, IndirectIndexed), // 0xF1
    ILLEGAL,                                   // 0xF2
    ILLEGAL,                                   // 0xF3
    ILLEGAL,                                   // 0xF4
    entry("SBC", Op::Illegal, ZeroPageX),      // 0xF5
    entry("INC", Op::Illegal, ZeroPageX),      // 0xF6
    ILLEGAL,                                   // 0xF7
    entry("SED", Op::Sed, Implied),            // 0xF8
    entry("SBC", Op::Illegal, AbsoluteY),      // 0xF9
    ILLEGAL,                                   // 0xFA
    ILLEGAL,                                   // 0xFB
    ILLEGAL,                                   // 0xFC
    entry("SBC", Op::Illegal, AbsoluteX),      // 0xFD
    entry("INC", Op::Illegal, AbsoluteX),      // 0xFE
    ILLEGAL,                                   // 0xFF
];
