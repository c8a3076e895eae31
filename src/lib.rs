//! # 6502 CPU Emulator Core
//!
//! An instruction-stepped NMOS 6502 CPU core built around a composable
//! memory map.
//!
//! This crate provides the processor state and fetch-decode-execute loop, a
//! trait-based memory bus abstraction, a region-based address space for
//! building machine memory maps out of RAM, ROM, and memory-mapped devices,
//! and a table-driven opcode decoder.
//!
//! ## Quick Start
//!
//! ```rust
//! use m6502::{AddressSpace, Cpu, Ram, Rom};
//!
//! // Program: LDA #$42, STA $0200
//! let mut rom = vec![0xA9, 0x42, 0x8D, 0x00, 0x02];
//! rom.resize(0x8000, 0xEA);
//! rom[0x7FFC] = 0x00; // Reset vector low byte
//! rom[0x7FFD] = 0x80; // Reset vector high byte (PC = 0x8000)
//!
//! let mut space = AddressSpace::new();
//! space.add_region(Box::new(Ram::new(0x0000, 0x8000)));
//! space.add_region(Box::new(Rom::new(0x8000, rom)));
//!
//! let mut cpu = Cpu::new(space);
//! cpu.reset();
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! cpu.step().unwrap();
//! cpu.step().unwrap();
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the [`Bus`]
//!   trait; machine memory maps compose [`Region`] implementations inside an
//!   [`AddressSpace`]
//! - **Table-Driven Decode**: all 256 opcodes decode through a single
//!   constant table
//! - **Deterministic Execution**: construction touches no memory, stepping
//!   is instruction-granular, and errors are explicit values
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - Bus trait and flat 64KB memory
//! - `devices` - Region trait, AddressSpace, RAM/ROM/screen regions
//! - `opcodes` - Opcode decode table
//! - `addressing` - Addressing mode enumeration
//! - `status` - Packed status register

pub mod addressing;
pub mod cpu;
pub mod devices;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{Cpu, IllegalOpcodePolicy, RESET_VECTOR};
pub use devices::{AddressSpace, Ram, Region, Rom, Screen, OPEN_BUS};
pub use memory::{Bus, FlatMemory};
pub use opcodes::{Op, Opcode, OPCODE_TABLE};
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The decoder found no implementation for an opcode and the CPU is
    /// configured with [`IllegalOpcodePolicy::Fault`].
    ///
    /// `pc` is the address of the opcode byte; the program counter has
    /// already advanced past it, so execution can resume at the next byte.
    IllegalOpcode { opcode: u8, pc: u16 },
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StepError::IllegalOpcode { opcode, pc } => {
                write!(f, "Illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc)
            }
        }
    }
}

impl std::error::Error for StepError {}
