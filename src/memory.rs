//! # Memory Bus Abstraction
//!
//! This module provides the `Bus` trait that decouples the CPU from specific
//! memory implementations, plus `FlatMemory`, a simple 64KB backing store.
//!
//! ## Design Principles
//!
//! The Bus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads return the open-bus value
//! - Writes to ROM/unmapped regions may be ignored
//!
//! The composable, region-based implementation lives in
//! [`crate::devices::AddressSpace`]; `FlatMemory` is for tests and simple
//! drivers that want every address writable.

/// Memory bus trait for CPU byte reads and writes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - No error types: the 6502 has no bus error mechanism, so neither method
///   may panic or fail
///
/// # Examples
///
/// ```
/// use m6502::{Bus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait Bus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. If the address is unmapped, implementations return
    /// whatever their open-bus policy dictates.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. If the address is read-only or unmapped,
    /// implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses map to a single contiguous RAM array initialized to
/// zero. Useful for tests and programs that don't need a ROM/RAM split or
/// memory-mapped devices.
///
/// # Examples
///
/// ```
/// use m6502::{Bus, Cpu, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.write(0x8000, 0xEA); // NOP
///
/// let mut cpu = Cpu::new(memory);
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new `FlatMemory` with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`.
    ///
    /// Handy for loading test programs. The destination wraps at the end of
    /// the address space like every other CPU-visible address computation.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, byte) in bytes.iter().enumerate() {
            self.data[addr.wrapping_add(i as u16) as usize] = *byte;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
