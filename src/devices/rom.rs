//! ROM region implementation.
//!
//! Read-only storage with preloaded contents; writes are silently ignored.

use super::Region;

/// Read-only memory region.
///
/// Owns `[start, start + len)` where `len` is the length of the preloaded
/// contents. Writes are ignored without error, the way a real ROM chip
/// ignores its write line — the natural home for program bytes and the
/// reset vector.
///
/// # Examples
///
/// ```rust
/// use m6502::{Region, Rom};
///
/// let mut rom = Rom::new(0xFF00, vec![0xEA; 0x100]);
///
/// assert_eq!(rom.read(0xFF00), 0xEA);
///
/// rom.write(0xFF00, 0x00); // ignored
/// assert_eq!(rom.read(0xFF00), 0xEA);
/// ```
pub struct Rom {
    start: u16,
    data: Vec<u8>,
}

impl Rom {
    /// Creates a ROM region at `start` with the given contents.
    pub fn new(start: u16, data: Vec<u8>) -> Self {
        Self { start, data }
    }
}

impl Region for Rom {
    fn contains(&self, addr: u16) -> bool {
        addr >= self.start && (addr as u32) < self.start as u32 + self.data.len() as u32
    }

    fn read(&self, addr: u16) -> u8 {
        self.data[(addr - self.start) as usize]
    }

    fn write(&mut self, _addr: u16, _value: u8) {
        // ROM ignores writes.
    }
}
