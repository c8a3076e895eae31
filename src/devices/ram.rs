//! RAM region implementation.
//!
//! Readable and writable storage over a declared address range.

use super::Region;

/// Flat RAM region.
///
/// Owns `[start, start + size)` of the address domain and backs it with a
/// byte vector initialized to zero. Access is direct indexed access with no
/// bounds check beyond what [`Region::contains`] already guarantees the
/// caller performed.
///
/// # Examples
///
/// ```rust
/// use m6502::{Ram, Region};
///
/// let mut ram = Ram::new(0x2000, 0x0400); // 1KB at 0x2000
///
/// ram.write(0x2042, 0xAA);
/// assert_eq!(ram.read(0x2042), 0xAA);
/// ```
pub struct Ram {
    start: u16,
    data: Vec<u8>,
}

impl Ram {
    /// Creates a RAM region of `size` bytes starting at `start`, zeroed.
    ///
    /// A `start + size` that overflows the 16-bit domain simply extends the
    /// region to the top of memory (0xFFFF inclusive).
    pub fn new(start: u16, size: u16) -> Self {
        Self {
            start,
            data: vec![0; size as usize],
        }
    }

    /// Copies `bytes` into the region starting at the global address `addr`.
    ///
    /// Useful for pre-loading program data before handing the region to an
    /// address space.
    ///
    /// # Panics
    ///
    /// Panics if the run extends past the end of the region.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let offset = (addr - self.start) as usize;
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }
}

impl Region for Ram {
    fn contains(&self, addr: u16) -> bool {
        addr >= self.start && (addr as u32) < self.start as u32 + self.data.len() as u32
    }

    fn read(&self, addr: u16) -> u8 {
        self.data[(addr - self.start) as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[(addr - self.start) as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_starts_zeroed() {
        let ram = Ram::new(0x0000, 0x0100);
        for addr in 0x0000..0x0100 {
            assert_eq!(ram.read(addr), 0x00);
        }
    }

    #[test]
    fn test_ram_read_write_global_addresses() {
        let mut ram = Ram::new(0x4000, 0x0100);

        ram.write(0x4000, 0xAA);
        ram.write(0x4064, 0xBB);
        ram.write(0x40FF, 0xCC);

        assert_eq!(ram.read(0x4000), 0xAA);
        assert_eq!(ram.read(0x4064), 0xBB);
        assert_eq!(ram.read(0x40FF), 0xCC);
    }

    #[test]
    fn test_ram_range() {
        let ram = Ram::new(0x4000, 0x0100);

        assert!(!ram.contains(0x3FFF));
        assert!(ram.contains(0x4000));
        assert!(ram.contains(0x40FF));
        assert!(!ram.contains(0x4100));
    }

    #[test]
    fn test_ram_range_reaching_top_of_memory() {
        // 0x8000 + 0x8000 == 0x10000: the region covers through 0xFFFF.
        let ram = Ram::new(0x8000, 0x8000);

        assert!(ram.contains(0x8000));
        assert!(ram.contains(0xFFFF));
        assert!(!ram.contains(0x7FFF));
    }

    #[test]
    fn test_ram_load() {
        let mut ram = Ram::new(0x0200, 0x0100);
        ram.load(0x0210, &[0xA9, 0x42]);

        assert_eq!(ram.read(0x0210), 0xA9);
        assert_eq!(ram.read(0x0211), 0x42);
    }
}
