//! Composable address space for the 6502 memory map.
//!
//! This module provides the region-based memory architecture that lets
//! multiple hardware components (RAM, ROM, a memory-mapped screen, future
//! I/O) share the 16-bit address domain.
//!
//! # Architecture
//!
//! - **Region trait**: abstract interface for anything that owns an address
//!   range
//! - **AddressSpace**: routes reads/writes to registered regions in
//!   registration order, first match wins
//! - **Region implementations**: [`Ram`], [`Rom`], [`Screen`]
//!
//! # Example
//!
//! ```rust
//! use m6502::{AddressSpace, Bus, Ram, Rom};
//!
//! let mut space = AddressSpace::new();
//!
//! // 32KB RAM at 0x0000-0x7FFF
//! space.add_region(Box::new(Ram::new(0x0000, 0x8000)));
//!
//! // 32KB ROM at 0x8000-0xFFFF
//! space.add_region(Box::new(Rom::new(0x8000, vec![0xEA; 0x8000])));
//!
//! space.write(0x0042, 0x99);
//! assert_eq!(space.read(0x0042), 0x99);
//! assert_eq!(space.read(0x8000), 0xEA); // ROM contents
//! ```

use crate::memory::Bus;

pub mod ram;
pub mod rom;
pub mod screen;

pub use ram::Ram;
pub use rom::Rom;
pub use screen::Screen;

/// Value returned when a read hits an address no region claims.
///
/// Mimics the floating-bus behavior of the real hardware: an unmapped read
/// is defined behavior, not a fault.
pub const OPEN_BUS: u8 = 0xFF;

/// An address-range-owning component of the memory map.
///
/// A region owns `[start, start + size)` of the 16-bit address domain.
/// `read` and `write` receive the **global** address; each region converts
/// it to a local offset itself (`addr - start`), so no region needs to know
/// where it sits relative to others.
///
/// The caller is expected to only call `read`/`write` with addresses for
/// which `contains` returned true; [`AddressSpace`] guarantees this.
///
/// # Examples
///
/// ```rust
/// use m6502::Region;
///
/// struct Latch {
///     base: u16,
///     value: u8,
/// }
///
/// impl Region for Latch {
///     fn contains(&self, addr: u16) -> bool {
///         addr == self.base
///     }
///
///     fn read(&self, _addr: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _addr: u16, value: u8) {
///         self.value = value;
///     }
/// }
/// ```
pub trait Region {
    /// Returns true if `addr` falls inside this region's range.
    fn contains(&self, addr: u16) -> bool;

    /// Reads the byte this region maps at the global address `addr`.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte at the global address `addr`.
    ///
    /// Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Memory map that routes reads and writes to registered regions.
///
/// Regions are registered once at machine-construction time; the set is
/// immutable thereafter (no hot-plugging). Lookup is a linear scan in
/// registration order and the **first** region whose range contains the
/// address wins. Overlap between regions is not rejected — registration
/// order is the documented tie-break, and keeping ranges disjoint is the
/// caller's responsibility.
///
/// A read to an address no region claims returns [`OPEN_BUS`]; a write to
/// such an address is silently dropped.
///
/// # Examples
///
/// ```rust
/// use m6502::{AddressSpace, Bus, Ram};
///
/// let mut space = AddressSpace::new();
/// space.add_region(Box::new(Ram::new(0x0000, 0x0100)));
///
/// space.write(0x0042, 0xAA);
/// assert_eq!(space.read(0x0042), 0xAA);
///
/// // Unmapped address reads as open bus
/// assert_eq!(space.read(0x8000), 0xFF);
/// ```
pub struct AddressSpace {
    regions: Vec<Box<dyn Region>>,
}

impl AddressSpace {
    /// Creates an empty address space. Every read is open bus until regions
    /// are registered.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Registers a region. Registration order determines lookup priority:
    /// earlier regions shadow later ones wherever their ranges overlap.
    pub fn add_region(&mut self, region: Box<dyn Region>) {
        self.regions.push(region);
    }

    /// Writes a run of bytes starting at `addr`.
    ///
    /// Each byte independently computes its own sub-address (`addr + i`) and
    /// re-scans the region list, so a run that spans a region boundary lands
    /// each byte in its owning region. Bytes whose sub-address no region
    /// claims are silently dropped. Writes never assume contiguous backing
    /// storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use m6502::{AddressSpace, Bus, Ram};
    ///
    /// let mut space = AddressSpace::new();
    /// space.add_region(Box::new(Ram::new(0x0000, 0x0100)));
    /// space.add_region(Box::new(Ram::new(0x0100, 0x0100)));
    ///
    /// // Spans the boundary at 0x0100
    /// space.write_bytes(0x00FF, &[0x11, 0x22]);
    /// assert_eq!(space.read(0x00FF), 0x11);
    /// assert_eq!(space.read(0x0100), 0x22);
    /// ```
    pub fn write_bytes(&mut self, addr: u16, bytes: &[u8]) {
        for (i, byte) in bytes.iter().enumerate() {
            self.write(addr.wrapping_add(i as u16), *byte);
        }
    }

    fn find_region(&self, addr: u16) -> Option<&dyn Region> {
        self.regions
            .iter()
            .find(|region| region.contains(addr))
            .map(|region| region.as_ref())
    }

    fn find_region_mut(&mut self, addr: u16) -> Option<&mut Box<dyn Region>> {
        self.regions.iter_mut().find(|region| region.contains(addr))
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for AddressSpace {
    fn read(&self, addr: u16) -> u8 {
        match self.find_region(addr) {
            Some(region) => region.read(addr),
            None => OPEN_BUS,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some(region) = self.find_region_mut(addr) {
            region.write(addr, value);
        }
        // Unmapped writes are dropped, matching open-bus hardware behavior.
    }
}
