//! # Processor Status Register
//!
//! This module defines the 8-bit status register. The register is a single
//! byte and that byte is the sole source of truth: flags are never cached in
//! separate fields. Six bits carry meaning (Carry, Zero, Interrupt Disable,
//! Decimal, Overflow, Negative); bits 4 and 5 are unused by this core but
//! are preserved bit-for-bit when the whole byte moves through the stack
//! (PHP/PLP).

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// 6502 processor status byte.
    ///
    /// Bit layout (bit 7 down to bit 0): `N V - - D I Z C`.
    ///
    /// The two unused bits (4 and 5) have no semantics in this core, but a
    /// `Status` constructed with [`Status::from_byte`] keeps them, so a full
    /// push/pull round-trip restores the byte exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::Status;
    ///
    /// let mut status = Status::empty();
    /// status.insert(Status::CARRY | Status::NEGATIVE);
    ///
    /// assert!(status.contains(Status::CARRY));
    /// assert_eq!(status.to_string(), "Nv--dizC");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Status: u8 {
        /// Carry flag (bit 0).
        const CARRY = 1 << 0;
        /// Zero flag (bit 1).
        const ZERO = 1 << 1;
        /// Interrupt disable flag (bit 2).
        const INTERRUPT_DISABLE = 1 << 2;
        /// Decimal mode flag (bit 3). Reserved; no BCD semantics in this core.
        const DECIMAL = 1 << 3;
        /// Overflow flag (bit 6).
        const OVERFLOW = 1 << 6;
        /// Negative flag (bit 7).
        const NEGATIVE = 1 << 7;
    }
}

impl Status {
    /// Builds a `Status` from a raw byte, keeping the unused bits 4 and 5.
    ///
    /// This is the path PLP takes: the byte pulled from the stack is restored
    /// verbatim, unused bits included.
    pub fn from_byte(byte: u8) -> Self {
        Self::from_bits_retain(byte)
    }

    /// Returns the raw status byte, unused bits included.
    pub fn to_byte(self) -> u8 {
        self.bits()
    }

    /// Sets or clears a single flag.
    pub fn assign(&mut self, flag: Status, value: bool) {
        self.set(flag, value);
    }
}

impl fmt::Display for Status {
    /// Renders the register as exactly eight characters, one per bit from
    /// bit 7 to bit 0: uppercase when set, lowercase when clear, with the two
    /// unused bits always shown as `-`.
    ///
    /// A freshly reset register renders as `"nv--dizc"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = |flag, set_ch, clear_ch| {
            if self.contains(flag) {
                set_ch
            } else {
                clear_ch
            }
        };
        write!(
            f,
            "{}{}--{}{}{}{}",
            c(Status::NEGATIVE, 'N', 'n'),
            c(Status::OVERFLOW, 'V', 'v'),
            c(Status::DECIMAL, 'D', 'd'),
            c(Status::INTERRUPT_DISABLE, 'I', 'i'),
            c(Status::ZERO, 'Z', 'z'),
            c(Status::CARRY, 'C', 'c'),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_start_clear() {
        let status = Status::empty();
        assert!(!status.contains(Status::CARRY));
        assert!(!status.contains(Status::ZERO));
        assert!(!status.contains(Status::INTERRUPT_DISABLE));
        assert!(!status.contains(Status::DECIMAL));
        assert!(!status.contains(Status::OVERFLOW));
        assert!(!status.contains(Status::NEGATIVE));
        assert_eq!(status.to_byte(), 0x00);
    }

    #[test]
    fn test_set_and_clear_single_flag() {
        let mut status = Status::empty();

        status.assign(Status::CARRY, true);
        assert!(status.contains(Status::CARRY));
        assert_eq!(status.to_byte(), 0x01);

        status.assign(Status::CARRY, false);
        assert!(!status.contains(Status::CARRY));
        assert_eq!(status.to_byte(), 0x00);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut status = Status::empty();

        status.assign(Status::OVERFLOW, true);
        status.assign(Status::NEGATIVE, true);
        status.assign(Status::CARRY, true);
        status.assign(Status::NEGATIVE, false);

        assert!(status.contains(Status::OVERFLOW));
        assert!(status.contains(Status::CARRY));
        assert!(!status.contains(Status::NEGATIVE));
    }

    #[test]
    fn test_bit_positions() {
        assert_eq!(Status::CARRY.bits(), 0x01);
        assert_eq!(Status::ZERO.bits(), 0x02);
        assert_eq!(Status::INTERRUPT_DISABLE.bits(), 0x04);
        assert_eq!(Status::DECIMAL.bits(), 0x08);
        assert_eq!(Status::OVERFLOW.bits(), 0x40);
        assert_eq!(Status::NEGATIVE.bits(), 0x80);
    }

    #[test]
    fn test_unused_bits_round_trip() {
        // Bits 4 and 5 are preserved even though this core never reads them.
        let status = Status::from_byte(0b0011_0000);
        assert_eq!(status.to_byte(), 0b0011_0000);

        let full = Status::from_byte(0xFF);
        assert_eq!(full.to_byte(), 0xFF);
    }

    #[test]
    fn test_render_all_clear() {
        assert_eq!(Status::empty().to_string(), "nv--dizc");
    }

    #[test]
    fn test_render_all_set() {
        // Unused bits render as '-' regardless of their stored value.
        assert_eq!(Status::from_byte(0xFF).to_string(), "NV--DIZC");
    }

    #[test]
    fn test_render_mixed() {
        let mut status = Status::empty();
        status.assign(Status::NEGATIVE, true);
        status.assign(Status::CARRY, true);
        assert_eq!(status.to_string(), "Nv--dizC");
    }
}
