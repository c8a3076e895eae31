//! Memory-mapped screen region.
//!
//! This core owns only the byte layout of the framebuffer; turning it into
//! pixels on an actual display is an external renderer's job. The region
//! exposes typed accessors so a renderer can read blocks and pixel rows
//! without re-deriving the layout.
//!
//! Screen memory consists of two parts, laid out back to back:
//! - Color mappings: for each 8x8 pixel block, two bytes select a
//!   foreground and a background color
//! - Pixel data: one bit per pixel, foreground when set

use super::Region;

/// Screen width in pixels.
pub const SCREEN_WIDTH: usize = 320;
/// Screen height in pixels.
pub const SCREEN_HEIGHT: usize = 240;

/// Color-block width and height in pixels.
pub const BLOCK_SIZE: usize = 8;
/// Number of color blocks per row.
pub const BLOCKS_PER_LINE: usize = SCREEN_WIDTH / BLOCK_SIZE;

/// Pixels packed into one byte of pixel data.
pub const PIXELS_PER_BYTE: usize = 8;

/// Size of the color-mapping section: two bytes per 8x8 block (2400 bytes).
pub const COLOR_MAPPING_BYTES: usize =
    2 * (SCREEN_WIDTH * SCREEN_HEIGHT) / (BLOCK_SIZE * BLOCK_SIZE);
/// Size of the pixel section: one bit per pixel (9600 bytes).
pub const PIXEL_BYTES: usize = SCREEN_WIDTH * SCREEN_HEIGHT / PIXELS_PER_BYTE;

const RED_LEVELS: [u8; 8] = [0x00, 0x20, 0x40, 0x60, 0x80, 0xA0, 0xC0, 0xFF];
const GREEN_LEVELS: [u8; 8] = [0x00, 0x20, 0x40, 0x60, 0x80, 0xA0, 0xC0, 0xFF];
const BLUE_LEVELS: [u8; 4] = [0x00, 0x55, 0xAA, 0xFF];

/// Expands a 3-3-2 packed color byte (RRRGGGBB) into 8-bit RGB components.
pub fn rgb(color: u8) -> (u8, u8, u8) {
    let r = color >> 5;
    let g = (color & 0b0001_1100) >> 2;
    let b = color & 0b0000_0011;
    (
        RED_LEVELS[r as usize],
        GREEN_LEVELS[g as usize],
        BLUE_LEVELS[b as usize],
    )
}

/// Memory-mapped 320x240 two-color-per-block framebuffer.
///
/// Maps `COLOR_MAPPING_BYTES + PIXEL_BYTES` bytes starting at `start`: the
/// color-mapping section first, the pixel section after it. The CPU programs
/// it with ordinary stores; a renderer polls it through the typed accessors.
///
/// # Examples
///
/// ```rust
/// use m6502::Screen;
///
/// let mut screen = Screen::new(0x4000);
///
/// screen.set_block_colors(0, 0, 0b1110_0000, 0b0000_0011);
/// assert_eq!(screen.block_colors(0, 0), (0b1110_0000, 0b0000_0011));
/// ```
pub struct Screen {
    start: u16,
    color_mappings: Vec<u8>,
    pixels: Vec<u8>,
}

impl Screen {
    /// Creates a screen region mapped at `start`, fully zeroed.
    pub fn new(start: u16) -> Self {
        Self {
            start,
            color_mappings: vec![0; COLOR_MAPPING_BYTES],
            pixels: vec![0; PIXEL_BYTES],
        }
    }

    /// Sets the foreground/background color pair of the 8x8 block containing
    /// pixel `(x, y)`.
    pub fn set_block_colors(&mut self, x: usize, y: usize, fg: u8, bg: u8) {
        let block = Self::block_number(x, y);
        self.color_mappings[block * 2] = fg;
        self.color_mappings[block * 2 + 1] = bg;
    }

    /// Returns the (foreground, background) color pair of the block
    /// containing pixel `(x, y)`.
    pub fn block_colors(&self, x: usize, y: usize) -> (u8, u8) {
        let block = Self::block_number(x, y);
        (
            self.color_mappings[block * 2],
            self.color_mappings[block * 2 + 1],
        )
    }

    /// Returns the pixel byte covering pixel `(x, y)`: eight horizontally
    /// adjacent pixels, bit 0 leftmost.
    pub fn pixel_row(&self, x: usize, y: usize) -> u8 {
        let byte_in_row = x / PIXELS_PER_BYTE;
        self.pixels[y * (SCREEN_WIDTH / PIXELS_PER_BYTE) + byte_in_row]
    }

    fn block_number(x: usize, y: usize) -> usize {
        (y / BLOCK_SIZE) * BLOCKS_PER_LINE + (x / BLOCK_SIZE)
    }
}

impl Region for Screen {
    fn contains(&self, addr: u16) -> bool {
        addr >= self.start
            && (addr as u32) < self.start as u32 + (COLOR_MAPPING_BYTES + PIXEL_BYTES) as u32
    }

    fn read(&self, addr: u16) -> u8 {
        let offset = (addr - self.start) as usize;
        if offset < COLOR_MAPPING_BYTES {
            self.color_mappings[offset]
        } else {
            self.pixels[offset - COLOR_MAPPING_BYTES]
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        let offset = (addr - self.start) as usize;
        if offset < COLOR_MAPPING_BYTES {
            self.color_mappings[offset] = value;
        } else {
            self.pixels[offset - COLOR_MAPPING_BYTES] = value;
        }
    }
}
