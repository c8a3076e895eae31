//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction byte
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status register**: packed NV-BDIZC byte (see [`Status`])
//!
//! ## Execution Model
//!
//! Construction performs no memory access; the CPU comes up with every
//! register zeroed and PC at 0x0000. Call [`Cpu::reset`] to load PC from the
//! reset vector at 0xFFFC/0xFFFD, then drive execution one instruction at a
//! time with [`Cpu::step`].

use crate::addressing::AddressingMode;
use crate::instructions;
use crate::memory::Bus;
use crate::opcodes::{Op, OPCODE_TABLE};
use crate::status::Status;
use crate::StepError;

/// Address of the reset vector low byte.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Base address of the stack page. The full stack address is this plus SP.
const STACK_BASE: u16 = 0x0100;

/// What [`Cpu::step`] does when it decodes an opcode with no implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalOpcodePolicy {
    /// Treat the opcode as a one-byte NOP and keep going. The default, and
    /// the forgiving choice for running ROMs that stray into data.
    #[default]
    Ignore,
    /// Return [`StepError::IllegalOpcode`] from `step()`. PC has already
    /// advanced past the opcode byte, so the caller can log and resume.
    Fault,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`Bus`] trait, so the same
/// core runs against [`FlatMemory`](crate::FlatMemory) in tests and a full
/// [`AddressSpace`](crate::AddressSpace) in a machine.
///
/// # Examples
///
/// ```
/// use m6502::{Bus, Cpu, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
/// memory.write(0x8000, 0xA9); // LDA #$42
/// memory.write(0x8001, 0x42);
///
/// let mut cpu = Cpu::new(memory);
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x8000);
///
/// cpu.step().unwrap();
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct Cpu<B: Bus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Packed status register
    pub(crate) status: Status,

    /// Memory bus implementation
    pub(crate) bus: B,

    illegal_policy: IllegalOpcodePolicy,
}

impl<B: Bus> Cpu<B> {
    /// Creates a new CPU attached to the given bus.
    ///
    /// Construction touches no memory: A, X, Y, SP and the status register
    /// are zeroed and PC is 0x0000. Call [`Cpu::reset`] before stepping to
    /// pick up the reset vector.
    pub fn new(bus: B) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            status: Status::empty(),
            bus,
            illegal_policy: IllegalOpcodePolicy::default(),
        }
    }

    /// Sets the illegal-opcode policy, builder style.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::{Cpu, FlatMemory, IllegalOpcodePolicy, StepError};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0x02]); // no documented instruction
    ///
    /// let mut cpu = Cpu::new(memory).with_illegal_opcode_policy(IllegalOpcodePolicy::Fault);
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(StepError::IllegalOpcode { opcode: 0x02, pc: 0x0000 })
    /// );
    /// ```
    pub fn with_illegal_opcode_policy(mut self, policy: IllegalOpcodePolicy) -> Self {
        self.illegal_policy = policy;
        self
    }

    /// Loads PC from the reset vector at 0xFFFC/0xFFFD (little-endian).
    ///
    /// Only PC changes; registers and flags keep their current values.
    pub fn reset(&mut self) {
        let low = self.bus.read(RESET_VECTOR) as u16;
        let high = self.bus.read(RESET_VECTOR + 1) as u16;
        self.pc = (high << 8) | low;
        log::debug!("reset: pc={:04X}", self.pc);
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC and advance PC
    /// 2. Look up the instruction in the opcode table
    /// 3. Resolve the operand per the addressing mode, consuming operand
    ///    bytes and advancing PC past them
    /// 4. Execute the instruction, updating registers, flags, and memory
    ///
    /// An opcode with no implementation consumes only its opcode byte; what
    /// happens next is governed by [`IllegalOpcodePolicy`].
    pub fn step(&mut self) -> Result<(), StepError> {
        let opcode_addr = self.pc;
        let opcode = self.fetch();
        let decoded = &OPCODE_TABLE[opcode as usize];

        log::trace!(
            "{:04X}  {:02X}  {} {:?}  |  {}",
            opcode_addr,
            opcode,
            decoded.mnemonic,
            decoded.mode,
            self
        );

        let mode = decoded.mode;
        match decoded.op {
            Op::Nop => {}

            Op::Lda => instructions::load_store::execute_lda(self, mode),
            Op::Ldx => instructions::load_store::execute_ldx(self, mode),
            Op::Ldy => instructions::load_store::execute_ldy(self, mode),
            Op::Sta => instructions::load_store::execute_sta(self, mode),
            Op::Stx => instructions::load_store::execute_stx(self, mode),
            Op::Sty => instructions::load_store::execute_sty(self, mode),

            Op::Tax => instructions::transfer::execute_tax(self),
            Op::Txa => instructions::transfer::execute_txa(self),
            Op::Tay => instructions::transfer::execute_tay(self),
            Op::Tya => instructions::transfer::execute_tya(self),
            Op::Tsx => instructions::transfer::execute_tsx(self),
            Op::Txs => instructions::transfer::execute_txs(self),

            Op::Inx => instructions::inc_dec::execute_inx(self),
            Op::Dex => instructions::inc_dec::execute_dex(self),
            Op::Iny => instructions::inc_dec::execute_iny(self),
            Op::Dey => instructions::inc_dec::execute_dey(self),

            Op::Cmp => instructions::compare::execute_cmp(self, mode),
            Op::Cpx => instructions::compare::execute_cpx(self, mode),
            Op::Cpy => instructions::compare::execute_cpy(self, mode),

            Op::Clc => instructions::flags::execute_clc(self),
            Op::Sec => instructions::flags::execute_sec(self),
            Op::Cli => instructions::flags::execute_cli(self),
            Op::Sei => instructions::flags::execute_sei(self),
            Op::Clv => instructions::flags::execute_clv(self),
            Op::Cld => instructions::flags::execute_cld(self),
            Op::Sed => instructions::flags::execute_sed(self),

            Op::Pha => instructions::stack::execute_pha(self),
            Op::Php => instructions::stack::execute_php(self),
            Op::Pla => instructions::stack::execute_pla(self),
            Op::Plp => instructions::stack::execute_plp(self),

            Op::Jmp => instructions::control::execute_jmp(self, mode),
            Op::Jsr => instructions::control::execute_jsr(self),
            Op::Rts => instructions::control::execute_rts(self),

            Op::Illegal => match self.illegal_policy {
                IllegalOpcodePolicy::Ignore => {
                    log::debug!("ignoring opcode {:02X} at {:04X}", opcode, opcode_addr);
                }
                IllegalOpcodePolicy::Fault => {
                    return Err(StepError::IllegalOpcode {
                        opcode,
                        pc: opcode_addr,
                    });
                }
            },
        }

        Ok(())
    }

    // ========== Fetch and Operand Resolution ==========

    /// Fetches the byte at PC and advances PC.
    pub(crate) fn fetch(&mut self) -> u8 {
        let byte = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let low = self.fetch() as u16;
        let high = self.fetch() as u16;
        (high << 8) | low
    }

    /// Resolves the effective address for a memory-operand addressing mode,
    /// consuming the operand bytes after the opcode.
    ///
    /// Indexing semantics:
    /// - Zero-page indexed modes wrap inside page zero: `(base + index) & 0xFF`
    /// - Absolute indexed modes carry into the high byte (16-bit add)
    /// - Indirect pointer reads through page zero wrap inside page zero
    /// - `(Indirect)` reads both pointer bytes sequentially with a full
    ///   16-bit increment, including across a page boundary
    pub(crate) fn effective_address(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::ZeroPage => self.fetch() as u16,
            AddressingMode::ZeroPageX => {
                let base = self.fetch();
                base.wrapping_add(self.x) as u16
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch();
                base.wrapping_add(self.y) as u16
            }
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::AbsoluteX => self.fetch_word().wrapping_add(self.x as u16),
            AddressingMode::AbsoluteY => self.fetch_word().wrapping_add(self.y as u16),
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                self.read_word(ptr)
            }
            AddressingMode::IndexedIndirect => {
                let ptr = self.fetch().wrapping_add(self.x);
                self.read_word_zero_page(ptr)
            }
            AddressingMode::IndirectIndexed => {
                let ptr = self.fetch();
                self.read_word_zero_page(ptr).wrapping_add(self.y as u16)
            }
            AddressingMode::Implied
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => {
                unreachable!("addressing mode {:?} has no effective address", mode)
            }
        }
    }

    /// Reads the operand value for a value-producing addressing mode.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Immediate => self.fetch(),
            AddressingMode::Accumulator => self.a,
            _ => {
                let addr = self.effective_address(mode);
                self.bus.read(addr)
            }
        }
    }

    /// Reads a little-endian word at `addr`, incrementing the full 16-bit
    /// address for the high byte.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let low = self.bus.read(addr) as u16;
        let high = self.bus.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Reads a little-endian word through a zero-page pointer. The high
    /// byte comes from `(ptr + 1) & 0xFF`, wrapping inside page zero.
    pub(crate) fn read_word_zero_page(&self, ptr: u8) -> u16 {
        let low = self.bus.read(ptr as u16) as u16;
        let high = self.bus.read(ptr.wrapping_add(1) as u16) as u16;
        (high << 8) | low
    }

    // ========== Stack Operations ==========

    /// Pushes a byte: stores at 0x0100 + SP, then decrements SP modulo 256.
    pub(crate) fn push(&mut self, value: u8) {
        self.bus.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increments SP modulo 256, then loads from 0x0100 + SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(STACK_BASE + self.sp as u16)
    }

    /// Pushes a word high byte first, so the bytes read back little-endian.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls a word: low byte first, then high.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let low = self.pull() as u16;
        let high = self.pull() as u16;
        (high << 8) | low
    }

    // ========== Flag Helpers ==========

    /// Updates the Zero and Negative flags from a result byte: Z when the
    /// byte is zero, N when bit 7 is set.
    pub(crate) fn update_nz(&mut self, value: u8) {
        self.status.assign(Status::ZERO, value == 0);
        self.status.assign(Status::NEGATIVE, value & 0x80 != 0);
    }

    // ========== Register Access ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP; the stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the status register.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Returns a reference to the attached bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Returns a mutable reference to the attached bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}

impl<B: Bus> std::fmt::Display for Cpu<B> {
    /// Single-line register dump, e.g.
    /// `A: 42 X: 00 Y: 00 S: FD PC: 8000 Flags: nv--dizC`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A: {:02X} X: {:02X} Y: {:02X} S: {:02X} PC: {:04X} Flags: {}",
            self.a, self.x, self.y, self.sp, self.pc, self.status
        )
    }
}
