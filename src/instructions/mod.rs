//! # Instruction Implementations
//!
//! One module per instruction family. Each instruction is a free function
//! over `&mut Cpu<B>` that performs the operand resolution and state updates
//! for its opcode; [`Cpu::step`](crate::Cpu::step) dispatches to them after
//! decoding.
//!
//! By the time an `execute_*` function runs, PC has advanced past the opcode
//! byte but not past the operand bytes; operand resolution consumes those.

pub(crate) mod compare;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod stack;
pub(crate) mod transfer;
