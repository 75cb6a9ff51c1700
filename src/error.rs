use thiserror::Error;

use crate::opcode::Opcode;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ProcessError {
    #[error("Invalid opcode state '{0}'.")]
    Opcode(#[from] OpcodeError),
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
    #[error("Invalid memory access '{0}'.")]
    Memory(#[from] MemoryError),
    #[error("Invalid rom '{0}'.")]
    Rom(#[from] RomError),
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    InvalidOpcode(Opcode),
    #[error("Pointer location invalid there can not be an opcode at {pointer}, if data len is {len}")]
    MemoryInvalid { pointer: usize, len: usize },
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Overflow,
    #[error("Stack is empty!")]
    Underflow,
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum MemoryError {
    #[error("Access to {from:#06X} - {to:#06X} is outside of the {len} bytes of memory.")]
    OutOfBounds { from: usize, to: usize, len: usize },
    #[error("Jump to {0:#06X} leaves the memory.")]
    Jump(usize),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RomError {
    #[error("The rom '{name}' has {len} bytes, but only {max} fit into memory.")]
    TooLarge {
        name: String,
        len: usize,
        max: usize,
    },
}
