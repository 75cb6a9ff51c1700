//! The full implementation of the chip8 machine, from executing the opcodes to an option to
//! pretty print its state.
mod machine;
mod opcodes;
mod print;

/// reexport the machine structs for simpler usage
pub use machine::*;
