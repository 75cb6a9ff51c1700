//! A CHIP-8 virtual machine core.
//!
//! The [`opcode`] module decodes raw instruction words, the [`chip8`] module holds the
//! [`Machine`](chip8::Machine) that executes them. Everything else is the thin glue a host
//! needs to drive the machine: program images, device traits, timers and a threaded runner.
pub mod chip8;
pub mod definitions;
pub mod devices;
pub mod opcode;
pub mod resources;
pub mod timer;

mod error;
mod runner;

// reexporting for convinience
pub use error::*;
pub use runner::*;
