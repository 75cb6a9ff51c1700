//! Opcode abstractions, the instruction decoder and the mnemonic rendering.
use std::{convert::TryFrom, fmt};

use crate::{definitions::memory, OpcodeError};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the mask for the top and the bottom nibble
const OPCODE_MASK_F00F: u16 = OPCODE_MASK_F000 | OPCODE_MASK_000F;

/// the mask for the top nibble and the bottom byte
const OPCODE_MASK_F0FF: u16 = OPCODE_MASK_F000 | OPCODE_MASK_00FF;

/// the size of a single byte
const BYTE_SIZE: u16 = 0x8;

/// the size of a single nibble
const NIBBLE_SIZE: u16 = BYTE_SIZE / 2;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - A slice of u8 data entries used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// # use chip::OpcodeError;
///  const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
///  const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
///  for (i, val) in OPCODES.iter().enumerate() {
///      let opcode = build_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///      assert_eq!(opcode, *val);
///  }
/// # let pointer = 3;
/// # let err = OpcodeError::MemoryInvalid {pointer, len: SPLIT_OPCODE.len() };
/// # assert_eq!(Err(err), build_opcode(&SPLIT_OPCODE, pointer));
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Result<Opcode, OpcodeError> {
    // controlling that there is no illegal access here
    if pointer + 1 < data.len() {
        Ok(Opcode::from_be_bytes([data[pointer], data[pointer + 1]]))
    } else {
        Err(OpcodeError::MemoryInvalid {
            pointer,
            len: data.len(),
        })
    }
}

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// this is an opcode extractor that will return the
    /// opcode type nibble in place
    /// - `T` is the opcode type
    fn t(&self) -> Opcode;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `T` is the opcode type
    /// - `NNN` is an address
    fn nnn(&self) -> u16;

    /// this is an opcode extractor for the opcode type `TXNN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `NN` is a constant
    fn xnn(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a nibble constant
    fn xyn(&self) -> (usize, usize, usize);

    /// this is an opcode extractor for the opcode type `TXYT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1000);
    /// ```
    fn t(&self) -> Opcode {
        self & OPCODE_MASK_F000
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> u16 {
        self & OPCODE_MASK_0FFF
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xnn(), (0xE, 0xDA));
    /// ```
    fn xnn(&self) -> (usize, u8) {
        let x = self.x();
        let nn = (self & OPCODE_MASK_00FF) as u8;
        (x, nn)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, usize) {
        let (x, y) = self.xy();
        let n = (self & OPCODE_MASK_000F) as usize;
        (x, y, n)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xy(), (0xE, 0xD));
    /// ```
    fn xy(&self) -> (usize, usize) {
        let x = self.x();
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        let y = ((self & MASK) >> NIBBLE_SIZE) as usize;
        (x, y)
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.x(), 0xE);
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> BYTE_SIZE) as usize
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents the program steps that the chip
/// can take.
pub enum ProgramCounterStep {
    /// Will not change the program counter
    None,
    /// Will move the program counter to the next opcode
    Next,
    /// Will skip the next opcode
    Skip,
    /// Will simply move the program counter to the given location.
    Jump(usize),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Maps the step onto the program counter `pc`, returning the new counter.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(0x202, ProgramCounterStep::Next.apply(0x200));
    /// assert_eq!(0x204, ProgramCounterStep::Skip.apply(0x200));
    /// assert_eq!(0x300, ProgramCounterStep::Jump(0x300).apply(0x200));
    /// ```
    #[inline]
    pub fn apply(&self, pc: usize) -> usize {
        match *self {
            ProgramCounterStep::None => pc,
            ProgramCounterStep::Next => pc + memory::opcodes::SIZE,
            ProgramCounterStep::Skip => pc + 2 * memory::opcodes::SIZE,
            ProgramCounterStep::Jump(pointer) => pointer,
        }
    }
}

/// A single decoded instruction.
///
/// Every variant only carries the operands the instruction actually uses:
/// - `x`, `y` are register indices (`0x0` to `0xF`)
/// - `b` is an immediate byte
/// - `n` is a nibble constant (the sprite height)
/// - `addr` is a twelve bit address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `0NNN` - jumps to `NNN`, kept for legacy roms relying on it
    Sys { addr: u16 },
    /// `00E0` - clears the display
    Clear,
    /// `00EE` - returns from a subroutine
    Return,
    /// `1NNN` - jumps to `NNN`
    Jump { addr: u16 },
    /// `2NNN` - calls the subroutine at `NNN`
    Call { addr: u16 },
    /// `3XNN` - skips the next instruction if `VX == NN`
    SkipEqualByte { x: usize, b: u8 },
    /// `4XNN` - skips the next instruction if `VX != NN`
    SkipNotEqualByte { x: usize, b: u8 },
    /// `5XY0` - skips the next instruction if `VX == VY`
    SkipEqual { x: usize, y: usize },
    /// `6XNN` - `VX = NN`
    LoadByte { x: usize, b: u8 },
    /// `7XNN` - `VX += NN` without touching the carry flag
    AddByte { x: usize, b: u8 },
    /// `8XY0` - `VX = VY`
    Load { x: usize, y: usize },
    /// `8XY1` - `VX |= VY`
    Or { x: usize, y: usize },
    /// `8XY2` - `VX &= VY`
    And { x: usize, y: usize },
    /// `8XY3` - `VX ^= VY`
    Xor { x: usize, y: usize },
    /// `8XY4` - `VX += VY`, `VF` is the carry
    Add { x: usize, y: usize },
    /// `8XY5` - `VX -= VY`, `VF` is the "no borrow" flag
    Sub { x: usize, y: usize },
    /// `8XY6` - `VX >>= 1`, `VF` is the shifted out bit
    ShiftRight { x: usize },
    /// `8XY7` - `VX = VY - VX`, `VF` is the "no borrow" flag
    SubReverse { x: usize, y: usize },
    /// `8XYE` - `VX <<= 1`, `VF` is the shifted out bit
    ShiftLeft { x: usize },
    /// `9XY0` - skips the next instruction if `VX != VY`
    SkipNotEqual { x: usize, y: usize },
    /// `ANNN` - `I = NNN`
    LoadIndex { addr: u16 },
    /// `BNNN` - jumps to `NNN + V0`
    JumpIndexed { addr: u16 },
    /// `CXNN` - `VX = rand() & NN`
    Random { x: usize, b: u8 },
    /// `DXYN` - draws the `N` rows high sprite at `I` to `(VX, VY)`
    Draw { x: usize, y: usize, n: usize },
    /// `EX9E` - skips the next instruction if the key `VX` is pressed
    SkipKeyPressed { x: usize },
    /// `EXA1` - skips the next instruction if the key `VX` is not pressed
    SkipKeyNotPressed { x: usize },
    /// `FX07` - `VX = DT`
    LoadDelayTimer { x: usize },
    /// `FX0A` - waits for a key press and stores the key in `VX`
    WaitKey { x: usize },
    /// `FX15` - `DT = VX`
    SetDelayTimer { x: usize },
    /// `FX18` - `ST = VX`
    SetSoundTimer { x: usize },
    /// `FX1E` - `I += VX`
    AddIndex { x: usize },
    /// `FX29` - `I` points to the font glyph of the digit `VX`
    LoadFont { x: usize },
    /// `FX33` - stores the decimal digits of `VX` at `I`, `I + 1` and `I + 2`
    StoreBcd { x: usize },
    /// `FX55` - stores `V0` to `VX` starting at `I`
    StoreRegisters { x: usize },
    /// `FX65` - loads `V0` to `VX` starting at `I`
    LoadRegisters { x: usize },
    /// Any word that is no known instruction.
    Unknown(Opcode),
}

/// A single entry of the decoder table, the opcode matches if
/// `opcode & mask == value`.
struct Pattern {
    mask: Opcode,
    value: Opcode,
    build: fn(Opcode) -> Instruction,
}

macro_rules! patterns {
    ($( $mask:expr, $value:literal => $build:expr ),+ $(,)? ) => {
        [
            $(
                Pattern {
                    mask: $mask,
                    value: $value,
                    build: $build,
                },
            )+
        ]
    };
}

/// The decoder table, it is searched front to back and the first match wins.
///
/// The order matters: the exact `00E0` and `00EE` words have to be tried before the
/// `0NNN` family which would swallow them otherwise.
static DECODE_TABLE: [Pattern; 35] = patterns!(
    OPCODE_MASK_FFFF, 0x00E0 => |_| Instruction::Clear,
    OPCODE_MASK_FFFF, 0x00EE => |_| Instruction::Return,
    OPCODE_MASK_F000, 0x0000 => |op| Instruction::Sys { addr: op.nnn() },
    OPCODE_MASK_F000, 0x1000 => |op| Instruction::Jump { addr: op.nnn() },
    OPCODE_MASK_F000, 0x2000 => |op| Instruction::Call { addr: op.nnn() },
    OPCODE_MASK_F000, 0x3000 => |op| {
        let (x, b) = op.xnn();
        Instruction::SkipEqualByte { x, b }
    },
    OPCODE_MASK_F000, 0x4000 => |op| {
        let (x, b) = op.xnn();
        Instruction::SkipNotEqualByte { x, b }
    },
    OPCODE_MASK_F00F, 0x5000 => |op| {
        let (x, y) = op.xy();
        Instruction::SkipEqual { x, y }
    },
    OPCODE_MASK_F000, 0x6000 => |op| {
        let (x, b) = op.xnn();
        Instruction::LoadByte { x, b }
    },
    OPCODE_MASK_F000, 0x7000 => |op| {
        let (x, b) = op.xnn();
        Instruction::AddByte { x, b }
    },
    OPCODE_MASK_F00F, 0x8000 => |op| {
        let (x, y) = op.xy();
        Instruction::Load { x, y }
    },
    OPCODE_MASK_F00F, 0x8001 => |op| {
        let (x, y) = op.xy();
        Instruction::Or { x, y }
    },
    OPCODE_MASK_F00F, 0x8002 => |op| {
        let (x, y) = op.xy();
        Instruction::And { x, y }
    },
    OPCODE_MASK_F00F, 0x8003 => |op| {
        let (x, y) = op.xy();
        Instruction::Xor { x, y }
    },
    OPCODE_MASK_F00F, 0x8004 => |op| {
        let (x, y) = op.xy();
        Instruction::Add { x, y }
    },
    OPCODE_MASK_F00F, 0x8005 => |op| {
        let (x, y) = op.xy();
        Instruction::Sub { x, y }
    },
    OPCODE_MASK_F00F, 0x8006 => |op| Instruction::ShiftRight { x: op.x() },
    OPCODE_MASK_F00F, 0x8007 => |op| {
        let (x, y) = op.xy();
        Instruction::SubReverse { x, y }
    },
    OPCODE_MASK_F00F, 0x800E => |op| Instruction::ShiftLeft { x: op.x() },
    OPCODE_MASK_F00F, 0x9000 => |op| {
        let (x, y) = op.xy();
        Instruction::SkipNotEqual { x, y }
    },
    OPCODE_MASK_F000, 0xA000 => |op| Instruction::LoadIndex { addr: op.nnn() },
    OPCODE_MASK_F000, 0xB000 => |op| Instruction::JumpIndexed { addr: op.nnn() },
    OPCODE_MASK_F000, 0xC000 => |op| {
        let (x, b) = op.xnn();
        Instruction::Random { x, b }
    },
    OPCODE_MASK_F000, 0xD000 => |op| {
        let (x, y, n) = op.xyn();
        Instruction::Draw { x, y, n }
    },
    OPCODE_MASK_F0FF, 0xE09E => |op| Instruction::SkipKeyPressed { x: op.x() },
    OPCODE_MASK_F0FF, 0xE0A1 => |op| Instruction::SkipKeyNotPressed { x: op.x() },
    OPCODE_MASK_F0FF, 0xF007 => |op| Instruction::LoadDelayTimer { x: op.x() },
    OPCODE_MASK_F0FF, 0xF00A => |op| Instruction::WaitKey { x: op.x() },
    OPCODE_MASK_F0FF, 0xF015 => |op| Instruction::SetDelayTimer { x: op.x() },
    OPCODE_MASK_F0FF, 0xF018 => |op| Instruction::SetSoundTimer { x: op.x() },
    OPCODE_MASK_F0FF, 0xF01E => |op| Instruction::AddIndex { x: op.x() },
    OPCODE_MASK_F0FF, 0xF029 => |op| Instruction::LoadFont { x: op.x() },
    OPCODE_MASK_F0FF, 0xF033 => |op| Instruction::StoreBcd { x: op.x() },
    OPCODE_MASK_F0FF, 0xF055 => |op| Instruction::StoreRegisters { x: op.x() },
    OPCODE_MASK_F0FF, 0xF065 => |op| Instruction::LoadRegisters { x: op.x() },
);

/// Decodes the given opcode, unknown words end up as [`Instruction::Unknown`].
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// assert_eq!(decode(0x8AB4), Instruction::Add { x: 0xA, y: 0xB });
/// assert_eq!(decode(0x5AB1), Instruction::Unknown(0x5AB1));
/// ```
pub fn decode(opcode: Opcode) -> Instruction {
    DECODE_TABLE
        .iter()
        .find(|pattern| opcode & pattern.mask == pattern.value)
        .map_or(Instruction::Unknown(opcode), |pattern| {
            (pattern.build)(opcode)
        })
}

#[inline]
fn xnn(t: Opcode, x: usize, nn: u8) -> Opcode {
    t | (x as Opcode) << BYTE_SIZE | nn as Opcode
}

#[inline]
fn xyn(t: Opcode, x: usize, y: usize, n: usize) -> Opcode {
    t | (x as Opcode) << BYTE_SIZE | (y as Opcode) << NIBBLE_SIZE | n as Opcode
}

impl Instruction {
    /// Builds the opcode word back from the instruction, any bit the instruction
    /// ignores is left at zero.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// assert_eq!(Instruction::Draw { x: 0, y: 1, n: 4 }.encode(), 0xD014);
    /// ```
    pub fn encode(&self) -> Opcode {
        use Instruction::*;
        match *self {
            Sys { addr } => addr & OPCODE_MASK_0FFF,
            Clear => 0x00E0,
            Return => 0x00EE,
            Jump { addr } => 0x1000 | addr & OPCODE_MASK_0FFF,
            Call { addr } => 0x2000 | addr & OPCODE_MASK_0FFF,
            SkipEqualByte { x, b } => xnn(0x3000, x, b),
            SkipNotEqualByte { x, b } => xnn(0x4000, x, b),
            SkipEqual { x, y } => xyn(0x5000, x, y, 0x0),
            LoadByte { x, b } => xnn(0x6000, x, b),
            AddByte { x, b } => xnn(0x7000, x, b),
            Load { x, y } => xyn(0x8000, x, y, 0x0),
            Or { x, y } => xyn(0x8000, x, y, 0x1),
            And { x, y } => xyn(0x8000, x, y, 0x2),
            Xor { x, y } => xyn(0x8000, x, y, 0x3),
            Add { x, y } => xyn(0x8000, x, y, 0x4),
            Sub { x, y } => xyn(0x8000, x, y, 0x5),
            ShiftRight { x } => xyn(0x8000, x, 0, 0x6),
            SubReverse { x, y } => xyn(0x8000, x, y, 0x7),
            ShiftLeft { x } => xyn(0x8000, x, 0, 0xE),
            SkipNotEqual { x, y } => xyn(0x9000, x, y, 0x0),
            LoadIndex { addr } => 0xA000 | addr & OPCODE_MASK_0FFF,
            JumpIndexed { addr } => 0xB000 | addr & OPCODE_MASK_0FFF,
            Random { x, b } => xnn(0xC000, x, b),
            Draw { x, y, n } => xyn(0xD000, x, y, n),
            SkipKeyPressed { x } => xnn(0xE000, x, 0x9E),
            SkipKeyNotPressed { x } => xnn(0xE000, x, 0xA1),
            LoadDelayTimer { x } => xnn(0xF000, x, 0x07),
            WaitKey { x } => xnn(0xF000, x, 0x0A),
            SetDelayTimer { x } => xnn(0xF000, x, 0x15),
            SetSoundTimer { x } => xnn(0xF000, x, 0x18),
            AddIndex { x } => xnn(0xF000, x, 0x1E),
            LoadFont { x } => xnn(0xF000, x, 0x29),
            StoreBcd { x } => xnn(0xF000, x, 0x33),
            StoreRegisters { x } => xnn(0xF000, x, 0x55),
            LoadRegisters { x } => xnn(0xF000, x, 0x65),
            Unknown(opcode) => opcode,
        }
    }
}

impl From<Opcode> for Instruction {
    fn from(opcode: Opcode) -> Self {
        decode(opcode)
    }
}

/// Strict conversion, refuses any word that is not a known instruction.
pub struct Strict(pub Instruction);

impl TryFrom<Opcode> for Strict {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        match decode(value) {
            Instruction::Unknown(opcode) => Err(OpcodeError::InvalidOpcode(opcode)),
            instruction => Ok(Strict(instruction)),
        }
    }
}

/// Renders the conventional CHIP-8 mnemonic.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        match *self {
            Sys { addr } => write!(f, "SYS {:03X}", addr),
            Clear => write!(f, "CLS"),
            Return => write!(f, "RET"),
            Jump { addr } => write!(f, "JP {:03X}", addr),
            Call { addr } => write!(f, "CALL {:03X}", addr),
            SkipEqualByte { x, b } => write!(f, "SE V{:X}, {:02X}", x, b),
            SkipNotEqualByte { x, b } => write!(f, "SNE V{:X}, {:02X}", x, b),
            SkipEqual { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            LoadByte { x, b } => write!(f, "LD V{:X}, {:02X}", x, b),
            AddByte { x, b } => write!(f, "ADD V{:X}, {:02X}", x, b),
            Load { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            Add { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x } => write!(f, "SHR V{:X}", x),
            SubReverse { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x } => write!(f, "SHL V{:X}", x),
            SkipNotEqual { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadIndex { addr } => write!(f, "LD I, {:03X}", addr),
            JumpIndexed { addr } => write!(f, "JP V0, {:03X}", addr),
            Random { x, b } => write!(f, "RND V{:X}, {:02X}", x, b),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {:X}", x, y, n),
            SkipKeyPressed { x } => write!(f, "SKP V{:X}", x),
            SkipKeyNotPressed { x } => write!(f, "SKNP V{:X}", x),
            LoadDelayTimer { x } => write!(f, "LD V{:X}, DT", x),
            WaitKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelayTimer { x } => write!(f, "LD DT, V{:X}", x),
            SetSoundTimer { x } => write!(f, "LD ST, V{:X}", x),
            AddIndex { x } => write!(f, "ADD I, V{:X}", x),
            LoadFont { x } => write!(f, "LD F, V{:X}", x),
            StoreBcd { x } => write!(f, "LD B, V{:X}", x),
            StoreRegisters { x } => write!(f, "LD [I], V{:X}", x),
            LoadRegisters { x } => write!(f, "LD V{:X}, [I]", x),
            Unknown(opcode) => write!(f, "DATA {:04X}", opcode),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents a command from the interpreter up to the host.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// If the host shall wait
    /// for the next key press
    Wait,
    /// The display changed and should be redrawn
    Draw,
    /// An unknown word was skipped
    Skipped(Opcode),
}
