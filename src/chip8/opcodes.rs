use crate::{
    definitions::{cpu, display},
    opcode::{Instruction, Operation, ProgramCounterStep},
    ProcessError,
};

use super::{Machine, State};

/// the flag register `VF`
const FLAG: usize = cpu::register::LAST;

impl Machine {
    /// Runs the instruction and returns how the program counter has to move
    /// afterwards, together with what the host should do.
    pub(super) fn execute(
        &mut self,
        instruction: Instruction,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        use Instruction::*;
        match instruction {
            Clear | Draw { .. } => {
                let step = self.display_ops(instruction)?;
                Ok((step, Operation::Draw))
            }
            WaitKey { x } => {
                // forget any press that happened before the wait started
                self.keyboard.take_last();
                self.state = State::AwaitingKey { register: x };
                // don't change the counter until the key arrived
                Ok((ProgramCounterStep::None, Operation::Wait))
            }
            Unknown(opcode) => {
                log::warn!(
                    "An unsupported opcode was used {:#06X} at {:#06X}, skipping it",
                    opcode,
                    self.program_counter
                );
                Ok((ProgramCounterStep::Next, Operation::Skipped(opcode)))
            }
            Sys { .. } | Return | Jump { .. } | Call { .. } | JumpIndexed { .. } => {
                Ok((self.flow(instruction)?, Operation::None))
            }
            SkipEqualByte { .. }
            | SkipNotEqualByte { .. }
            | SkipEqual { .. }
            | SkipNotEqual { .. }
            | SkipKeyPressed { .. }
            | SkipKeyNotPressed { .. } => Ok((self.skip(instruction), Operation::None)),
            LoadIndex { .. }
            | AddIndex { .. }
            | LoadFont { .. }
            | StoreBcd { .. }
            | StoreRegisters { .. }
            | LoadRegisters { .. } => Ok((self.memory_ops(instruction)?, Operation::None)),
            LoadDelayTimer { x } => {
                self.registers[x] = self.delay_timer.get_value();
                Ok((ProgramCounterStep::Next, Operation::None))
            }
            SetDelayTimer { x } => {
                self.delay_timer.set_value(self.registers[x]);
                Ok((ProgramCounterStep::Next, Operation::None))
            }
            SetSoundTimer { x } => {
                self.sound_timer.set_value(self.registers[x]);
                Ok((ProgramCounterStep::Next, Operation::None))
            }
            LoadByte { .. }
            | AddByte { .. }
            | Load { .. }
            | Or { .. }
            | And { .. }
            | Xor { .. }
            | Add { .. }
            | Sub { .. }
            | ShiftRight { .. }
            | SubReverse { .. }
            | ShiftLeft { .. }
            | Random { .. } => {
                self.arithmetic(instruction);
                Ok((ProgramCounterStep::Next, Operation::None))
            }
        }
    }

    /// - `0NNN` - Flow     - `goto NNN;`           - Legacy machine code call, used as a jump.
    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn flow(&mut self, instruction: Instruction) -> Result<ProgramCounterStep, ProcessError> {
        let step = match instruction {
            Instruction::Sys { addr } | Instruction::Jump { addr } => {
                ProgramCounterStep::Jump(addr as usize)
            }
            Instruction::Return => {
                let pc = self.pop_stack()?;
                log::debug!("return to {:#06X}", pc);
                ProgramCounterStep::Jump(pc as usize)
            }
            Instruction::Call { addr } => {
                // the subroutine returns to the opcode after the call
                let next = ProgramCounterStep::Next.apply(self.program_counter as usize);
                self.push_stack(next as u16)?;
                log::debug!("call {:#06X}, stack depth {}", addr, self.stack.len());
                ProgramCounterStep::Jump(addr as usize)
            }
            Instruction::JumpIndexed { addr } => {
                ProgramCounterStep::Jump(addr as usize + self.registers[0] as usize)
            }
            _ => unreachable!("{} is no flow instruction", instruction),
        };
        Ok(step)
    }

    /// - `3XNN` - Cond     - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn skip(&self, instruction: Instruction) -> ProgramCounterStep {
        let r = &self.registers;
        let cond = match instruction {
            Instruction::SkipEqualByte { x, b } => r[x] == b,
            Instruction::SkipNotEqualByte { x, b } => r[x] != b,
            Instruction::SkipEqual { x, y } => r[x] == r[y],
            Instruction::SkipNotEqual { x, y } => r[x] != r[y],
            Instruction::SkipKeyPressed { x } => self.keyboard.is_pressed(r[x] as usize),
            Instruction::SkipKeyNotPressed { x } => !self.keyboard.is_pressed(r[x] as usize),
            _ => unreachable!("{} is no skip instruction", instruction),
        };
        ProgramCounterStep::cond(cond)
    }

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `1` when `VX > VY`, else `0`.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF` and then shifts `VX` to the right by `1`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `1` when `VY > VX`, else `0`.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF` and then shifts `VX` to the left by `1`.
    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to a random byte and `NN`.
    ///
    /// The result is written before the flag, so `VF` holds the flag if it was the target.
    fn arithmetic(&mut self, instruction: Instruction) {
        let r = &mut self.registers;
        match instruction {
            Instruction::LoadByte { x, b } => r[x] = b,
            Instruction::AddByte { x, b } => r[x] = r[x].wrapping_add(b),
            Instruction::Load { x, y } => r[x] = r[y],
            Instruction::Or { x, y } => r[x] = r[x] | r[y],
            Instruction::And { x, y } => r[x] = r[x] & r[y],
            Instruction::Xor { x, y } => r[x] = r[x] ^ r[y],
            Instruction::Add { x, y } => {
                let (res, carry) = r[x].overflowing_add(r[y]);
                r[x] = res;
                r[FLAG] = carry as u8;
            }
            Instruction::Sub { x, y } => {
                let no_borrow = r[x] > r[y];
                r[x] = r[x].wrapping_sub(r[y]);
                r[FLAG] = no_borrow as u8;
            }
            Instruction::SubReverse { x, y } => {
                let no_borrow = r[y] > r[x];
                r[x] = r[y].wrapping_sub(r[x]);
                r[FLAG] = no_borrow as u8;
            }
            Instruction::ShiftRight { x } => {
                let bit = r[x] & 0x1;
                r[x] >>= 1;
                r[FLAG] = bit;
            }
            Instruction::ShiftLeft { x } => {
                let bit = r[x] >> 7;
                r[x] <<= 1;
                r[FLAG] = bit;
            }
            Instruction::Random { x, b } => {
                // using a fill bytes call here, as the trait RngCore does not
                // support random u8.
                let mut rand = [0u8; 1];
                self.rng.fill_bytes(&mut rand);
                r[x] = rand[0] & b;
            }
            _ => unreachable!("{} is no arithmetic instruction", instruction),
        }
    }

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is not affected.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the sprite for the character in `VX`.
    /// - `FX33` - BCD      - `set_BCD(Vx)`         - Stores the decimal digits of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` (including `VX`) in memory starting at address `I`.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) with values from memory starting at address `I`.
    ///
    /// `I` itself is never moved by the block transfers.
    fn memory_ops(
        &mut self,
        instruction: Instruction,
    ) -> Result<ProgramCounterStep, ProcessError> {
        match instruction {
            Instruction::LoadIndex { addr } => self.index_register = addr,
            Instruction::AddIndex { x } => {
                self.index_register = self.index_register.wrapping_add(self.registers[x] as u16);
            }
            Instruction::LoadFont { x } => {
                // only the low nibble names a hex digit
                let digit = (self.registers[x] & 0xF) as usize;
                let location = display::fontset::LOCATION + digit * display::fontset::CHAR_SIZE;
                self.index_register = location as u16;
            }
            Instruction::StoreBcd { x } => {
                let range = self.index_range(3)?;
                let r = self.registers[x];
                // 246u8 / 100 => 2, 246u8 / 10 => 24 % 10 => 4, 246u8 % 10 => 6
                self.memory[range].copy_from_slice(&[r / 100, r / 10 % 10, r % 10]);
            }
            Instruction::StoreRegisters { x } => {
                let range = self.index_range(x + 1)?;
                self.memory[range].copy_from_slice(&self.registers[..=x]);
            }
            Instruction::LoadRegisters { x } => {
                let range = self.index_range(x + 1)?;
                self.registers[..=x].copy_from_slice(&self.memory[range]);
            }
            _ => unreachable!("{} is no memory instruction", instruction),
        }
        Ok(ProgramCounterStep::Next)
    }

    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws a sprite at coordinate `(VX, VY)` that has a width of `8` pixels and a height of `N` pixels. Each row of `8` pixels is read as bit-coded starting from memory location `I`; `I` value doesn't change after the execution of this instruction. `VF` is set to `1` if any screen pixels are flipped from set to unset when the sprite is drawn, and to `0` if that doesn't happen.
    fn display_ops(
        &mut self,
        instruction: Instruction,
    ) -> Result<ProgramCounterStep, ProcessError> {
        match instruction {
            Instruction::Clear => self.display.clear(),
            Instruction::Draw { x, y, n } => {
                let range = self.index_range(n)?;
                let coorx = self.registers[x] as usize;
                let coory = self.registers[y] as usize;

                let collision = self.display.draw_sprite(coorx, coory, &self.memory[range]);
                self.registers[FLAG] = collision as u8;
            }
            _ => unreachable!("{} is no display instruction", instruction),
        }
        Ok(ProgramCounterStep::Next)
    }
}

