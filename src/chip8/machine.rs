use std::ops::Range;

use {
    crate::{
        definitions::{cpu, display, keyboard, memory},
        devices::{Display, Keyboard, Pixels},
        opcode::{self, Instruction, Opcode, Operation, ProgramCounterStep},
        resources::Rom,
        timer::Timer,
        MemoryError, ProcessError, StackError,
    },
    rand::RngCore,
    tinyvec::ArrayVec,
};

/// The execution state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The next step fetches a new instruction.
    Ready,
    /// A `LD Vx, K` is waiting for a key press, the pressed key goes into `register`.
    AwaitingKey { register: usize },
}

/// The Machine struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instance of the
/// Chip8 CPU.
pub struct Machine {
    /// the loaded program, used for resets
    pub(super) rom: Option<Rom>,
    /// the last fetched opcode, two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x1FF` - Chip 8 interpreter (contains font set in emu)
    /// - `0x000-0x050` - Used for the built in `4x5` pixel font set (`0-F`)
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: Box<[u8; memory::SIZE]>,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions. In an addition operation, `VF` is the carry flag, while in subtraction, it
    /// is the "no borrow" flag. In the draw instruction `VF` is set upon pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index register `I`
    pub(super) index_register: u16,
    /// The address of the next instruction to be executed from memory.
    pub(super) program_counter: u16,
    /// The stack is only used to store return addresses when subroutines are called. The original
    /// [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes for up to
    /// `12` levels of nesting; modern implementations usually have more.
    /// (here we are using `16` slots, of which `15` can be nested)
    pub(super) stack: ArrayVec<[u16; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made.
    pub(super) sound_timer: Timer,
    pub(super) display: Display,
    pub(super) keyboard: Keyboard,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
    pub(super) state: State,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// will create a new machine without a program
    pub fn new() -> Self {
        let mut machine = Self {
            rom: None,
            opcode: 0,
            memory: Box::new([0; memory::SIZE]),
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER as u16,
            stack: ArrayVec::new(),
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            display: Display::new(),
            keyboard: Keyboard::new(),
            rng: Box::new(rand::rngs::OsRng),
            state: State::Ready,
        };
        machine.load_font();
        machine
    }

    /// will create a new machine with the given program loaded
    pub fn with_rom(rom: Rom) -> Self {
        let mut machine = Self::new();
        machine.load(rom);
        machine
    }

    /// Replaces the random number generator used by `RND`.
    pub fn with_rng<R>(mut self, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        self.rng = Box::new(rng);
        self
    }

    fn load_font(&mut self) {
        use display::fontset::{FONTSET, LOCATION};
        self.memory[LOCATION..(LOCATION + FONTSET.len())].copy_from_slice(&FONTSET);
    }

    /// Will write the program into memory at the program start.
    ///
    /// The rom size is checked during its creation, so it always fits.
    pub fn load(&mut self, rom: Rom) {
        log::info!("loading rom '{}' ({} bytes)", rom.get_name(), rom.len());

        let data = rom.get_data();
        self.memory[cpu::PROGRAM_COUNTER..(cpu::PROGRAM_COUNTER + data.len())]
            .copy_from_slice(data);
        self.rom = Some(rom);
    }

    /// Puts the machine back into its power on state and reloads the last program.
    pub fn reset(&mut self) {
        log::info!("resetting the machine");

        self.opcode = 0;
        self.memory.fill(0);
        self.registers = [0; cpu::register::SIZE];
        self.index_register = 0;
        self.program_counter = cpu::PROGRAM_COUNTER as u16;
        self.stack.clear();
        self.delay_timer = Timer::default();
        self.sound_timer = Timer::default();
        self.display.clear();
        self.keyboard.reset();
        self.state = State::Ready;

        self.load_font();
        if let Some(rom) = self.rom.take() {
            self.load(rom);
        }
    }

    /// will get the next opcode from memory
    pub(super) fn set_opcode(&mut self) -> Result<(), ProcessError> {
        self.opcode = opcode::build_opcode(&self.memory[..], self.program_counter as usize)?;
        Ok(())
    }

    /// Will run a single fetch, decode and execute cycle.
    ///
    /// While the machine waits for a key nothing is fetched, the step only checks
    /// for a new key press.
    pub fn step(&mut self) -> Result<Operation, ProcessError> {
        if let State::AwaitingKey { register } = self.state {
            return self.resume_wait(register);
        }

        self.set_opcode()?;
        let instruction = opcode::decode(self.opcode);
        log::debug!("{:#06X}: {}", self.program_counter, instruction);

        let (step, operation) = self.execute(instruction)?;
        self.advance(step)?;
        Ok(operation)
    }

    /// Completes a pending `LD Vx, K` once a key went down.
    fn resume_wait(&mut self, register: usize) -> Result<Operation, ProcessError> {
        match self.keyboard.take_last() {
            Some(key) => {
                log::debug!("key {:#X} pressed, resuming", key.get_index());
                self.registers[register] = key.get_index() as u8;
                self.state = State::Ready;
                self.advance(ProgramCounterStep::Next)?;
                Ok(Operation::None)
            }
            None => Ok(Operation::Wait),
        }
    }

    /// Will move the program counter by the given step.
    pub(super) fn advance(&mut self, step: ProgramCounterStep) -> Result<(), MemoryError> {
        if let ProgramCounterStep::Jump(pointer) = step {
            if pointer >= memory::SIZE {
                return Err(MemoryError::Jump(pointer));
            }
        }
        self.program_counter = step.apply(self.program_counter as usize) as u16;
        Ok(())
    }

    /// Counts both timers down by one, meant to be called at `60Hz`.
    pub fn tick_timers(&mut self) {
        self.delay_timer.tick();
        self.sound_timer.tick();
    }

    /// Will write keyboard data into interncal keyboard representation.
    pub fn set_keyboard(&mut self, keys: &[bool; keyboard::SIZE]) {
        self.keyboard.set_mult(keys);
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, to: bool) {
        self.keyboard.set_key(key, to)
    }

    /// Will toggle the given key
    pub fn toggle_key(&mut self, key: usize) {
        self.keyboard.toggle_key(key)
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// will return the sound timer
    pub fn sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// The host should play a tone while this is true.
    pub fn is_sound_active(&self) -> bool {
        self.sound_timer.is_active()
    }

    /// will return the delay timer
    pub fn delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// Will return the current display configuration
    pub fn display(&self) -> &Pixels {
        self.display.pixels()
    }

    pub fn registers(&self) -> &[u8; cpu::register::SIZE] {
        &self.registers
    }

    pub fn index_register(&self) -> u16 {
        self.index_register
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    /// The pending return addresses, the last entry is the top of the stack.
    pub fn stack(&self) -> &[u16] {
        &self.stack
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory[..]
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn rom(&self) -> Option<&Rom> {
        self.rom.as_ref()
    }

    /// Decodes the instruction at the program counter without running it.
    pub fn current_instruction(&self) -> Result<Instruction, ProcessError> {
        let opcode = opcode::build_opcode(&self.memory[..], self.program_counter as usize)?;
        Ok(opcode::decode(opcode))
    }

    /// Will push the given return address to the stack
    pub(super) fn push_stack(&mut self, pointer: u16) -> Result<(), StackError> {
        if self.stack.len() >= cpu::stack::MAX_DEPTH {
            return Err(StackError::Overflow);
        }
        match self.stack.try_push(pointer) {
            None => Ok(()),
            Some(_) => Err(StackError::Overflow),
        }
    }

    /// Will pop the last return address from the stack
    pub(super) fn pop_stack(&mut self) -> Result<u16, StackError> {
        self.stack.pop().ok_or(StackError::Underflow)
    }

    /// The memory range `I..I + len`, as long as it lies inside the memory.
    pub(super) fn index_range(&self, len: usize) -> Result<Range<usize>, MemoryError> {
        let from = self.index_register as usize;
        let to = from + len;
        if to > memory::SIZE {
            Err(MemoryError::OutOfBounds {
                from,
                to: to - 1,
                len: memory::SIZE,
            })
        } else {
            Ok(from..to)
        }
    }
}
