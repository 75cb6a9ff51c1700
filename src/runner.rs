use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;

use crate::{
    chip8::Machine,
    definitions::{cpu, timer},
    devices::{DisplayCommands, KeyboardCommands},
    opcode::Operation,
    resources::Rom,
    timer::TimedWorker,
    ProcessError,
};

/// A running machine, driven by two workers: one steps the cpu, the other
/// counts the timers down at `60Hz`.
///
/// Dropping the runner stops both workers.
pub struct Runner<W: TimedWorker> {
    machine: Arc<Mutex<Machine>>,
    error: Arc<Mutex<Option<ProcessError>>>,
    cpu: W,
    timers: W,
}

impl<W: TimedWorker> Runner<W> {
    /// The shared machine, lock it to inspect or change the state while it runs.
    pub fn machine(&self) -> Arc<Mutex<Machine>> {
        self.machine.clone()
    }

    /// The fault that halted the machine, if there was one.
    pub fn error(&self) -> Option<ProcessError> {
        self.error.lock().clone()
    }

    pub fn is_running(&self) -> bool {
        self.cpu.is_alive() && self.error.lock().is_none()
    }

    /// Will stop both workers and wait for them.
    pub fn stop(&mut self) {
        self.cpu.stop();
        self.timers.stop();
    }
}

impl<W: TimedWorker> Drop for Runner<W> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Loads the rom into a fresh machine and starts executing it.
///
/// The keyboard is polled before every step, the display gets the new pixels after
/// every `CLS` or `DRW`. A fault stops the execution, it can be read back with
/// [`Runner::error`].
pub fn run<D, K, W>(mut display: D, keyboard: K, rom: Rom) -> Runner<W>
where
    D: DisplayCommands + Send + 'static,
    K: KeyboardCommands + Send + 'static,
    W: TimedWorker,
{
    log::info!("starting rom '{}'", rom.get_name());

    let machine = Arc::new(Mutex::new(Machine::with_rom(rom)));
    let error = Arc::new(Mutex::new(None));

    display.clear_display();

    let cpu_machine = machine.clone();
    let cpu_error = error.clone();
    let inner_run = move || {
        let mut fault = cpu_error.lock();
        if fault.is_some() {
            // halted
            return;
        }

        let mut machine = cpu_machine.lock();
        machine.set_keyboard(&keyboard.keys());

        match machine.step() {
            Ok(Operation::Draw) => display.display(machine.display()),
            Ok(_) => {}
            Err(err) => {
                log::error!(
                    "The machine halted at {:#06X}: {}",
                    machine.program_counter(),
                    err
                );
                *fault = Some(err);
            }
        }
    };

    let timer_machine = machine.clone();
    let inner_tick = move || timer_machine.lock().tick_timers();

    let mut cpu = W::new();
    cpu.start(inner_run, Duration::from_millis(cpu::INTERVAL));

    let mut timers = W::new();
    timers.start(inner_tick, Duration::from_millis(timer::INTERVAL));

    Runner {
        machine,
        error,
        cpu,
        timers,
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    use super::*;
    use crate::{
        definitions::keyboard,
        devices::{MockDisplayCommands, MockKeyboardCommands},
        timer::Worker,
        StackError,
    };

    fn idle_keyboard() -> MockKeyboardCommands {
        let mut mock = MockKeyboardCommands::new();
        mock.expect_keys().returning(|| [false; keyboard::SIZE]);
        mock
    }

    /// a display that counts how often it was drawn to
    fn counting_display(counter: Arc<AtomicUsize>) -> MockDisplayCommands {
        let mut display = MockDisplayCommands::new();
        display.expect_clear_display().times(1).return_const(());
        display.expect_display().returning(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        display
    }

    #[test]
    fn test_run_draws() {
        let counter = Arc::new(AtomicUsize::new(0));
        // clear the screen and spin
        let rom = Rom::from_opcodes("SPIN", &[0x00E0, 0x1202]).expect("fits");

        let mut runner: Runner<Worker> =
            run(counting_display(counter.clone()), idle_keyboard(), rom);
        assert!(runner.is_running());

        thread::sleep(Duration::from_millis(100));
        runner.stop();

        assert_eq!(runner.error(), None);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(runner.machine().lock().program_counter(), 0x202);
    }

    #[test]
    fn test_run_halts_on_fault() {
        let counter = Arc::new(AtomicUsize::new(0));
        let rom = Rom::from_opcodes("RETURN", &[0x00EE]).expect("fits");

        let mut runner: Runner<Worker> =
            run(counting_display(counter.clone()), idle_keyboard(), rom);

        thread::sleep(Duration::from_millis(100));
        assert!(!runner.is_running());
        assert_eq!(
            runner.error(),
            Some(ProcessError::Stack(StackError::Underflow))
        );
        runner.stop();

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(runner.machine().lock().program_counter(), 0x200);
    }

    #[test]
    fn test_run_ticks_timers() {
        let counter = Arc::new(AtomicUsize::new(0));
        // LD V0, FF; LD DT, V0; JP 204
        let rom = Rom::from_opcodes("DELAY", &[0x60FF, 0xF015, 0x1204]).expect("fits");

        let mut runner: Runner<Worker> =
            run(counting_display(counter.clone()), idle_keyboard(), rom);

        thread::sleep(Duration::from_millis(200));
        runner.stop();

        let machine = runner.machine();
        let machine = machine.lock();
        assert!(machine.delay_timer() < 0xFF);
        assert_eq!(machine.program_counter(), 0x204);
    }
}
