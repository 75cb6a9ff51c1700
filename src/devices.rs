use crate::definitions::{
    display::{HEIGHT, SPRITE_WIDTH, WIDTH},
    keyboard,
};

/// The raw pixel rows of the display, `true` means the pixel is set.
pub type Pixels = [[bool; WIDTH]; HEIGHT];

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will clear the display
    fn clear_display(&mut self);
    /// Will display all from the pixels
    fn display(&mut self, pixels: &Pixels);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard state of the host
pub trait KeyboardCommands {
    fn keys(&self) -> [bool; keyboard::SIZE];
}

/// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
/// `(64 x 32)`. Sprites are XORed onto the screen, both axes wrap around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pixels: Pixels,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
        }
    }
}

impl Display {
    pub fn new() -> Self {
        Display::default()
    }

    /// Will unset every pixel.
    pub fn clear(&mut self) {
        for row in self.pixels.iter_mut() {
            row.fill(false);
        }
    }

    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    /// Gives direct access to the pixels, mainly for hosts seeding a picture.
    pub fn pixels_mut(&mut self) -> &mut Pixels {
        &mut self.pixels
    }

    /// Returns the pixel at the given coordinate, the coordinates wrap around.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y % HEIGHT][x % WIDTH]
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|row| row.iter().all(|pixel| !pixel))
    }

    /// XORs the sprite rows onto the display with its upper left corner at `(x, y)`.
    /// Each row is read most significant bit first.
    ///
    /// Returns `true` if any pixel was flipped from set to unset.
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        let mut collision = false;

        for (i, row) in sprite.iter().enumerate() {
            let py = (y + i) % HEIGHT;

            for column in 0..SPRITE_WIDTH {
                let mask = 0x80 >> column;
                if row & mask == 0 {
                    continue;
                }

                let px = (x + column) % WIDTH;
                let pixel = &mut self.pixels[py][px];

                collision |= *pixel;
                *pixel = !*pixel;
            }
        }

        collision
    }
}

/// Will represent the last key press with the state the key had before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    index: usize,
    last: bool,
    current: bool,
}

impl Key {
    fn new(index: usize, last: bool, current: bool) -> Self {
        Self {
            index,
            last,
            current,
        }
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn get_last(&self) -> bool {
        self.last
    }

    pub fn get_current(&self) -> bool {
        self.current
    }

    /// The key went from released to pressed.
    pub fn is_press(&self) -> bool {
        !self.last && self.current
    }
}

/// Will store the last change to the given keybord
/// and represent the internal keyboard as well
///
/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press, and then stores it in one of
/// the data registers.
#[derive(Default, Debug, Clone)]
pub struct Keyboard {
    keys: [bool; keyboard::SIZE],
    /// the last key that went from released to pressed
    last: Option<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    pub fn reset(&mut self) {
        self.keys = [false; keyboard::SIZE];
        self.last = None;
    }

    pub fn toggle_key(&mut self, key: usize) {
        self.set_key(key, !self.keys[key % keyboard::SIZE])
    }

    /// Will set the given key, indices wrap around the 16 keys.
    pub fn set_key(&mut self, key: usize, to: bool) {
        let key = key % keyboard::SIZE;
        let change = Key::new(key, self.keys[key], to);
        if change.is_press() {
            self.last = Some(change);
        }
        self.keys[key] = to;
    }

    /// Will overwrite all keys at once, the lowest key that went down is
    /// remembered as the last press.
    pub fn set_mult(&mut self, keys: &[bool; keyboard::SIZE]) {
        let press = self
            .keys
            .iter()
            .zip(keys.iter())
            .enumerate()
            .map(|(index, (last, current))| Key::new(index, *last, *current))
            .find(Key::is_press);

        if press.is_some() {
            self.last = press;
        }
        self.keys = *keys;
    }

    pub fn get_keys(&self) -> &[bool; keyboard::SIZE] {
        &self.keys
    }

    pub fn is_pressed(&self, key: usize) -> bool {
        self.keys[key % keyboard::SIZE]
    }

    pub fn get_last(&self) -> Option<Key> {
        self.last
    }

    /// Takes the last press out of the keyboard, so it will be seen only once.
    pub fn take_last(&mut self) -> Option<Key> {
        self.last.take()
    }
}
