use crate::{definitions::cpu, RomError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a single program image with it's information
///
/// The data is copied verbatim into memory at the program start, there is
/// no header or any other metadata.
pub struct Rom {
    /// The rom name
    name: String,
    /// The raw program data stored on the heap
    data: Box<[u8]>,
}

impl Rom {
    /// Will create a new rom, refusing images that do not fit behind the program start.
    ///
    /// # Example
    /// ```rust
    /// # use chip::resources::Rom;
    /// let rom = Rom::new("JUMP", vec![0x12u8, 0x00]).expect("fits into memory");
    /// assert_eq!(rom.get_name(), "JUMP");
    /// assert_eq!(rom.get_data(), &[0x12, 0x00]);
    /// assert!(Rom::new("HUGE", vec![0u8; 0x1000]).is_err());
    /// ```
    pub fn new<D>(name: &str, data: D) -> Result<Self, RomError>
    where
        D: Into<Box<[u8]>>,
    {
        let data = data.into();
        if data.len() > cpu::PROGRAM_SIZE {
            return Err(RomError::TooLarge {
                name: name.to_string(),
                len: data.len(),
                max: cpu::PROGRAM_SIZE,
            });
        }

        Ok(Self {
            name: name.to_string(),
            data,
        })
    }

    /// Will build a rom from a list of opcodes, stored big endian.
    ///
    /// # Example
    /// ```rust
    /// # use chip::resources::Rom;
    /// let rom = Rom::from_opcodes("CLS", &[0x00E0, 0x1200]).expect("fits into memory");
    /// assert_eq!(rom.get_data(), &[0x00, 0xE0, 0x12, 0x00]);
    /// ```
    pub fn from_opcodes(name: &str, opcodes: &[u16]) -> Result<Self, RomError> {
        let data: Vec<u8> = opcodes
            .iter()
            .flat_map(|opcode| opcode.to_be_bytes())
            .collect();
        Self::new(name, data)
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_rom_fits() {
        let rom = Rom::new("FULL", vec![0xAAu8; cpu::PROGRAM_SIZE]);
        assert_eq!(rom.map(|rom| rom.len()), Ok(cpu::PROGRAM_SIZE));
    }

    #[test]
    fn test_too_large_rom() {
        let len = cpu::PROGRAM_SIZE + 1;
        assert_eq!(
            Rom::new("TOO LARGE", vec![0u8; len]),
            Err(RomError::TooLarge {
                name: "TOO LARGE".to_string(),
                len,
                max: cpu::PROGRAM_SIZE,
            })
        );
    }

    #[test]
    fn test_empty_rom() {
        let rom = Rom::new("EMPTY", Vec::<u8>::new()).expect("an empty rom is valid");
        assert!(rom.is_empty());
    }
}
