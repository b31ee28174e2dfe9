//! Fixed-size, byte-addressable RAM.

use crate::virtual_machine::errors::VMError;

/// Number of addressable cells.
pub const MEMORY_SIZE: usize = 256;

/// Zero-initialised RAM holding both program and data.
///
/// Every access is bounds-checked and reports [`VMError::MemoryOutOfBounds`]
/// instead of wrapping.
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Number of cells; fixed for the lifetime of the memory.
    pub const fn capacity(&self) -> usize {
        MEMORY_SIZE
    }

    /// Returns the byte stored at `addr`.
    pub fn read(&self, addr: usize) -> Result<u8, VMError> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(VMError::MemoryOutOfBounds {
                addr,
                capacity: MEMORY_SIZE,
            })
    }

    /// Stores `value` at `addr`.
    pub fn write(&mut self, addr: usize, value: u8) -> Result<(), VMError> {
        let slot = self
            .cells
            .get_mut(addr)
            .ok_or(VMError::MemoryOutOfBounds {
                addr,
                capacity: MEMORY_SIZE,
            })?;
        *slot = value;
        Ok(())
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// Cells past the end of the program keep their current contents.
    pub fn load(&mut self, program: &[u8]) -> Result<(), VMError> {
        if program.len() > MEMORY_SIZE {
            return Err(VMError::ProgramTooLarge {
                len: program.len(),
                capacity: MEMORY_SIZE,
            });
        }
        self.cells[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Read-only view of every cell.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let mem = Memory::new();
        assert!(mem.as_slice().iter().all(|&b| b == 0));
        assert_eq!(mem.capacity(), 256);
    }

    #[test]
    fn write_then_read() {
        let mut mem = Memory::new();
        mem.write(0, 0x82).unwrap();
        mem.write(255, 0xFF).unwrap();
        assert_eq!(mem.read(0).unwrap(), 0x82);
        assert_eq!(mem.read(255).unwrap(), 0xFF);
    }

    #[test]
    fn out_of_bounds() {
        let mut mem = Memory::new();
        assert_eq!(
            mem.read(256),
            Err(VMError::MemoryOutOfBounds {
                addr: 256,
                capacity: 256
            })
        );
        assert!(matches!(
            mem.write(1000, 1),
            Err(VMError::MemoryOutOfBounds { addr: 1000, .. })
        ));
    }

    #[test]
    fn load_program_at_zero() {
        let mut mem = Memory::new();
        mem.load(&[0x82, 0x00, 0x08, 0x01]).unwrap();
        assert_eq!(&mem.as_slice()[..5], &[0x82, 0x00, 0x08, 0x01, 0x00]);
    }

    #[test]
    fn load_fills_memory_exactly() {
        let mut mem = Memory::new();
        mem.load(&[7; MEMORY_SIZE]).unwrap();
        assert_eq!(mem.read(255).unwrap(), 7);
    }

    #[test]
    fn load_too_large() {
        let mut mem = Memory::new();
        assert_eq!(
            mem.load(&[0; MEMORY_SIZE + 1]),
            Err(VMError::ProgramTooLarge {
                len: 257,
                capacity: 256
            })
        );
    }
}
