//! LS-8 virtual machine library.
//!
//! Provides the 8-bit register machine, its program loader, and logging.

pub mod utils;
pub mod virtual_machine;
