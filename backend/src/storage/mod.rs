//! # Storage Module
//!
//! Holds timetable entries for the running process.
//!
//! The domain layer only sees the [`EntryStorage`] and [`Connection`] traits;
//! the current backend is an in-memory map that is created at startup and
//! dropped at shutdown. Nothing is written to disk.

pub mod memory;
pub mod traits;

pub use memory::{EntryRepository, MemoryConnection};
pub use traits::{Connection, EntryStorage};
