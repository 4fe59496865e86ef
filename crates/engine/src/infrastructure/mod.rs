//! Infrastructure: port traits and in-process adapters.

pub mod clock;
pub mod memory;
pub mod ports;

pub use clock::SystemClock;
pub use memory::MemoryStore;
