//! Port traits the engine is wired through.

pub mod error;
pub mod external;
pub mod repos;
pub mod types;

pub use error::StoreError;
pub use external::{ClockPort, ConfigRegistry};
pub use repos::{CharacterStore, RecordStore, SettingsStore};
pub use types::RecordPatch;

#[cfg(test)]
pub use external::{MockClockPort, MockConfigRegistry};
#[cfg(test)]
pub use repos::{MockCharacterStore, MockRecordStore, MockSettingsStore};
