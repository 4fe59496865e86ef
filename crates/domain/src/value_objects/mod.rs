//! Value objects: icon policy, spellcasting detection, slot resources.

pub mod icon;
pub mod spell_slots;
pub mod spellcasting;

pub use icon::{icon_path, select_icon, GENERIC_ICON, ICON_PATH_PREFIX};
pub use spell_slots::{SlotPool, SpellSlots, PACT_SLOT_LABEL};
pub use spellcasting::{is_spellcasting_class_name, SPELLCASTING_CLASS_KEYWORDS};
