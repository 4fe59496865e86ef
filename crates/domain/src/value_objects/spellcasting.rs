//! Spellcasting class detection.

/// The class keywords that mark a class record as spellcasting.
pub const SPELLCASTING_CLASS_KEYWORDS: [&str; 9] = [
    "wizard",
    "sorcerer",
    "cleric",
    "druid",
    "bard",
    "ranger",
    "paladin",
    "warlock",
    "artificer",
];

/// Whether a class name denotes a spellcasting class.
///
/// Case-insensitive substring match, deliberately permissive: a class named
/// "Paladin of Doom" still counts as a paladin. Over-inclusion is preferred
/// over missing a homebrew caster.
pub fn is_spellcasting_class_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    SPELLCASTING_CLASS_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}
