//! Icon selection for generated spellbooks.

/// Fallback icon when neither the class name nor the alignment hint matches
/// any table entry.
pub const GENERIC_ICON: &str = "generic-spellbook.png";

/// Prefix applied when resolving an icon identifier to an asset path.
pub const ICON_PATH_PREFIX: &str = "icons/";

/// Ordered (keyword, icon) table. Scanned top to bottom, first match wins.
/// Class keywords are deliberately declared before alignment keywords so a
/// class match always beats an alignment match - this ordering is the
/// tie-break contract, do not reorder.
const ICON_TABLE: [(&str, &str); 13] = [
    ("wizard", "wizard-tome.png"),
    ("sorcerer", "sorcerer-crystal.png"),
    ("warlock", "warlock-pact.png"),
    ("cleric", "cleric-holy.png"),
    ("paladin", "paladin-oath.png"),
    ("druid", "druid-nature.png"),
    ("ranger", "ranger-forest.png"),
    ("bard", "bard-music.png"),
    ("artificer", "artificer-gears.png"),
    ("evil", "evil-shadow.png"),
    ("good", "good-radiant.png"),
    ("chaotic", "chaotic-swirl.png"),
    ("lawful", "lawful-scales.png"),
];

/// Select an icon for a spellbook from the class name and the owner's
/// alignment hint.
///
/// Pure and total: every input pair yields an icon, falling back to
/// [`GENERIC_ICON`]. Matching is case-insensitive substring containment
/// against either input, in table declaration order.
pub fn select_icon(class_name: &str, alignment: &str) -> &'static str {
    let class_name = class_name.to_lowercase();
    let alignment = alignment.to_lowercase();
    for (keyword, icon) in ICON_TABLE {
        if class_name.contains(keyword) || alignment.contains(keyword) {
            return icon;
        }
    }
    GENERIC_ICON
}

/// Resolve an icon identifier to its asset path.
pub fn icon_path(icon: &str) -> String {
    format!("{ICON_PATH_PREFIX}{icon}")
}
