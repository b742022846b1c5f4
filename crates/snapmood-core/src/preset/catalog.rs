//! Read-only lookup over the per-family preset tables.
//!
//! Every operation is keyed by `(PresetFamily, id)` and scans only that
//! family's table. An unknown id is an expected outcome (stale selection,
//! typo) and yields `None`; nothing here logs or fails.

use super::family::PresetFamily;
use super::model::Preset;
use super::{emotion_mask, ghibli, neo_tokyo};

/// Returns the full preset table of a family, in declaration order.
pub fn presets(family: PresetFamily) -> &'static [Preset] {
    match family {
        PresetFamily::EmotionMask => emotion_mask::PRESETS,
        PresetFamily::Ghibli => ghibli::PRESETS,
        PresetFamily::NeoTokyo => neo_tokyo::PRESETS,
    }
}

/// Finds a preset by exact id within a family.
///
/// # Examples
///
/// ```
/// use snapmood_core::preset::{get_preset, PresetFamily};
///
/// let tears = get_preset(PresetFamily::Ghibli, "ghibli_tears").unwrap();
/// assert_eq!(tears.strength, 0.45);
/// assert!(get_preset(PresetFamily::Ghibli, "").is_none());
/// ```
pub fn get_preset(family: PresetFamily, id: &str) -> Option<&'static Preset> {
    presets(family).iter().find(|p| p.id == id)
}

/// Returns true iff the family has a preset with this id.
pub fn is_preset(family: PresetFamily, id: &str) -> bool {
    get_preset(family, id).is_some()
}

/// Ids of a family's presets, in declaration order.
pub fn ids(family: PresetFamily) -> impl Iterator<Item = &'static str> {
    presets(family).iter().map(|p| p.id)
}

/// Presets of a family carrying the given feature tag.
pub fn with_feature<'a>(
    family: PresetFamily,
    tag: &'a str,
) -> impl Iterator<Item = &'static Preset> + 'a {
    presets(family).iter().filter(move |p| p.has_feature(tag))
}

/// The first preset of a family, used when nothing better is configured.
pub fn default_preset(family: PresetFamily) -> &'static Preset {
    // Tables are non-empty (checked by test_every_family_is_non_empty)
    &presets(family)[0]
}
