//! Preset families.

use crate::error::{Result, SnapmoodError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A style family grouping related presets.
///
/// Each family owns its own preset table; tables are never merged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum PresetFamily {
    /// Expressive face-mask portraits driven by a single emotion.
    #[serde(alias = "emotion_mask", alias = "emotion-mask")]
    #[strum(
        to_string = "emotionMask",
        serialize = "emotion_mask",
        serialize = "emotion-mask"
    )]
    EmotionMask,
    /// Hand-painted anime reaction shots.
    #[strum(to_string = "ghibli")]
    Ghibli,
    /// Cyberpunk glitch portraits.
    #[serde(alias = "neo_tokyo", alias = "neo-tokyo")]
    #[strum(
        to_string = "neoTokyo",
        serialize = "neo_tokyo",
        serialize = "neo-tokyo"
    )]
    NeoTokyo,
}

impl PresetFamily {
    /// Canonical name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmotionMask => "emotionMask",
            Self::Ghibli => "ghibli",
            Self::NeoTokyo => "neoTokyo",
        }
    }

    /// Human-readable name of the family.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EmotionMask => "Emotion Mask",
            Self::Ghibli => "Ghibli Reaction",
            Self::NeoTokyo => "Neo-Tokyo Glitch",
        }
    }

    /// Parses a family name, accepting the canonical and snake/kebab forms.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| SnapmoodError::UnknownFamily(name.to_string()))
    }

    /// All families in declaration order.
    pub fn all() -> impl Iterator<Item = PresetFamily> {
        Self::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_aliases() {
        assert_eq!(PresetFamily::parse("neoTokyo").unwrap(), PresetFamily::NeoTokyo);
        assert_eq!(PresetFamily::parse("neo_tokyo").unwrap(), PresetFamily::NeoTokyo);
        assert_eq!(PresetFamily::parse("neo-tokyo").unwrap(), PresetFamily::NeoTokyo);
        assert_eq!(
            PresetFamily::parse("emotion_mask").unwrap(),
            PresetFamily::EmotionMask
        );
    }

    #[test]
    fn test_parse_unknown_family() {
        let err = PresetFamily::parse("vaporwave").unwrap_err();
        assert_eq!(err, SnapmoodError::UnknownFamily("vaporwave".to_string()));
    }

    #[test]
    fn test_display_matches_canonical_name() {
        for family in PresetFamily::all() {
            assert_eq!(family.to_string(), family.as_str());
        }
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&PresetFamily::NeoTokyo).unwrap();
        assert_eq!(json, "\"neoTokyo\"");
    }

    #[test]
    fn test_serde_accepts_same_aliases_as_parse() {
        for name in ["neo_tokyo", "neo-tokyo", "emotion_mask", "emotion-mask", "ghibli"] {
            let parsed: PresetFamily = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            assert_eq!(parsed, PresetFamily::parse(name).unwrap());
        }
    }
}
