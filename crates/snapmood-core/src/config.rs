//! Root configuration model.
//!
//! Mirrors `config.toml`: the preselected family, per-family fallback preset
//! ids, and development switches. Loading lives in the infrastructure crate.

use crate::preset::{PresetFamily, is_preset};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub presets: PresetConfig,
    #[serde(default)]
    pub dev: DevConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PresetConfig {
    /// Family preselected on the style picker
    #[serde(default = "default_family")]
    pub default_family: PresetFamily,
    /// Family name -> preset id used when a requested id is unknown
    #[serde(default)]
    pub fallback: BTreeMap<String, String>,
}

fn default_family() -> PresetFamily {
    PresetFamily::Ghibli
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            default_family: default_family(),
            fallback: BTreeMap::new(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct DevConfig {
    /// Allows seeding a local test-account session
    #[serde(default)]
    pub test_accounts_enabled: bool,
}

impl RootConfig {
    /// Configured fallback preset id for a family.
    ///
    /// Keys may use any accepted spelling of the family name.
    pub fn fallback_for(&self, family: PresetFamily) -> Option<&str> {
        self.presets
            .fallback
            .iter()
            .find(|(name, _)| PresetFamily::parse(name).ok() == Some(family))
            .map(|(_, id)| id.as_str())
    }

    /// Lists problems in the fallback table: unknown families, families
    /// listed under more than one spelling, and ids that are not in their
    /// family's catalog. Empty when the config is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen: HashMap<PresetFamily, &str> = HashMap::new();
        for (name, id) in &self.presets.fallback {
            match PresetFamily::parse(name) {
                Ok(family) => {
                    if let Some(first) = seen.insert(family, name) {
                        problems.push(format!(
                            "fallback for {family} is set twice ('{first}' and '{name}')"
                        ));
                    }
                    if !is_preset(family, id) {
                        problems.push(format!("fallback '{id}' is not a {family} preset"));
                    }
                }
                Err(e) => problems.push(e.to_string()),
            }
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.presets.default_family, PresetFamily::Ghibli);
        assert!(!config.dev.test_accounts_enabled);
    }

    #[test]
    fn test_parse_full_config() {
        let config: RootConfig = toml::from_str(
            r#"
            [presets]
            default_family = "neoTokyo"

            [presets.fallback]
            neo_tokyo = "neo_tokyo_glitch"
            ghibli = "ghibli_smile"

            [dev]
            test_accounts_enabled = true
            "#,
        )
        .unwrap();

        assert_eq!(config.presets.default_family, PresetFamily::NeoTokyo);
        assert_eq!(
            config.fallback_for(PresetFamily::NeoTokyo),
            Some("neo_tokyo_glitch")
        );
        assert_eq!(config.fallback_for(PresetFamily::EmotionMask), None);
        assert!(config.dev.test_accounts_enabled);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_family_accepts_aliases() {
        for name in ["neo_tokyo", "neo-tokyo", "neoTokyo"] {
            let config: RootConfig =
                toml::from_str(&format!("[presets]\ndefault_family = \"{name}\"\n")).unwrap();
            assert_eq!(config.presets.default_family, PresetFamily::NeoTokyo);
        }
    }

    #[test]
    fn test_validate_reports_duplicate_family_keys() {
        let config: RootConfig = toml::from_str(
            r#"
            [presets.fallback]
            neoTokyo = "neo_tokyo_chrome"
            neo_tokyo = "neo_tokyo_glitch"
            "#,
        )
        .unwrap();

        let problems = config.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("set twice"));
    }

    #[test]
    fn test_validate_reports_bad_entries() {
        let mut config = RootConfig::default();
        config
            .presets
            .fallback
            .insert("ghibli".to_string(), "neo_tokyo_base".to_string());
        config
            .presets
            .fallback
            .insert("vaporwave".to_string(), "x".to_string());

        let problems = config.validate();
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.contains("neo_tokyo_base")));
        assert!(problems.iter().any(|p| p.contains("vaporwave")));
    }
}
