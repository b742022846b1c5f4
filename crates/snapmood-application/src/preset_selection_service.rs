//! Preset selection with configured fallbacks.
//!
//! The catalog only answers "found" or "not found". This service decides what
//! a screen should use when a stored selection no longer exists: the family's
//! configured fallback, then the family's first preset.

use snapmood_core::error::Result;
use snapmood_core::preset::{Preset, PresetFamily, default_preset, get_preset};
use snapmood_core::request::{GenerationRequest, SourceImage};
use snapmood_infrastructure::ConfigService;

/// How a selection was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The requested id exists
    Exact,
    /// The configured fallback for the family was used
    ConfiguredFallback,
    /// The family's first preset was used
    FamilyDefault,
}

/// Outcome of resolving a requested preset id.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub family: PresetFamily,
    pub requested_id: String,
    pub preset: &'static Preset,
    pub resolution: Resolution,
}

impl Selection {
    pub fn is_fallback(&self) -> bool {
        self.resolution != Resolution::Exact
    }
}

pub struct PresetSelectionService {
    config_service: ConfigService,
}

impl PresetSelectionService {
    pub fn new(config_service: ConfigService) -> Self {
        Self { config_service }
    }

    /// Resolves `id` within `family`, falling back when it is unknown.
    pub fn resolve(&self, family: PresetFamily, id: &str) -> Result<Selection> {
        let selection = |preset: &'static Preset, resolution: Resolution| Selection {
            family,
            requested_id: id.to_string(),
            preset,
            resolution,
        };

        if let Some(preset) = get_preset(family, id) {
            return Ok(selection(preset, Resolution::Exact));
        }

        let config = self.config_service.get_config()?;
        if let Some(fallback_id) = config.fallback_for(family) {
            if let Some(preset) = get_preset(family, fallback_id) {
                tracing::warn!(
                    %family,
                    requested = id,
                    fallback = fallback_id,
                    "Unknown preset, using configured fallback"
                );
                return Ok(selection(preset, Resolution::ConfiguredFallback));
            }
            tracing::warn!(
                %family,
                fallback = fallback_id,
                "Configured fallback is not in the catalog"
            );
        }

        let preset = default_preset(family);
        tracing::warn!(
            %family,
            requested = id,
            fallback = preset.id,
            "Unknown preset, using family default"
        );
        Ok(selection(preset, Resolution::FamilyDefault))
    }

    /// Resolves a preset and builds its generation request.
    pub fn build_request(
        &self,
        family: PresetFamily,
        id: &str,
        source: Option<SourceImage>,
    ) -> Result<(Selection, GenerationRequest)> {
        let selection = self.resolve(family, id)?;
        let request = GenerationRequest::from_preset(selection.preset, source)?;
        tracing::debug!(
            preset = selection.preset.id,
            model = %request.model,
            "Built generation request"
        );
        Ok((selection, request))
    }
}
