//! Preset domain model.
//!
//! Presets are compiled into the binary as `'static` data. The prompt texts
//! are opaque instructions for an external generation model and are never
//! parsed here.

use serde::Serialize;

/// External generation backend, derived from a model identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Black Forest Labs FLUX models (`bfl/...`)
    Bfl,
    /// Stability AI models (`stability/...`)
    Stability,
    /// Models hosted on Replicate (`replicate/...`)
    Replicate,
    /// Any other backend
    Other,
}

impl Backend {
    /// Resolves the backend from a model identifier such as `bfl/flux-pro-1.1-ultra`.
    pub fn from_model(model: &str) -> Self {
        match model.split_once('/').map(|(prefix, _)| prefix) {
            Some("bfl") => Self::Bfl,
            Some("stability") => Self::Stability,
            Some("replicate") => Self::Replicate,
            _ => Self::Other,
        }
    }
}

/// Parameters only understood by BFL backends.
///
/// Attached to the shared preset record and forwarded verbatim when the
/// preset targets a BFL model; dropped for every other backend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BflOptions {
    pub prompt_upsampling: Option<bool>,
    /// 0 (strict) to 6 (permissive)
    pub safety_tolerance: Option<u8>,
    pub output_format: Option<&'static str>,
    pub raw: Option<bool>,
    /// 0.0 to 1.0
    pub image_prompt_strength: Option<f64>,
    pub aspect_ratio: Option<&'static str>,
}

impl BflOptions {
    /// An empty option set, usable in `const` tables.
    pub const NONE: BflOptions = BflOptions {
        prompt_upsampling: None,
        safety_tolerance: None,
        output_format: None,
        raw: None,
        image_prompt_strength: None,
        aspect_ratio: None,
    };
}

/// One variant of a style family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    /// Stable identifier, unique within its family
    pub id: &'static str,
    /// Display name
    pub label: &'static str,
    pub prompt: &'static str,
    pub negative_prompt: &'static str,
    /// How far the model departs from the source image, in [0, 1]
    pub strength: f64,
    pub guidance_scale: f64,
    pub num_inference_steps: u32,
    /// External model identifier (e.g. `bfl/flux-pro-1.1-ultra`)
    pub model: &'static str,
    /// Descriptive tag (e.g. `img2img`)
    pub mode: &'static str,
    /// Descriptive tag naming the expected input (e.g. `selfie`)
    pub input: &'static str,
    /// The caller must supply a base image before using this preset
    pub requires_source: bool,
    /// Descriptive tag naming where the preset came from
    pub source: &'static str,
    pub bfl: Option<BflOptions>,
    /// Free-form tags for client-side filtering
    pub features: &'static [&'static str],
}

impl Preset {
    pub fn backend(&self) -> Backend {
        Backend::from_model(self.model)
    }

    /// Backend-specific options the target backend recognizes, if any.
    pub fn backend_options(&self) -> Option<&BflOptions> {
        match self.backend() {
            Backend::Bfl => self.bfl.as_ref(),
            _ => None,
        }
    }

    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_model_prefix() {
        assert_eq!(Backend::from_model("bfl/flux-pro-1.1-ultra"), Backend::Bfl);
        assert_eq!(
            Backend::from_model("stability/sdxl-img2img"),
            Backend::Stability
        );
        assert_eq!(
            Backend::from_model("replicate/instant-id"),
            Backend::Replicate
        );
        assert_eq!(Backend::from_model("flux-dev"), Backend::Other);
        assert_eq!(Backend::from_model(""), Backend::Other);
    }

    #[test]
    fn test_backend_options_dropped_for_non_bfl_models() {
        let preset = Preset {
            id: "x",
            label: "X",
            prompt: "p",
            negative_prompt: "n",
            strength: 0.5,
            guidance_scale: 7.0,
            num_inference_steps: 30,
            model: "stability/sdxl-img2img",
            mode: "img2img",
            input: "selfie",
            requires_source: true,
            source: "test",
            bfl: Some(BflOptions {
                raw: Some(true),
                ..BflOptions::NONE
            }),
            features: &[],
        };
        assert!(preset.backend_options().is_none());
    }
}
