//! Generation request payloads.
//!
//! Builds the body handed to an external generation API from a preset and an
//! optional source image. The network call itself happens elsewhere.

use crate::error::{Result, SnapmoodError};
use crate::preset::Preset;
use serde::Serialize;

/// A base image picked on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceImage {
    /// Device asset URI (e.g. `file:///.../IMG_0001.jpg`)
    pub uri: String,
}

impl SourceImage {
    /// Creates a source image from an asset URI. Blank URIs are rejected.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(SnapmoodError::InvalidSource(
                "asset URI must not be empty".to_string(),
            ));
        }
        Ok(Self { uri })
    }
}

/// Request body for an external generation backend.
///
/// Serialized in camelCase; BFL-only fields are omitted for other backends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub preset_id: String,
    pub model: String,
    pub prompt: String,
    pub negative_prompt: String,
    pub strength: f64,
    pub guidance_scale: f64,
    pub num_inference_steps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_upsampling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_tolerance: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prompt_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    /// Source image URI
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl GenerationRequest {
    /// Builds a request from a preset.
    ///
    /// Fails with `MissingSource` when the preset requires a base image and
    /// none is given.
    pub fn from_preset(preset: &Preset, source: Option<SourceImage>) -> Result<Self> {
        if preset.requires_source && source.is_none() {
            return Err(SnapmoodError::MissingSource {
                preset_id: preset.id.to_string(),
            });
        }

        let options = preset.backend_options().copied().unwrap_or_default();

        Ok(Self {
            preset_id: preset.id.to_string(),
            model: preset.model.to_string(),
            prompt: preset.prompt.to_string(),
            negative_prompt: preset.negative_prompt.to_string(),
            strength: preset.strength,
            guidance_scale: preset.guidance_scale,
            num_inference_steps: preset.num_inference_steps,
            prompt_upsampling: options.prompt_upsampling,
            safety_tolerance: options.safety_tolerance,
            output_format: options.output_format.map(str::to_string),
            raw: options.raw,
            image_prompt_strength: options.image_prompt_strength,
            aspect_ratio: options.aspect_ratio.map(str::to_string),
            image: source.map(|s| s.uri),
        })
    }

    /// Renders the request as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
