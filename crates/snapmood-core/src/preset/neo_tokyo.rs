//! Neo-Tokyo glitch presets.

use super::model::{BflOptions, Preset};

const NEGATIVE: &str = "daylight, pastel colors, watercolor, cartoon, extra limbs, deformed face, \
    text, watermark, lowres";

pub(crate) const PRESETS: &[Preset] = &[
    Preset {
        id: "neo_tokyo_base",
        label: "Neon Base",
        prompt: "cyberpunk portrait of the person, neon-lit rainy alley, magenta and cyan rim \
            light, holographic signage, chromatic aberration, cinematic",
        negative_prompt: NEGATIVE,
        strength: 0.6,
        guidance_scale: 7.5,
        num_inference_steps: 30,
        model: "stability/sdxl-img2img",
        mode: "img2img",
        input: "selfie",
        requires_source: true,
        source: "neo_tokyo_glitch",
        bfl: None,
        features: &["cyberpunk", "portrait", "neon"],
    },
    Preset {
        id: "neo_tokyo_glitch",
        label: "Datamosh",
        prompt: "cyberpunk portrait of the person, heavy RGB split glitch, scanlines, corrupted \
            pixel blocks, neon skyline, vhs noise",
        negative_prompt: NEGATIVE,
        strength: 0.7,
        guidance_scale: 8.0,
        num_inference_steps: 35,
        model: "stability/sdxl-img2img",
        mode: "img2img",
        input: "selfie",
        requires_source: true,
        source: "neo_tokyo_glitch",
        bfl: None,
        features: &["cyberpunk", "portrait", "glitch"],
    },
    Preset {
        id: "neo_tokyo_chrome",
        label: "Chrome Augment",
        prompt: "cyberpunk portrait of the person with subtle chrome facial implants, glowing \
            circuitry tattoos, neon reflections on wet skin, shallow depth of field",
        negative_prompt: NEGATIVE,
        strength: 0.55,
        guidance_scale: 3.5,
        num_inference_steps: 28,
        model: "bfl/flux-pro-1.1-ultra",
        mode: "img2img",
        input: "selfie",
        requires_source: true,
        source: "neo_tokyo_glitch",
        bfl: Some(BflOptions {
            prompt_upsampling: Some(true),
            safety_tolerance: Some(2),
            output_format: Some("png"),
            raw: Some(true),
            image_prompt_strength: Some(0.4),
            aspect_ratio: Some("9:16"),
        }),
        features: &["cyberpunk", "portrait", "chrome"],
    },
    Preset {
        id: "neo_tokyo_skyline",
        label: "Skyline Wallpaper",
        prompt: "sprawling neo-tokyo skyline at night, megastructures, flying traffic, neon kanji \
            billboards, volumetric fog, ultra wide",
        negative_prompt: NEGATIVE,
        strength: 1.0,
        guidance_scale: 3.5,
        num_inference_steps: 28,
        model: "bfl/flux-pro-1.1",
        mode: "txt2img",
        input: "none",
        requires_source: false,
        source: "neo_tokyo_glitch",
        bfl: Some(BflOptions {
            prompt_upsampling: Some(true),
            safety_tolerance: Some(2),
            output_format: Some("jpeg"),
            ..BflOptions::NONE
        }),
        features: &["cyberpunk", "landscape", "wallpaper"],
    },
];
