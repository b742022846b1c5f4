//! Ghibli reaction presets.
//!
//! All variants run on FLUX 1.1 Ultra in image-prompt mode. `strength` is
//! kept below 0.6 so the subject stays recognizable.

use super::model::{BflOptions, Preset};

const MODEL: &str = "bfl/flux-pro-1.1-ultra";

const NEGATIVE: &str = "photorealistic, 3d render, harsh shadows, extra fingers, deformed face, \
    text, watermark, logo, lowres, blurry";

const BFL: BflOptions = BflOptions {
    prompt_upsampling: Some(false),
    safety_tolerance: Some(2),
    output_format: Some("jpeg"),
    raw: Some(false),
    image_prompt_strength: Some(0.35),
    aspect_ratio: Some("3:4"),
};

pub(crate) const PRESETS: &[Preset] = &[
    Preset {
        id: "ghibli_smile",
        label: "Warm Smile",
        prompt: "hand-painted anime portrait of the person, gentle warm smile, soft watercolor \
            sky, summer meadow, cel shading, studio ghibli inspired, golden afternoon light",
        negative_prompt: NEGATIVE,
        strength: 0.5,
        guidance_scale: 3.5,
        num_inference_steps: 28,
        model: MODEL,
        mode: "img2img",
        input: "selfie",
        requires_source: true,
        source: "ghibli_reaction",
        bfl: Some(BFL),
        features: &["anime", "portrait", "happy"],
    },
    Preset {
        id: "ghibli_tears",
        label: "Tearful Joy",
        prompt: "hand-painted anime portrait of the person, glistening tears of joy, rosy cheeks, \
            drifting petals, pastel evening sky, cel shading, studio ghibli inspired",
        negative_prompt: NEGATIVE,
        strength: 0.45,
        guidance_scale: 3.5,
        num_inference_steps: 28,
        model: MODEL,
        mode: "img2img",
        input: "selfie",
        requires_source: true,
        source: "ghibli_reaction",
        bfl: Some(BFL),
        features: &["anime", "portrait", "sad"],
    },
    Preset {
        id: "ghibli_surprise",
        label: "Wide-Eyed Surprise",
        prompt: "hand-painted anime portrait of the person, wide sparkling eyes, mouth open in \
            surprise, wind-swept hair, floating dust spirits, cel shading, studio ghibli inspired",
        negative_prompt: NEGATIVE,
        strength: 0.55,
        guidance_scale: 4.0,
        num_inference_steps: 28,
        model: MODEL,
        mode: "img2img",
        input: "selfie",
        requires_source: true,
        source: "ghibli_reaction",
        bfl: Some(BFL),
        features: &["anime", "portrait", "surprised"],
    },
    Preset {
        id: "ghibli_grumpy",
        label: "Grumpy Pout",
        prompt: "hand-painted anime portrait of the person, puffed cheeks and exaggerated pout, \
            arms crossed, rainy village street, cel shading, studio ghibli inspired",
        negative_prompt: NEGATIVE,
        strength: 0.5,
        guidance_scale: 4.0,
        num_inference_steps: 28,
        model: MODEL,
        mode: "img2img",
        input: "selfie",
        requires_source: true,
        source: "ghibli_reaction",
        bfl: Some(BFL),
        features: &["anime", "portrait", "angry"],
    },
    Preset {
        id: "ghibli_daydream",
        label: "Daydream",
        prompt: "hand-painted anime scene, dreamy gaze toward towering cumulus clouds, grassy \
            hilltop, soft breeze, cel shading, studio ghibli inspired",
        negative_prompt: NEGATIVE,
        strength: 0.58,
        guidance_scale: 3.0,
        num_inference_steps: 30,
        model: MODEL,
        mode: "img2img",
        input: "selfie",
        requires_source: true,
        source: "ghibli_reaction",
        bfl: Some(BflOptions {
            aspect_ratio: Some("16:9"),
            ..BFL
        }),
        features: &["anime", "landscape", "calm"],
    },
];
