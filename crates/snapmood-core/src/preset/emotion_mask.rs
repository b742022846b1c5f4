//! Emotion mask presets.
//!
//! One preset per base emotion. These use an identity-preserving model on
//! Replicate, so no BFL options are attached.

use super::model::Preset;

const MODEL: &str = "replicate/instant-id-photomaker";

const NEGATIVE: &str = "neutral expression, closed eyes, extra faces, deformed mouth, \
    asymmetrical eyes, text, watermark, lowres, blurry";

pub(crate) const PRESETS: &[Preset] = &[
    Preset {
        id: "emotion_joy",
        label: "Joy",
        prompt: "expressive portrait of the person, beaming laugh, crinkled eyes, theatrical \
            golden mask motifs painted across the face, warm studio light",
        negative_prompt: NEGATIVE,
        strength: 0.65,
        guidance_scale: 5.0,
        num_inference_steps: 30,
        model: MODEL,
        mode: "img2img",
        input: "face",
        requires_source: true,
        source: "emotion_mask",
        bfl: None,
        features: &["mask", "portrait", "happy"],
    },
    Preset {
        id: "emotion_sorrow",
        label: "Sorrow",
        prompt: "expressive portrait of the person, downcast eyes, single tear, indigo mask motifs \
            painted across the face, cold rim light",
        negative_prompt: NEGATIVE,
        strength: 0.65,
        guidance_scale: 5.0,
        num_inference_steps: 30,
        model: MODEL,
        mode: "img2img",
        input: "face",
        requires_source: true,
        source: "emotion_mask",
        bfl: None,
        features: &["mask", "portrait", "sad"],
    },
    Preset {
        id: "emotion_rage",
        label: "Rage",
        prompt: "expressive portrait of the person, furrowed brow, bared teeth, crimson oni mask \
            motifs painted across the face, dramatic red key light",
        negative_prompt: NEGATIVE,
        strength: 0.7,
        guidance_scale: 5.5,
        num_inference_steps: 30,
        model: MODEL,
        mode: "img2img",
        input: "face",
        requires_source: true,
        source: "emotion_mask",
        bfl: None,
        features: &["mask", "portrait", "angry"],
    },
    Preset {
        id: "emotion_fear",
        label: "Fear",
        prompt: "expressive portrait of the person, wide terrified eyes, pale green mask motifs \
            painted across the face, flickering underlight",
        negative_prompt: NEGATIVE,
        strength: 0.7,
        guidance_scale: 5.5,
        num_inference_steps: 30,
        model: MODEL,
        mode: "img2img",
        input: "face",
        requires_source: true,
        source: "emotion_mask",
        bfl: None,
        features: &["mask", "portrait", "scared"],
    },
    Preset {
        id: "emotion_wonder",
        label: "Wonder",
        prompt: "expressive portrait of the person, awestruck open smile, iridescent star mask \
            motifs painted across the face, soft cosmic glow",
        negative_prompt: NEGATIVE,
        strength: 0.6,
        guidance_scale: 5.0,
        num_inference_steps: 30,
        model: MODEL,
        mode: "img2img",
        input: "face",
        requires_source: true,
        source: "emotion_mask",
        bfl: None,
        features: &["mask", "portrait", "surprised"],
    },
];
