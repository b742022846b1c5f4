use snapmood_core::preset::{PresetFamily, get_preset, ids, is_preset, presets};
use snapmood_core::request::{GenerationRequest, SourceImage};

#[test]
fn test_every_preset_is_found_by_its_id() {
    for family in PresetFamily::all() {
        for preset in presets(family) {
            let found = get_preset(family, preset.id).expect("preset should be found");
            assert_eq!(found, preset);
        }
    }
}

#[test]
fn test_is_preset_agrees_with_get_preset() {
    let probes = ["", "nonexistent-id", "ghibli_tears", "neo_tokyo_base", "emotion_joy"];
    for family in PresetFamily::all() {
        for id in probes.iter().copied().chain(ids(family)) {
            assert_eq!(
                is_preset(family, id),
                get_preset(family, id).is_some(),
                "disagreement for {family}/{id}"
            );
        }
    }
}

#[test]
fn test_family_parsed_from_name_resolves_preset() {
    let family = PresetFamily::parse("ghibli").unwrap();
    let preset = get_preset(family, "ghibli_tears").unwrap();
    assert_eq!(preset.strength, 0.45);
    assert_eq!(preset.model, "bfl/flux-pro-1.1-ultra");

    let family = PresetFamily::parse("neoTokyo").unwrap();
    assert!(is_preset(family, "neo_tokyo_base"));
    assert!(!is_preset(family, "neo_tokyo_unknown"));
}

#[test]
fn test_every_preset_builds_a_request_with_a_source() {
    for family in PresetFamily::all() {
        for preset in presets(family) {
            let source = SourceImage::new("file:///tmp/in.jpg").unwrap();
            let request = GenerationRequest::from_preset(preset, Some(source)).unwrap();
            assert_eq!(request.preset_id, preset.id);
            assert_eq!(request.prompt, preset.prompt);
        }
    }
}
