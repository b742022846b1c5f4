use anyhow::Result;
use snapmood_core::SnapmoodError;
use snapmood_core::config::RootConfig;
use snapmood_core::preset::{Preset, PresetFamily, get_preset, is_preset, presets, with_feature};
use snapmood_infrastructure::ConfigService;

/// Families to list: the explicit one, every family with `--all`, otherwise
/// the configured default family.
fn families_to_list(
    config: &RootConfig,
    family: Option<PresetFamily>,
    all: bool,
) -> Vec<PresetFamily> {
    match (family, all) {
        (Some(family), _) => vec![family],
        (None, true) => PresetFamily::all().collect(),
        (None, false) => vec![config.presets.default_family],
    }
}

pub fn list(
    config_service: &ConfigService,
    family: Option<PresetFamily>,
    all: bool,
    feature: Option<&str>,
) -> Result<()> {
    let config = config_service.get_config()?;

    for family in families_to_list(&config, family, all) {
        println!("{} ({})", family.display_name(), family);
        let entries: Vec<&Preset> = match feature {
            Some(tag) => with_feature(family, tag).collect(),
            None => presets(family).iter().collect(),
        };
        if entries.is_empty() {
            println!("  (none)");
        }
        for preset in entries {
            println!(
                "  {:<20} {:<20} strength={:<5} {}",
                preset.id, preset.label, preset.strength, preset.model
            );
        }
    }
    Ok(())
}

pub fn show(family: PresetFamily, id: &str, json: bool) -> Result<()> {
    let Some(preset) = get_preset(family, id) else {
        return Err(SnapmoodError::not_found("preset", format!("{family}/{id}")).into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(preset)?);
        return Ok(());
    }

    println!("{} ({})", preset.label, preset.id);
    println!("  model:            {} ({:?})", preset.model, preset.backend());
    println!("  mode/input:       {} / {}", preset.mode, preset.input);
    println!("  requires source:  {}", preset.requires_source);
    println!("  strength:         {}", preset.strength);
    println!("  guidance scale:   {}", preset.guidance_scale);
    println!("  inference steps:  {}", preset.num_inference_steps);
    println!("  features:         {}", preset.features.join(", "));
    println!("  prompt:           {}", preset.prompt);
    println!("  negative prompt:  {}", preset.negative_prompt);
    if let Some(options) = preset.backend_options() {
        println!("  backend options:  {}", serde_json::to_string(options)?);
    }
    Ok(())
}

pub fn check(family: PresetFamily, id: &str) {
    println!("{}", is_preset(family, id));
}
