use anyhow::{Context, Result};
use snapmood_application::PresetSelectionService;
use snapmood_core::preset::PresetFamily;
use snapmood_core::request::SourceImage;
use snapmood_infrastructure::ConfigService;

pub fn run(
    config_service: ConfigService,
    family: PresetFamily,
    id: &str,
    source: Option<String>,
) -> Result<()> {
    let source = source.map(SourceImage::new).transpose()?;
    let service = PresetSelectionService::new(config_service);

    let (selection, request) = service
        .build_request(family, id, source)
        .with_context(|| format!("Failed to build request for {}/{}", family, id))?;

    if selection.is_fallback() {
        eprintln!(
            "'{}' is not a {} preset, using '{}'",
            selection.requested_id, family, selection.preset.id
        );
    }

    println!("{}", serde_json::to_string_pretty(&request.to_json()?)?);
    Ok(())
}
