use anyhow::{Result, bail};
use snapmood_infrastructure::ConfigService;

pub fn show(config_service: &ConfigService) -> Result<()> {
    let config = config_service.get_config()?;
    println!("# {}", config_service.config_path()?.display());
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn validate(config_service: &ConfigService) -> Result<()> {
    let problems = config_service.get_config()?.validate();
    if problems.is_empty() {
        println!("Configuration OK");
        return Ok(());
    }
    for problem in &problems {
        println!("  - {}", problem);
    }
    bail!("{} configuration problem(s)", problems.len())
}
