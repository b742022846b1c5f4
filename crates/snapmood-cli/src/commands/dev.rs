use anyhow::{Context, Result};
use snapmood_infrastructure::{ConfigService, DevSessionSeeder};

/// The dev session lives next to the config file in use.
fn seeder(config_service: &ConfigService) -> Result<DevSessionSeeder> {
    let config = config_service.get_config()?;
    let config_path = config_service.config_path()?;
    let base_dir = config_path
        .parent()
        .context("Config path has no parent directory")?;
    Ok(DevSessionSeeder::with_base_dir(Some(base_dir), &config)?)
}

pub fn seed(config_service: &ConfigService, email: &str) -> Result<()> {
    let session = seeder(config_service)?.seed_email(email)?;
    println!(
        "Seeded session for {} ({} credits)",
        session.display_name, session.credits
    );
    println!("user_id: {}", session.user_id);
    Ok(())
}

pub fn show(config_service: &ConfigService) -> Result<()> {
    match seeder(config_service)?.load()? {
        Some(session) => print!("{}", toml::to_string_pretty(&session)?),
        None => println!("No dev session"),
    }
    Ok(())
}

pub fn clear(config_service: &ConfigService) -> Result<()> {
    if seeder(config_service)?.clear()? {
        println!("Dev session removed");
    } else {
        println!("No dev session");
    }
    Ok(())
}
