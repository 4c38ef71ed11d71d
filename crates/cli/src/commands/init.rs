use std::path::Path;

use anyhow::Result;
use dacg_catalog::config::{Config, CONFIG_FILE};

pub fn run() -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        eprintln!("Config file already exists: {}", path.display());
        return Ok(());
    }
    std::fs::write(path, Config::default_toml())?;
    println!("Created {}", path.display());
    Ok(())
}
