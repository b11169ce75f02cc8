use crate::config::Config;
use anyhow::{anyhow, bail, Result};

pub fn run(force: bool) -> Result<()> {
    let path = Config::path().ok_or_else(|| anyhow!("Failed to determine project directories"))?;
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let written = Config::default()
        .save()
        .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
    println!("{}", written.display());
    Ok(())
}
