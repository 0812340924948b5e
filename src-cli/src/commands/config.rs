//! `eros config show|path|init`

use super::write_json;
use anyhow::{bail, Context, Result};
use eros_core::AppConfig;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn show(config: &AppConfig, json: bool) -> Result<()> {
    write_config(&mut io::stdout().lock(), config, json)
}

pub fn path(json: bool) -> Result<()> {
    let path = AppConfig::config_path().context("failed to locate config directory")?;
    let mut out = io::stdout().lock();
    if json {
        write_json(&mut out, &serde_json::json!({ "path": path }))?;
    } else {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

/// Write the effective configuration to the config file.
pub fn init(config: &AppConfig, force: bool, json: bool) -> Result<()> {
    let path = AppConfig::config_path().context("failed to locate config directory")?;
    ensure_writable(&path, force)?;
    config.save().context("failed to write configuration")?;
    info!(path = %path.display(), "configuration written");

    let mut out = io::stdout().lock();
    if json {
        write_json(&mut out, &serde_json::json!({ "path": path }))?;
    } else {
        writeln!(out, "Configuração salva em {}", path.display())?;
    }
    Ok(())
}

pub(crate) fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Ok(())
}

pub(crate) fn write_config<W: Write + ?Sized>(
    out: &mut W,
    config: &AppConfig,
    json: bool,
) -> Result<()> {
    if json {
        return write_json(out, config);
    }
    let text = toml::to_string_pretty(config).context("failed to render configuration")?;
    write!(out, "{text}")?;
    Ok(())
}
