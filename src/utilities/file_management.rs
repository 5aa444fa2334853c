use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::errors::Result;

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Serializes `data` as pretty json, creating parent directories as needed.
pub fn save_to_file<T: Serialize>(path: &str, data: &T) -> Result<()> {
    let path = Path::new(path);
    create_parent_dirs(path)?;
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    debug!("Saved json to {}", path.display());
    Ok(())
}

pub fn write_bytes_to_file(path: &str, content: &[u8]) -> Result<()> {
    let path = Path::new(path);
    create_parent_dirs(path)?;
    fs::write(path, content)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
