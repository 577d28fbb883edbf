use std::fs;
use std::path::Path;

use crate::models::{ExportTarget, Manifest};

/// Leading integer of a "WxH" size string, e.g. "16x16" -> 16.
pub fn parse_point_size(size: &str) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
    let lead = size.split('x').next().unwrap_or("");
    lead.trim()
        .parse::<u32>()
        .map_err(|_| format!("bad size '{}': expected WxH", size).into())
}

/// Scale factor of an "Nx" string, e.g. "2x" -> 2.
pub fn parse_scale(scale: &str) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
    let lead = scale
        .strip_suffix('x')
        .ok_or_else(|| format!("bad scale '{}': expected Nx", scale))?;
    lead.trim()
        .parse::<u32>()
        .map_err(|_| format!("bad scale '{}': expected Nx", scale).into())
}

/// Catalog naming rule for one icon variant.
pub fn icon_filename(points: u32, scale: u32) -> String {
    format!("appicon_{}x{}@{}x.png", points, points, scale)
}

pub fn load_manifest(path: &Path) -> Result<Manifest, Box<dyn std::error::Error + Send + Sync>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let manifest: Manifest = serde_json::from_str(&raw)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
    Ok(manifest)
}

/// Write the manifest back as pretty JSON (2-space indent) with a trailing newline.
pub fn save_manifest(
    path: &Path,
    manifest: &Manifest,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut text = serde_json::to_string_pretty(manifest)?;
    text.push('\n');
    fs::write(path, text).map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
    Ok(())
}

/// Fill in the derived filename on every entry and collect the distinct files
/// to produce, sorted by pixel size then filename. The input manifest is left
/// untouched; callers persist the returned copy.
pub fn assign_filenames(
    manifest: &Manifest,
) -> Result<(Manifest, Vec<ExportTarget>), Box<dyn std::error::Error + Send + Sync>> {
    let mut updated = manifest.clone();
    let mut targets = Vec::new();
    for entry in &mut updated.images {
        let points = parse_point_size(&entry.size)?;
        let scale = parse_scale(&entry.scale)?;
        let filename = icon_filename(points, scale);
        entry.filename = Some(filename.clone());
        targets.push(ExportTarget {
            px: points * scale,
            filename,
        });
    }
    targets.sort();
    targets.dedup();
    Ok((updated, targets))
}
