use std::fs;
use std::path::Path;

use image::imageops::FilterType;

use crate::icon;
use crate::logger::log_line;
use crate::manifest::{assign_filenames, load_manifest, save_manifest};

/// Resolution of the master render; every catalog target is scaled down from it.
pub const BASE_SIZE: u32 = 1024;

/// Run the whole export: update the manifest on disk, render the base icon,
/// then write one PNG per distinct target into `out_dir`. Returns the written
/// filenames in output order.
pub fn generate_iconset(
    manifest_path: &Path,
    out_dir: &Path,
) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    fs::create_dir_all(out_dir)
        .map_err(|e| format!("failed to create {}: {}", out_dir.display(), e))?;

    let manifest = load_manifest(manifest_path)?;
    let (updated, targets) = assign_filenames(&manifest)?;
    save_manifest(manifest_path, &updated)?;

    let img = icon::generate_icon(BASE_SIZE);
    log_line(&format!("rendered {}x{} base icon", BASE_SIZE, BASE_SIZE));

    let mut written = Vec::new();
    for target in &targets {
        let resized = if target.px == BASE_SIZE {
            img.clone()
        } else {
            image::imageops::resize(&img, target.px, target.px, FilterType::Lanczos3)
        };
        let path = out_dir.join(&target.filename);
        resized
            .save(&path)
            .map_err(|e| format!("failed to save {}: {}", path.display(), e))?;
        log_line(&format!("wrote {}", path.display()));
        written.push(target.filename.clone());
    }
    Ok(written)
}
