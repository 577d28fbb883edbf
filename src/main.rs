use std::path::Path;

use clockicon::iconset::generate_iconset;
use clockicon::logger::log_error;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Everything is anchored to the crate root, no flags to pass.
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let iconset_dir = root.join("assets").join("AppIcon.appiconset");
    let manifest_path = iconset_dir.join("Contents.json");

    match generate_iconset(&manifest_path, &iconset_dir) {
        Ok(written) => {
            println!("Generated: {}", written.join(", "));
            Ok(())
        }
        Err(e) => {
            log_error("iconset generation failed", e.as_ref());
            Err(e)
        }
    }
}
