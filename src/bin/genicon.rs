use std::fs;
use std::path::Path;

use clockicon::icon;
use clockicon::iconset::BASE_SIZE;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let img = icon::generate_icon(BASE_SIZE);
    let out_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    fs::create_dir_all(&out_dir)?;
    let out = out_dir.join(format!("icon_{}.png", BASE_SIZE));
    img.save(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
