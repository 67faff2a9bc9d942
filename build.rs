// build.rs

use chrono::Utc;
use std::env;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get the output directory set by Cargo
    let out_dir = env::var("OUT_DIR")?;
    // Construct the path for the file where we'll write the build info
    let dest_path = Path::new(&out_dir).join("build_info.rs");

    // Format the date/time string as desired
    let build_date = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    // Write a Rust constant definition to the file
    fs::write(
        &dest_path,
        format!("pub const BUILD_DATE: &str = \"{}\";", build_date),
    )?;

    // Re-run only when build.rs itself changes
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
