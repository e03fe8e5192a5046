use std::env;
use std::fs;
use std::path::Path;

/// Copies the workspace config.toml next to the backend binary
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory")
        .to_path_buf();

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    let dest_config = target_dir.join("config.toml");

    if !source_config.exists() {
        println!("cargo:warning=config.toml not found, the embedded default config will be used");
        return;
    }

    fs::copy(&source_config, &dest_config)
        .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
}
