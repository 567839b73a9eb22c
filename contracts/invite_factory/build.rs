use std::{env, path::PathBuf};

// The factory clone test deploys real collection code, so it is only compiled
// once the wasm artifact exists (`make build`).
fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rustc-check-cfg=cfg(collection_wasm)");

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let wasm = PathBuf::from(manifest_dir)
        .join("../../target/wasm32v1-none/release/invite_factory.wasm");
    println!("cargo::rerun-if-changed={}", wasm.display());
    if wasm.exists() {
        println!("cargo::rustc-cfg=collection_wasm");
    }
}
