use std::{env, path::PathBuf};

fn main() {
    println!("cargo::rerun-if-changed=cbindgen.toml");
    println!("cargo::rerun-if-changed=src");

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))
        .expect("Unable to read cbindgen.toml");
    cbindgen::generate_with_config(&crate_dir, config)
        .expect("Unable to generate C header")
        .write_to_file(crate_dir.join("include/plus100.h"));
}
