//! Fingerprints the stylesheet at build time.
//!
//! `static/css/main.css` is hashed, copied into `static/css/derived/` with
//! the hash in its filename, and the hash is exported as `CSS_HASH` for
//! `env!` in the template filters. The linked filename changes whenever the
//! content does.

use std::path::PathBuf;
use std::{env, fs};

use sha2::{Digest, Sha256};

const HASH_PREFIX_LEN: usize = 12;

fn main() {
    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"),
    );
    let css_path = manifest_dir.join("static/css/main.css");
    println!("cargo:rerun-if-changed={}", css_path.display());

    let Ok(css) = fs::read(&css_path) else {
        // First build may run before the stylesheet exists.
        println!("cargo:warning=missing {}", css_path.display());
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let digest = format!("{:x}", Sha256::digest(&css));
    let fingerprint = digest.get(..HASH_PREFIX_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={fingerprint}");

    let derived_dir = manifest_dir.join("static/css/derived");
    fs::create_dir_all(&derived_dir).expect("create derived CSS directory");
    fs::copy(&css_path, derived_dir.join(format!("main.{fingerprint}.css")))
        .expect("copy fingerprinted CSS");
}
