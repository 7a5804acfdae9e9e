//! Embeds the commit hash and build date so `delve --version` can report them.

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

/// Short hash of HEAD, or None outside a git checkout.
fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

/// Environment override first, then the fallback.
fn stamp(var: &str, fallback: impl FnOnce() -> String) -> String {
    println!("cargo:rerun-if-env-changed={var}");
    env::var(var).unwrap_or_else(|_| fallback())
}

fn main() -> io::Result<()> {
    let commit = stamp("BUILD_COMMIT", || {
        git_short_hash().unwrap_or_else(|| "unknown".to_string())
    });
    let date = stamp("BUILD_DATE", || {
        chrono::Utc::now().format("%Y-%m-%d").to_string()
    });

    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {commit:?};\npub const BUILD_DATE: &str = {date:?};\n"
    );
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    Ok(())
}
