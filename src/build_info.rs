//! Version details baked in at compile time by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The line printed by `delve --version`.
pub fn version_line() -> String {
    format!("delve {PKG_VERSION} ({BUILD_DATE}, {BUILD_COMMIT})")
}
