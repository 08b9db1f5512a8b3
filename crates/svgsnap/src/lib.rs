//! SVGSnap is a pair of tools for preparing SVG artwork for the v4p renderer.
//!
//! - `snap-to-grid` rewrites every path with absolute coordinates snapped to a grid
//! - `svg-to-c` generates a `v4p_decodeSVGPath` call for every path
pub mod args;
pub mod commands;
pub mod config;
pub mod fs;

/// Installs the logger, writing warnings and errors to stderr unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
