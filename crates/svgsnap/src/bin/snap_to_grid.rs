//! Rewrites the paths of an SVG document with absolute coordinates snapped to a grid.

use clap::Parser;
use svgsnap::{args::RunCommand, commands::SnapToGrid, config::Config, init_logger};

fn main() -> anyhow::Result<()> {
    init_logger();
    let args = SnapToGrid::parse();
    let config = Config::load()?;

    args.run(config)
}
