//! Generates `v4p_decodeSVGPath` calls for the paths of an SVG document.

use clap::Parser;
use svgsnap::{args::RunCommand, commands::SvgToC, config::Config, init_logger};

fn main() -> anyhow::Result<()> {
    init_logger();
    let args = SvgToC::parse();
    let config = Config::load()?;

    args.run(config)
}
