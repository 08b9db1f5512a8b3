use std::{io::BufWriter, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use svgsnap_ast::parse::parse;
use svgsnap_emit::{color::Palette, generate, Options};

use crate::{args::RunCommand, config::Config, fs::load_file};

/// The scale given to generated calls when none is configured
pub const DEFAULT_SCALE: f64 = 16.0;

#[derive(Parser, Debug)]
#[clap(
    bin_name = "svg-to-c",
    name = "svg-to-c",
    author,
    version,
    about = "Generates v4p_decodeSVGPath calls for the paths of an SVG document",
    long_about = None
)]
/// Prints a `v4p_decodeSVGPath` call for each path of a document
pub struct SvgToC {
    /// The document to read
    #[clap(value_parser, default_value = "circuit2.svg")]
    pub input: PathBuf,
    /// The scale passed to each call.
    /// Defaults to the configured scale, or 16
    pub scale: Option<f64>,
}

impl RunCommand for SvgToC {
    fn run(self, config: Config) -> anyhow::Result<()> {
        let emit = config.emit.unwrap_or_default();
        let scale = self.scale.or(emit.scale).unwrap_or(DEFAULT_SCALE);
        let palette = Palette::new(emit.colors);

        let source = load_file(&self.input)?;
        let document = parse(&source)
            .with_context(|| format!("Failed to parse {}", self.input.display()))?;

        let name = self.input.display().to_string();
        let options = Options {
            source: &name,
            scale,
            palette: &palette,
        };
        generate(&document, &options, BufWriter::new(std::io::stdout().lock()))
            .context("Failed to write generated code")?;
        Ok(())
    }
}

#[test]
fn parse_args() {
    let args = SvgToC::try_parse_from(["svg-to-c"]).unwrap();
    assert_eq!(args.input, PathBuf::from("circuit2.svg"));
    assert_eq!(args.scale, None);

    let args = SvgToC::try_parse_from(["svg-to-c", "art.svg", "8"]).unwrap();
    assert_eq!(args.input, PathBuf::from("art.svg"));
    assert_eq!(args.scale, Some(8.0));

    assert!(SvgToC::try_parse_from(["svg-to-c", "art.svg", "large"]).is_err());
}
