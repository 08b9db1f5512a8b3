//! Resolving the fill of an element to a v4p color constant.
use std::{collections::HashMap, sync::LazyLock};

use phf::phf_map;
use regex::Regex;
use svgsnap_ast::Node;

/// Colors with a known v4p constant, keyed by their lowercase CSS spelling
static COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "#ff0" => "V4P_YELLOW",
    "#ffff00" => "V4P_YELLOW",
    "#0f0" => "V4P_GREEN",
    "#00ff00" => "V4P_GREEN",
    "#007f00" => "V4P_OLIVE",
    "#7f7f7f" => "V4P_GRAY",
    "#bfbfbf" => "V4P_SILVER",
    "#00f" => "V4P_BLUE",
    "#0000ff" => "V4P_BLUE",
    "#00007f" => "V4P_VIOLET",
    // no named constant, so the palette index is used
    "#ff7f00" => "120",
    "#7f0000" => "V4P_DARKRED",
    "red" => "V4P_RED",
    "#ff0000" => "V4P_RED",
    "#c3ff00" => "V4P_LIMEGREEN",
};

static STYLE_FILL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fill\s*:\s*([^;]+)").expect("fill pattern is valid"));

/// Returns the fill of an element, from the `fill` attribute or else the `fill` declaration of
/// its `style`. Returns an empty string when there's neither.
pub fn fill(element: Node) -> String {
    let fill = element
        .attribute("fill")
        .filter(|fill| !fill.is_empty())
        .or_else(|| {
            let style = element.attribute("style")?;
            let captures = STYLE_FILL.captures(style)?;
            Some(captures.get(1)?.as_str())
        });
    fill.unwrap_or_default().trim().to_string()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Maps fills to color constants, checking any custom colors before the built-in ones.
pub struct Palette {
    custom: HashMap<String, String>,
}

impl Palette {
    /// Creates a palette with extra colors, which take priority over the built-in colors.
    pub fn new<I, K, V>(custom: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            custom: custom
                .into_iter()
                .map(|(fill, constant)| (fill.as_ref().to_lowercase(), constant.into()))
                .collect(),
        }
    }

    /// Returns the constant for a fill, ignoring case
    pub fn lookup(&self, fill: &str) -> Option<&str> {
        let fill = fill.to_lowercase();
        self.custom
            .get(&fill)
            .map(String::as_str)
            .or_else(|| COLORS.get(fill.as_str()).copied())
    }

    /// Returns the C expression to write for a fill.
    ///
    /// Unknown fills are written as a comment, so the generated call fails to compile until the
    /// color is added.
    pub fn constant(&self, fill: &str) -> String {
        if fill.is_empty() {
            return "/* no fill */".to_string();
        }
        match self.lookup(fill) {
            Some(constant) => constant.to_string(),
            None => {
                log::debug!("color: no constant for fill `{fill}`");
                format!("/* unknown: {fill} */")
            }
        }
    }
}

#[test]
fn constants() {
    let palette = Palette::default();
    assert_eq!(palette.constant("#FF0"), "V4P_YELLOW");
    assert_eq!(palette.constant("red"), "V4P_RED");
    assert_eq!(palette.constant("#ff7f00"), "120");
    assert_eq!(palette.constant("#123456"), "/* unknown: #123456 */");
    assert_eq!(palette.constant(""), "/* no fill */");

    let palette = Palette::new([("#123456", "V4P_CUSTOM"), ("RED", "V4P_CRIMSON")]);
    assert_eq!(palette.constant("#123456"), "V4P_CUSTOM");
    assert_eq!(palette.constant("Red"), "V4P_CRIMSON");
    assert_eq!(palette.constant("#00f"), "V4P_BLUE");
}

#[test]
fn fills() {
    let document = svgsnap_ast::parse::parse(
        r##"<svg>
            <path fill="#00F" style="fill:red"/>
            <path style="stroke:none; fill : #0f0 ;opacity:1"/>
            <path fill="" style="fill:red"/>
            <path style="stroke:#fff"/>
        </svg>"##,
    )
    .unwrap();
    let fills: Vec<_> = document
        .root_element()
        .children()
        .filter(Node::is_element)
        .map(fill)
        .collect();
    assert_eq!(fills, vec!["#00F", "#0f0", "red", ""]);
}
