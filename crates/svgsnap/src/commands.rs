//! Commands that can be executed by svgsnap
mod emit;
mod snap;

pub use emit::SvgToC;
pub use snap::{snap_document, SnapToGrid};
