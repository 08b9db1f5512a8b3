//! Reading and writing documents on disk
use std::{
    fs::{create_dir_all, File},
    io::BufWriter,
    path::Path,
};

use anyhow::Context as _;
use svgsnap_ast::{edit::Edits, serialize::serialize_into, xmlwriter::Options, Document};

/// Reads the source of the document at `path`
///
/// # Errors
/// If the file can't be read
pub fn load_file(path: &Path) -> anyhow::Result<String> {
    svgsnap_ast::parse::load(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes the document to `path` with the edits applied, creating any missing directories.
///
/// # Errors
/// If the file can't be created or written to
pub fn write_file(path: &Path, document: &Document, edits: &Edits) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let sink = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serialize_into(document, edits, BufWriter::new(sink), Options::default())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[test]
fn write_and_load() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("svgsnap-fs-{}", std::process::id()));
    let path = dir.join("nested").join("out.svg");

    let document = svgsnap_ast::parse::parse("<svg><path d=\"m 1 1\"/></svg>")?;
    let path_element = document.root_element().first_element_child().unwrap();
    let mut edits = Edits::default();
    edits.set_attribute(path_element, "d", "M 1 1".to_string());

    write_file(&path, &document, &edits)?;
    assert_eq!(
        load_file(&path)?,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg><path d=\"M 1 1\"/></svg>"
    );

    assert!(load_file(&dir.join("missing.svg")).is_err());
    std::fs::remove_dir_all(dir)?;
    Ok(())
}
