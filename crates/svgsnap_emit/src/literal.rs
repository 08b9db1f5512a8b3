//! Writing path data as C string literals
use itertools::Itertools as _;

/// The most characters of path data written on one line
pub const WIDTH: usize = 70;
/// The indentation of continued lines, matching the arguments of the generated call
pub const INDENT: &str = "        ";

/// Formats path data as one or more adjacent C string literals.
///
/// Whitespace is collapsed first. Data longer than [`WIDTH`] is broken at the last space that
/// fits, and the space is kept at the end of the literal before the break. When a line has no
/// space to break at it's cut at [`WIDTH`] characters with nothing added, so the literals
/// concatenate back to the same data. A space right after the cut ends that line instead of
/// starting the next.
///
/// # Example
///
/// ```
/// use svgsnap_emit::literal::wrap;
///
/// assert_eq!(wrap("M 0   0\n L 1 1"), r#""M 0 0 L 1 1""#);
/// ```
pub fn wrap(d: &str) -> String {
    let d = d.split_whitespace().join(" ");
    if d.chars().count() <= WIDTH {
        return format!("\"{d}\"");
    }

    let mut lines = vec![];
    let mut rest = d.as_str();
    while rest.chars().count() > WIDTH {
        let limit = rest
            .char_indices()
            .nth(WIDTH)
            .map_or(rest.len(), |(i, _)| i);
        let cut = rest[..limit]
            .rfind(' ')
            .or_else(|| rest[limit..].starts_with(' ').then_some(limit));
        if let Some(cut) = cut {
            lines.push(format!("\"{} \"", &rest[..cut]));
            rest = &rest[cut + 1..];
        } else {
            lines.push(format!("\"{}\"", &rest[..limit]));
            rest = &rest[limit..];
        }
    }
    lines.push(format!("\"{rest}\""));
    lines.join(&format!("\n{INDENT}"))
}

#[test]
fn wrap_short() {
    assert_eq!(wrap("  M 0 0  "), r#""M 0 0""#);
    assert_eq!(wrap(&"1".repeat(WIDTH)), format!("\"{}\"", "1".repeat(WIDTH)));
}

#[test]
fn wrap_long() {
    let d = "M 10 10 L 20 20 L 30 30 L 40 40 L 50 50 L 60 60 L 70 70 L 80 80 L 90 90 L 100 100 Z";
    insta::assert_snapshot!(wrap(d), @r#"
    "M 10 10 L 20 20 L 30 30 L 40 40 L 50 50 L 60 60 L 70 70 L 80 80 L 90 "
            "90 L 100 100 Z"
    "#);

    let line = "L 1 1 ".repeat(30);
    for literal in wrap(&line).split(&format!("\n{INDENT}")) {
        assert!(literal.len() <= WIDTH + 3, "{literal} is too long");
    }
}

#[test]
fn wrap_hard_cut() {
    let d = format!("M{}", "0,".repeat(50));
    let wrapped = wrap(&d);
    let lines: Vec<_> = wrapped.split(&format!("\n{INDENT}")).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), WIDTH + 2);

    let rejoined: String = lines.iter().map(|line| line.trim_matches('"')).collect();
    assert_eq!(rejoined, d);
}

#[test]
fn wrap_space_after_hard_cut() {
    let d = format!("{} {}", "A".repeat(WIDTH), "B".repeat(75));
    let wrapped = wrap(&d);
    let lines: Vec<_> = wrapped.split(&format!("\n{INDENT}")).collect();
    assert_eq!(
        lines,
        vec![
            format!("\"{} \"", "A".repeat(WIDTH)),
            format!("\"{}\"", "B".repeat(WIDTH)),
            "\"BBBBB\"".to_string(),
        ]
    );

    let rejoined: String = lines.iter().map(|line| line.trim_matches('"')).collect();
    assert_eq!(rejoined, d);
}
