use crate::{
    command::{Absolute, Token, ID},
    convert::Error,
    geometry::{Cursor, Point},
    Path,
};

/// Convert path data tokens to absolute commands
///
/// `H` and `V` become lines and implicit `M` arguments become lines. Arcs and smooth quadratics
/// are kept as written, without resolving their coordinates or moving the cursor.
///
/// # Errors
/// If a command's coordinate pairs can't be split into whole groups of its arguments
pub fn absolute(tokens: Vec<Token>) -> Result<Path, Error> {
    let token_count = tokens.len();
    let mut converter = Converter::default();
    for token in tokens {
        converter.push(token)?;
    }
    log::debug!(
        "convert::absolute: resolved {token_count} tokens into {} commands",
        converter.commands.len()
    );
    Ok(Path(converter.commands))
}

#[derive(Default)]
struct Converter {
    cursor: Cursor,
    commands: Vec<Absolute>,
}

impl Converter {
    /// Returns the point that the command's coordinates are relative to
    fn base(&self, id: ID) -> Point {
        if id.is_by() {
            self.cursor.current
        } else {
            Point::ORIGIN
        }
    }

    fn emit(&mut self, command: Absolute) {
        if let Some(end) = command.end() {
            self.cursor.current = end.into();
        }
        self.commands.push(command);
    }

    fn push(&mut self, token: Token) -> Result<(), Error> {
        let Token { id, args } = token;
        let pairs: Vec<Point> = args
            .chunks_exact(2)
            .map(|pair| Point([pair[0], pair[1]]))
            .collect();

        match id {
            ID::MoveTo | ID::MoveBy => {
                let Some((first, rest)) = pairs.split_first() else {
                    return Err(incomplete(id, 1, 0));
                };
                let point = *first + self.base(id);
                self.cursor.move_to(point);
                self.emit(Absolute::MoveTo(point.0));
                for pair in rest {
                    self.emit(Absolute::LineTo((*pair + self.base(id)).0));
                }
            }
            ID::LineTo | ID::LineBy => {
                for pair in pairs {
                    self.emit(Absolute::LineTo((pair + self.base(id)).0));
                }
            }
            ID::HorizontalLineTo | ID::HorizontalLineBy => {
                for x in args {
                    let x = x + self.base(id).x();
                    self.emit(Absolute::LineTo([x, self.cursor.current.y()]));
                }
            }
            ID::VerticalLineTo | ID::VerticalLineBy => {
                for y in args {
                    let y = y + self.base(id).y();
                    self.emit(Absolute::LineTo([self.cursor.current.x(), y]));
                }
            }
            ID::CubicBezierTo | ID::CubicBezierBy => {
                for group in groups(id, &pairs, 3)? {
                    let base = self.base(id);
                    let [c1, c2, end] = [group[0] + base, group[1] + base, group[2] + base];
                    self.emit(Absolute::CubicBezier([
                        c1.x(),
                        c1.y(),
                        c2.x(),
                        c2.y(),
                        end.x(),
                        end.y(),
                    ]));
                }
            }
            ID::SmoothBezierTo | ID::SmoothBezierBy => {
                for group in groups(id, &pairs, 2)? {
                    let [c2, end] = control_and_end(group, self.base(id));
                    self.emit(Absolute::SmoothCubic([c2.x(), c2.y(), end.x(), end.y()]));
                }
            }
            ID::QuadraticBezierTo | ID::QuadraticBezierBy => {
                for group in groups(id, &pairs, 2)? {
                    let [c, end] = control_and_end(group, self.base(id));
                    self.emit(Absolute::QuadraticBezier([c.x(), c.y(), end.x(), end.y()]));
                }
            }
            ID::ClosePath => {
                self.commands.push(Absolute::ClosePath);
                self.cursor.close();
            }
            ID::SmoothQuadraticBezierTo
            | ID::SmoothQuadraticBezierBy
            | ID::ArcTo
            | ID::ArcBy => {
                self.commands.push(Absolute::PassThrough { id, args });
            }
        }
        Ok(())
    }
}

fn control_and_end(group: &[Point], base: Point) -> [Point; 2] {
    [group[0] + base, group[1] + base]
}

fn groups(id: ID, pairs: &[Point], group: usize) -> Result<std::slice::ChunksExact<'_, Point>, Error> {
    if pairs.len() % group == 0 {
        Ok(pairs.chunks_exact(group))
    } else {
        Err(incomplete(id, group, pairs.len()))
    }
}

fn incomplete(command: ID, group: usize, received: usize) -> Error {
    Error::IncompleteArguments {
        command,
        group,
        received,
    }
}

#[cfg(test)]
fn convert(definition: &str) -> Result<Vec<Absolute>, Error> {
    absolute(crate::parser::tokenize(definition)).map(|path| path.0)
}

#[test]
fn horizontal_and_vertical() {
    use pretty_assertions::assert_eq;

    let commands = convert("M 3 7 H 15").unwrap();
    assert_eq!(commands[1], Absolute::LineTo([15.0, 7.0]));

    let commands = convert("M 3 7 h 5").unwrap();
    assert_eq!(commands[1], Absolute::LineTo([8.0, 7.0]));

    let commands = convert("M 3 7 V 1 2 v 3").unwrap();
    assert_eq!(
        commands[1..].to_vec(),
        vec![
            Absolute::LineTo([3.0, 1.0]),
            Absolute::LineTo([3.0, 2.0]),
            Absolute::LineTo([3.0, 5.0]),
        ]
    );
}

#[test]
fn close_path_returns_to_start() {
    use pretty_assertions::assert_eq;

    let commands = convert("M 0 0 L 5 5 Z l 1 1").unwrap();
    assert_eq!(
        commands,
        vec![
            Absolute::MoveTo([0.0, 0.0]),
            Absolute::LineTo([5.0, 5.0]),
            Absolute::ClosePath,
            Absolute::LineTo([1.0, 1.0]),
        ]
    );

    // a relative move after a close is relative to the subpath start
    let commands = convert("M 10 10 L 20 20 Z m 5 5").unwrap();
    assert_eq!(commands[3], Absolute::MoveTo([15.0, 15.0]));
}

#[test]
fn relative_matches_absolute() {
    use pretty_assertions::assert_eq;

    assert_eq!(convert("M 10 10 L 20 20"), convert("M 10 10 l 10 10"));
    assert_eq!(
        convert("M 10 10 C 11 11 12 12 13 13 S 20 20 30 30 Q 31 31 32 32 Z"),
        convert("m 10 10 c 1 1 2 2 3 3 s 7 7 17 17 q 1 1 2 2 z"),
    );
    // implicit pairs after a move are lines
    assert_eq!(convert("M 1 1 2 2 3 3"), convert("m 1 1 1 1 1 1"));
}

#[test]
fn move_with_implicit_lines() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        convert("m 1 1 1 1").unwrap(),
        vec![Absolute::MoveTo([1.0, 1.0]), Absolute::LineTo([2.0, 2.0])]
    );
    // unpaired numbers are dropped
    assert_eq!(convert("M 1 2 3").unwrap(), vec![Absolute::MoveTo([1.0, 2.0])]);
}

#[test]
fn cubic_groups() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        convert("M 1 1 c 1 1 2 2 3 3 1 0 2 0 3 0").unwrap(),
        vec![
            Absolute::MoveTo([1.0, 1.0]),
            Absolute::CubicBezier([2.0, 2.0, 3.0, 3.0, 4.0, 4.0]),
            Absolute::CubicBezier([5.0, 4.0, 6.0, 4.0, 7.0, 4.0]),
        ]
    );
}

#[test]
fn pass_through() {
    use pretty_assertions::assert_eq;

    let commands = convert("M 2 2 a 1 1 0 0 1 5 5 t 1 1 l 1 1").unwrap();
    assert_eq!(
        commands[1],
        Absolute::PassThrough {
            id: ID::ArcBy,
            args: vec![1.0, 1.0, 0.0, 0.0, 1.0, 5.0, 5.0]
        }
    );
    assert_eq!(
        commands[2],
        Absolute::PassThrough {
            id: ID::SmoothQuadraticBezierBy,
            args: vec![1.0, 1.0]
        }
    );
    // cursor isn't moved by unresolved commands
    assert_eq!(commands[3], Absolute::LineTo([3.0, 3.0]));
}

#[test]
fn incomplete_arguments() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        convert("M 0 0 C 1 1 2 2"),
        Err(Error::IncompleteArguments {
            command: ID::CubicBezierTo,
            group: 3,
            received: 2
        })
    );
    assert_eq!(
        convert("M 0 0 q 1 1"),
        Err(Error::IncompleteArguments {
            command: ID::QuadraticBezierBy,
            group: 2,
            received: 1
        })
    );
    assert!(convert("M").is_err());
    assert!(convert("m 1").is_err());
    assert_eq!(convert(""), Ok(vec![]));
}
