//! Path descriptions for freehand strokes.
//!
//! Strokes are stored as polylines in SVG path syntax: one absolute move
//! followed by absolute line commands, e.g. `M0,0L10,0L10,10`.

use egui::Pos2;
use std::fmt::Write as _;

use crate::error::PathError;

/// Build the path description for a sampled trajectory.
///
/// Fewer than two points do not describe a line, so they yield an empty path.
pub fn path_data(points: &[Pos2]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    if rest.is_empty() {
        return String::new();
    }

    let mut path = format!("M{},{}", first.x, first.y);
    for p in rest {
        // Writing into a String can't fail
        let _ = write!(path, "L{},{}", p.x, p.y);
    }
    path
}

/// Parse a path description back into its subpaths.
///
/// Accepts absolute `M` and `L` commands separated by commas or whitespace,
/// which covers everything [`path_data`] produces plus hand-edited variants.
/// Coordinates after a move without a new command letter are implicit lines.
pub fn parse_path(d: &str) -> Result<Vec<Vec<Pos2>>, PathError> {
    let mut subpaths: Vec<Vec<Pos2>> = Vec::new();
    let mut cursor = Cursor { src: d, pos: 0 };

    loop {
        cursor.skip_separators();
        let Some(c) = cursor.peek() else { break };

        let command = if c.is_ascii_alphabetic() {
            cursor.pos += c.len_utf8();
            c
        } else if subpaths.is_empty() {
            return Err(PathError::MissingMove);
        } else {
            'L'
        };

        let point = match command {
            'M' | 'L' => cursor.point()?,
            other => {
                return Err(PathError::UnsupportedCommand {
                    command: other,
                    offset: cursor.pos - other.len_utf8(),
                });
            }
        };

        match (command, subpaths.last_mut()) {
            ('M', _) => subpaths.push(vec![point]),
            (_, Some(current)) => current.push(point),
            (_, None) => return Err(PathError::MissingMove),
        }
    }

    Ok(subpaths)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c == ',' || c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn point(&mut self) -> Result<Pos2, PathError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Pos2::new(x, y))
    }

    fn number(&mut self) -> Result<f32, PathError> {
        self.skip_separators();
        let start = self.pos;
        let rest = &self.src[start..];

        let mut end = 0;
        let mut seen_exponent = false;
        for (i, c) in rest.char_indices() {
            let accepted = match c {
                '0'..='9' | '.' => true,
                '+' | '-' => i == 0 || rest[..i].ends_with(['e', 'E']),
                'e' | 'E' if !seen_exponent && i > 0 => {
                    seen_exponent = true;
                    true
                }
                _ => false,
            };
            if !accepted {
                break;
            }
            end = i + c.len_utf8();
        }

        let value = rest[..end]
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(PathError::ExpectedNumber { offset: start })?;
        self.pos += end;
        Ok(value)
    }
}
