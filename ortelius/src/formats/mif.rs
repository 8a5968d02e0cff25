//! MapInfo interchange decoding (`.mif` geometry with `.mid` attributes).
//!
//! The interchange format is the text rendition of a MapInfo table. The
//! header declares the attribute columns and the `.mid` delimiter; the DATA
//! section lists one geometry entry per feature. Styling clauses (PEN,
//! BRUSH, SYMBOL, SMOOTH, CENTER) carry no geometry and are skipped.

use ortelius_types::PlanePoint;

use super::shp::ShapeParts;
use crate::error::Error;
use crate::feature::Field;

/// Result of decoding a `.mif` file.
pub struct MifContent {
    /// Column names declared in the header, in order.
    pub columns: Vec<String>,
    /// Attribute delimiter used by the sibling `.mid` file.
    pub delimiter: char,
    /// Geometry entries in file order, one point list per section.
    pub shapes: Vec<ShapeParts>,
}

struct Lines<'a> {
    lines: Vec<&'a str>,
    next: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().map(str::trim).collect(),
            next: 0,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        while self.next < self.lines.len() {
            let line = self.lines[self.next];
            self.next += 1;
            if !line.is_empty() {
                return Some(line);
            }
        }
        None
    }

    fn read_count(&mut self) -> Result<usize, Error> {
        let line = self
            .next_line()
            .ok_or_else(|| decoding("unexpected end of mif geometry"))?;
        parse_count(line.split_whitespace().next())
    }

    fn read_points(&mut self, count: usize) -> Result<Vec<PlanePoint>, Error> {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let line = self
                .next_line()
                .ok_or_else(|| decoding("unexpected end of mif coordinates"))?;
            let mut words = line.split_whitespace();
            let x = parse_coord(words.next())?;
            let y = parse_coord(words.next())?;
            points.push(PlanePoint::new(x, y));
        }
        Ok(points)
    }
}

/// Decodes a `.mif` file.
pub fn decode(text: &str) -> Result<MifContent, Error> {
    let mut cursor = Lines::new(text);
    let mut columns = Vec::new();
    let mut delimiter = '\t';

    // Header: only the clauses the viewer needs are interpreted.
    while let Some(line) = cursor.next_line() {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or("").to_ascii_uppercase();
        match keyword.as_str() {
            "DELIMITER" => {
                if let Some(start) = line.find('"') {
                    if let Some(ch) = line[start + 1..].chars().next() {
                        delimiter = ch;
                    }
                }
            }
            "COLUMNS" => {
                let count = parse_count(words.next())?;
                for _ in 0..count {
                    let column = cursor
                        .next_line()
                        .ok_or_else(|| decoding("mif column list cut short"))?;
                    columns.push(
                        column
                            .split_whitespace()
                            .next()
                            .unwrap_or_default()
                            .to_string(),
                    );
                }
            }
            "DATA" => break,
            _ => {}
        }
    }

    let mut shapes = Vec::new();
    while let Some(line) = cursor.next_line() {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or("").to_ascii_uppercase();
        match keyword.as_str() {
            "NONE" => shapes.push(Vec::new()),
            "POINT" => {
                let x = parse_coord(words.next())?;
                let y = parse_coord(words.next())?;
                shapes.push(vec![vec![PlanePoint::new(x, y)]]);
            }
            "LINE" => {
                let x1 = parse_coord(words.next())?;
                let y1 = parse_coord(words.next())?;
                let x2 = parse_coord(words.next())?;
                let y2 = parse_coord(words.next())?;
                shapes.push(vec![vec![
                    PlanePoint::new(x1, y1),
                    PlanePoint::new(x2, y2),
                ]]);
            }
            "PLINE" => {
                let mut sections = 1;
                let mut first_count = None;
                match words.next() {
                    Some(word) if word.eq_ignore_ascii_case("MULTIPLE") => {
                        sections = parse_count(words.next())?;
                    }
                    Some(word) => first_count = Some(parse_count(Some(word))?),
                    None => {}
                }
                let mut parts = Vec::with_capacity(sections);
                for index in 0..sections {
                    let count = match (index, first_count) {
                        (0, Some(count)) => count,
                        _ => cursor.read_count()?,
                    };
                    parts.push(cursor.read_points(count)?);
                }
                shapes.push(parts);
            }
            "REGION" => {
                let rings = parse_count(words.next())?;
                let mut parts = Vec::with_capacity(rings);
                for _ in 0..rings {
                    let count = cursor.read_count()?;
                    parts.push(cursor.read_points(count)?);
                }
                shapes.push(parts);
            }
            _ => {}
        }
    }

    Ok(MifContent {
        columns,
        delimiter,
        shapes,
    })
}

/// Splits `.mid` attribute rows into fields, pairing values with the
/// declared columns positionally.
pub fn decode_mid(text: &str, delimiter: char, columns: &[String]) -> Vec<Vec<Field>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(delimiter)
                .zip(columns)
                .map(|(value, column)| Field::new(column.as_str(), value.trim().trim_matches('"')))
                .collect()
        })
        .collect()
}

fn parse_count(word: Option<&str>) -> Result<usize, Error> {
    word.and_then(|w| w.parse().ok())
        .ok_or_else(|| decoding("expected a count in mif geometry"))
}

fn parse_coord(word: Option<&str>) -> Result<f64, Error> {
    word.and_then(|w| w.parse().ok())
        .ok_or_else(|| decoding("expected a coordinate in mif geometry"))
}

fn decoding(message: &str) -> Error {
    Error::Decoding(message.to_string())
}
