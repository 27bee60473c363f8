use super::{ParseError, Parser, Point};

/// Parser for line-oriented text files, one `group:x,y` record per line
///
/// The group label is the text before the first ':'; x sits between the
/// first ':' and the first ',' in the line; y is everything after that
/// ','. Processing stops at the first bad line. Empty files yield zero
/// points.
#[derive(Debug)]
pub struct TextParser;

impl Parser for TextParser {
    fn parse(&self, path: &str, bytes: &[u8]) -> Result<Vec<Point>, ParseError> {
        let content = String::from_utf8_lossy(bytes);
        let mut points = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            // Tolerate CRLF line endings
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            // Both delimiters are required, and the first ',' must leave
            // an x-span after the first ':'
            let delimiters = match (line.find(':'), line.find(',')) {
                (Some(colon), Some(comma)) if colon < comma => Some((colon, comma)),
                _ => None,
            };
            let Some((colon, comma)) = delimiters else {
                return Err(ParseError::MalformedRecord {
                    path: path.to_string(),
                    line: idx + 1,
                });
            };

            points.push(Point {
                source: path.to_string(),
                group: line[..colon].to_string(),
                x: parse_int(&line[colon + 1..comma], path)?,
                y: parse_int(&line[comma + 1..], path)?,
            });
        }

        Ok(points)
    }
}

/// Strict base-10 signed integer parse; any stray character is an error
fn parse_int(text: &str, path: &str) -> Result<i64, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidInteger {
        path: path.to_string(),
        text: text.to_string(),
    })
}
