use super::{ParseError, Parser, Point};
use serde_json::Value;

/// Parser for loosely-structured JSON point files
///
/// The file content is treated as free text rather than one JSON
/// document: every balanced `{ ... }` span is an object candidate,
/// parsed structurally with serde_json. A candidate missing any of the
/// top-level keys `"group"`, `"x"`, `"y"` (or whose span is not a JSON
/// object at all) is skipped without error; an `x`/`y` value that is
/// present but not an integer fails the whole run. Keys are looked up
/// at the candidate's top level only, so nested objects are never
/// record shapes. Candidates are outermost balanced spans; a skipped
/// span is not re-scanned for interior objects.
#[derive(Debug)]
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, path: &str, bytes: &[u8]) -> Result<Vec<Point>, ParseError> {
        let content = String::from_utf8_lossy(bytes);
        let mut points = Vec::new();
        let mut pos = 0;

        while let Some(offset) = content[pos..].find('{') {
            let open = pos + offset;

            // An unmatched '{' terminates scanning cleanly
            let Some(close) = matching_brace(&content, open) else {
                break;
            };

            if let Some(point) = decode_candidate(&content[open..=close], path)? {
                points.push(point);
            }
            pos = close + 1;
        }

        Ok(points)
    }
}

/// Find the `}` closing the `{` at `open`, honoring nesting and strings
fn matching_brace(content: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in content.as_bytes().iter().enumerate().skip(open) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

/// Decode one balanced-brace span; Ok(None) means the span is skipped
fn decode_candidate(span: &str, path: &str) -> Result<Option<Point>, ParseError> {
    // A span that does not parse as a JSON object is not a candidate
    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(span) else {
        return Ok(None);
    };

    // All three keys must be present
    let (Some(group), Some(x), Some(y)) = (fields.get("group"), fields.get("x"), fields.get("y"))
    else {
        return Ok(None);
    };

    // The label must be a JSON string
    let Some(group) = group.as_str() else {
        return Ok(None);
    };

    Ok(Some(Point {
        source: path.to_string(),
        group: group.to_string(),
        x: integer_field(x, path)?,
        y: integer_field(y, path)?,
    }))
}

/// A coordinate that is present must be an integer; anything else is fatal
fn integer_field(value: &Value, path: &str) -> Result<i64, ParseError> {
    value.as_i64().ok_or_else(|| ParseError::InvalidInteger {
        path: path.to_string(),
        text: value.to_string(),
    })
}
