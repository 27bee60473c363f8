use super::{ParseError, Parser, Point};

/// Parser for packed binary files of fixed 4-byte big-endian words
///
/// Each word carries three bit-fields, most significant first: an 8-bit
/// group code (bits 31-24), a 12-bit x (bits 23-12) and a 12-bit y
/// (bits 11-0). The stored byte order is big-endian regardless of host.
#[derive(Debug)]
pub struct BinaryParser;

impl Parser for BinaryParser {
    fn parse(&self, path: &str, bytes: &[u8]) -> Result<Vec<Point>, ParseError> {
        let mut points = Vec::new();

        // Fixed-width framing; a partial trailing word is dropped silently
        for chunk in bytes.chunks_exact(4) {
            let word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);

            let group_code = (word >> 24) & 0xFF;
            let x = (word >> 12) & 0xFFF;
            let y = word & 0xFFF;

            points.push(Point {
                source: path.to_string(),
                group: group_code.to_string(),
                x: i64::from(x),
                y: i64::from(y),
            });
        }

        Ok(points)
    }
}
