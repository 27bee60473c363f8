use serde::Serialize;

/// The normalized record produced by any format parser
///
/// Field order matches the report layout: the originating file first,
/// then the label and coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Point {
    /// Originating file path, attached by the parser, never user-supplied
    #[serde(rename = "file")]
    pub source: String,
    /// Category label: free text for text/JSON sources, the decimal
    /// rendering of an 8-bit group code for binary sources
    pub group: String,
    /// Signed coordinates; value ranges are format-dependent
    pub x: i64,
    pub y: i64,
}
