mod binary;
mod error;
mod json;
mod point;
mod registry;
mod text;


pub use binary::BinaryParser;
pub use error::ParseError;
pub use json::JsonParser;
pub use point::Point;
pub use registry::ParserRegistry;
pub use text::TextParser;

/// Core trait that all format parsers must implement
pub trait Parser: std::fmt::Debug + Send + Sync {
    /// Parse one file's raw contents into normalized points
    ///
    /// # Arguments
    /// * `path` - Originating file path, recorded on every emitted point
    /// * `bytes` - Raw file contents, fully materialized
    ///
    /// # Returns
    /// Every record in the file, in file order, or the first error hit
    fn parse(&self, path: &str, bytes: &[u8]) -> Result<Vec<Point>, ParseError>;
}
