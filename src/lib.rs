// Public API exports
pub mod ingest;
pub mod parser;
pub mod report;

// Re-export main types for convenience
pub use ingest::{collect_points, parse_file};
pub use parser::{
    BinaryParser, JsonParser, ParseError, Parser, ParserRegistry, Point, TextParser,
};
pub use report::Report;
