use super::{BinaryParser, JsonParser, ParseError, Parser, TextParser};
use std::collections::HashMap;
use std::path::Path;

/// Dispatch table mapping file extensions to format parsers
pub struct ParserRegistry {
    /// Lowercase extension -> parser mapping
    map: HashMap<String, Box<dyn Parser>>,
}

impl ParserRegistry {
    /// Create an empty registry with no parsers bound
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create a registry with the builtin format parsers bound
    ///
    /// `txt` -> TextParser, `bin` -> BinaryParser, `json` -> JsonParser
    pub fn with_default_parsers() -> Self {
        let mut registry = Self::new();
        registry.register("txt", TextParser);
        registry.register("bin", BinaryParser);
        registry.register("json", JsonParser);
        registry
    }

    /// Register a parser for a specific file extension
    ///
    /// # Arguments
    /// * `extension` - File extension without dot (e.g., "txt", "bin")
    /// * `parser` - Parser implementation
    pub fn register(&mut self, extension: impl Into<String>, parser: impl Parser + 'static) {
        self.map.insert(extension.into(), Box::new(parser));
    }

    /// Select the parser bound to a path's extension
    ///
    /// The extension is the text after the final '.', matched
    /// case-insensitively. An unbound extension (including no extension
    /// at all) is an error; no parser is invoked for it.
    pub fn select(&self, path: &str) -> Result<&dyn Parser, ParseError> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        self.map
            .get(&ext)
            .map(|p| &**p)
            .ok_or(ParseError::UnsupportedFormat(ext))
    }

    /// Get the number of registered parsers
    pub fn parser_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered extensions
    pub fn registered_extensions(&self) -> Vec<&str> {
        self.map.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_default_parsers()
    }
}
