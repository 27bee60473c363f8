use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot open {path}: {source}")]
    UnreadableFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file extension: {0:?}")]
    UnsupportedFormat(String),

    #[error("Malformed record in {path} (line {line}): expected group:x,y")]
    MalformedRecord { path: String, line: usize },

    #[error("Invalid integer {text:?} in {path}")]
    InvalidInteger { path: String, text: String },
}
