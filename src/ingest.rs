use crate::parser::{ParseError, ParserRegistry, Point};
use std::fs;

/// Parse a single file: dispatch on its suffix, read it, decode it
///
/// Dispatch happens before any I/O, so an unsupported suffix never
/// touches the filesystem. The file handle is scoped to the read and
/// released on every exit path.
pub fn parse_file(registry: &ParserRegistry, path: &str) -> Result<Vec<Point>, ParseError> {
    let parser = registry.select(path)?;

    let bytes = fs::read(path).map_err(|source| ParseError::UnreadableFile {
        path: path.to_string(),
        source,
    })?;

    parser.parse(path, &bytes)
}

/// Parse every input file and collect all points into one sequence
///
/// Files are processed strictly in the order given; the aggregate keeps
/// file-argument order first, within-file record order second. The
/// first error aborts the whole run and discards anything collected so
/// far.
pub fn collect_points(
    registry: &ParserRegistry,
    paths: &[String],
) -> Result<Vec<Point>, ParseError> {
    let mut points = Vec::new();
    for path in paths {
        points.extend(parse_file(registry, path)?);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> String {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_mixed_formats_preserve_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let txt = write_file(&dir, "a.txt", b"alpha:1,2\nbeta:3,4\n");
        let bin = write_file(&dir, "b.bin", &[0x05, 0x00, 0x70, 0x08]);
        let json = write_file(&dir, "c.json", br#"[{"group":"gamma","x":9,"y":10}]"#);

        let registry = ParserRegistry::with_default_parsers();
        let points = collect_points(&registry, &[txt.clone(), bin.clone(), json.clone()]).unwrap();

        assert_eq!(points.len(), 4);
        assert_eq!(points[0].source, txt);
        assert_eq!(points[0].group, "alpha");
        assert_eq!(points[1].group, "beta");
        assert_eq!(points[2].source, bin);
        assert_eq!(points[2].group, "5");
        assert_eq!(points[3].source, json);
        assert_eq!(points[3].x, 9);
    }

    #[test]
    fn test_unsupported_suffix_fails_before_any_read() {
        let registry = ParserRegistry::with_default_parsers();

        // The path does not exist; dispatch must fail first
        let err = parse_file(&registry, "no/such/file.csv").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let registry = ParserRegistry::with_default_parsers();
        let err = parse_file(&registry, path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ParseError::UnreadableFile { .. }));
    }

    #[test]
    fn test_first_error_discards_earlier_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(&dir, "good.txt", b"g:1,2\n");
        let bad = write_file(&dir, "bad.txt", b"no delimiters here\n");

        let registry = ParserRegistry::with_default_parsers();
        let result = collect_points(&registry, &[good, bad]);
        assert!(matches!(result, Err(ParseError::MalformedRecord { .. })));
    }

    #[test]
    fn test_empty_inputs_collect_nothing() {
        let registry = ParserRegistry::with_default_parsers();
        let points = collect_points(&registry, &[]).unwrap();
        assert!(points.is_empty());
    }
}
