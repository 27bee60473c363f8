use anyhow::Result;
use clap::Parser;
use pointpack::{parse_file, ParserRegistry, Report};
use std::collections::HashSet;

/// Normalize heterogeneous point-record files into one JSON report
#[derive(Parser)]
#[command(name = "pointpack", version, about)]
struct Cli {
    /// Input files; the format is chosen by suffix (.txt, .bin, .json)
    #[arg(required = true)]
    files: Vec<String>,

    /// Indent the JSON report
    #[arg(long)]
    pretty: bool,

    /// Log per-file progress and run stats to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = ParserRegistry::with_default_parsers();

    let mut points = Vec::new();
    for file in &cli.files {
        let parsed = parse_file(&registry, file)?;
        if cli.verbose {
            eprintln!("[pointpack] {} - {} points", file, parsed.len());
        }
        points.extend(parsed);
    }

    if cli.verbose {
        let labels: HashSet<(&str, &str)> = points
            .iter()
            .map(|p| (p.source.as_str(), p.group.as_str()))
            .collect();
        eprintln!(
            "[pointpack] {} files, {} points, {} file:group labels",
            cli.files.len(),
            points.len(),
            labels.len()
        );
    }

    let report = Report::new(points);
    let json = if cli.pretty {
        report.to_json_pretty()?
    } else {
        report.to_json()?
    };
    println!("{}", json);

    Ok(())
}
