use crate::parser::Point;
use serde::Serialize;

/// The unified run report: every normalized point, in aggregate order
#[derive(Debug, Serialize)]
pub struct Report {
    pub points: Vec<Point>,
}

impl Report {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Serialize the report as one compact JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize the report with indentation, for human consumption
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
