use math::Triangle;
use tracing::debug;

use crate::{EulerError, RunConfig, read_input};

pub const INPUT: &str = "triangle.txt";

/// PE18: Maximum Path Sum I
/// Find the maximum total from top to bottom of the triangle in `18/triangle.txt`,
/// moving to adjacent numbers on the row below.
pub fn solve(config: &RunConfig) -> Result<i64, EulerError> {
    let content = read_input(config, 18, INPUT)?;
    max_total(&content)
}

pub fn max_total(content: &str) -> Result<i64, EulerError> {
    let triangle = Triangle::parse(content)?;
    debug!(
        rows = triangle.row_count(),
        path = ?triangle.best_path(),
        "best path through triangle"
    );
    Ok(triangle.max_total())
}
