//! Maximum-sum paths through a triangle of integers.
//!
//! A triangle is read row by row into an arena of [`Node`]s. Each node links to
//! the adjacent nodes of the row above (its parents) and caches the best
//! cumulative cost of reaching it from the apex. Since parents always belong to
//! an earlier row, a node's cost is final as soon as the node is created.
//!
//! # Example
//!
//! ```
//! use math::triangle::Triangle;
//!
//! let triangle: Triangle = "3\n7 4\n2 4 6\n8 5 9 3\n".parse().unwrap();
//! assert_eq!(triangle.max_total(), 23);
//! assert_eq!(triangle.best_path(), vec![3, 7, 4, 9]);
//! ```

use std::ops::Range;
use std::str::FromStr;

use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised while reading a triangle. None of them yields a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriangleError {
    #[error("triangle has no rows")]
    Empty,

    #[error("expected single root, found {found} values on the first row")]
    ExpectedSingleRoot { found: usize },

    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} values, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: path sum overflows a 64-bit integer")]
    Overflow { line: usize },
}

/// Index of a node in a [`Triangle`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    value: i64,
    parents: SmallVec<[NodeId; 2]>,
    best_incoming_cost: i64,
    full_cost: i64,
}

impl Node {
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Adjacent nodes in the row above: none for the apex, otherwise one or two.
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    /// Largest `full_cost` among the parents, or 0 for the apex.
    pub fn best_incoming_cost(&self) -> i64 {
        self.best_incoming_cost
    }

    /// Best cumulative path sum from the apex down to and including this node.
    pub fn full_cost(&self) -> i64 {
        self.full_cost
    }
}

#[derive(Debug, Clone)]
pub struct Triangle {
    nodes: Vec<Node>,
    rows: Vec<Range<usize>>,
}

impl Triangle {
    /// Parses rows of whitespace-separated integers, one row per line.
    ///
    /// Leading blank lines are skipped; the first blank line after the apex
    /// ends the triangle.
    pub fn parse(text: &str) -> Result<Self, TriangleError> {
        let mut triangle = Triangle {
            nodes: Vec::new(),
            rows: Vec::new(),
        };

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() {
                if triangle.rows.is_empty() {
                    continue;
                }
                break;
            }

            let values = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| TriangleError::InvalidNumber {
                        line: line_no,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let expected = triangle.rows.len() + 1;
            if values.len() != expected {
                return Err(if triangle.rows.is_empty() {
                    TriangleError::ExpectedSingleRoot {
                        found: values.len(),
                    }
                } else {
                    TriangleError::RowWidth {
                        line: line_no,
                        expected,
                        found: values.len(),
                    }
                });
            }

            triangle.push_row(&values, line_no)?;
        }

        if triangle.rows.is_empty() {
            return Err(TriangleError::Empty);
        }
        Ok(triangle)
    }

    fn push_row(&mut self, values: &[i64], line: usize) -> Result<(), TriangleError> {
        let previous = self.rows.last().cloned().unwrap_or(0..0);
        let start = self.nodes.len();

        for (column, &value) in values.iter().enumerate() {
            let mut parents: SmallVec<[NodeId; 2]> = SmallVec::new();
            if column > 0 {
                parents.push(NodeId(previous.start + column - 1));
            }
            if column < previous.len() {
                parents.push(NodeId(previous.start + column));
            }

            let best_incoming_cost = parents
                .iter()
                .map(|&id| self.node(id).full_cost())
                .max()
                .unwrap_or(0);
            let full_cost = best_incoming_cost
                .checked_add(value)
                .ok_or(TriangleError::Overflow { line })?;

            self.nodes.push(Node {
                value,
                parents,
                best_incoming_cost,
                full_cost,
            });
        }

        self.rows.push(start..self.nodes.len());
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// All nodes, apex first, row by row.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Nodes of row `row` (0 is the apex). Panics if the row does not exist.
    pub fn row(&self, row: usize) -> &[Node] {
        &self.nodes[self.rows[row].clone()]
    }

    pub fn bottom_row(&self) -> &[Node] {
        self.row(self.rows.len() - 1)
    }

    /// Maximum total from the apex to any node of the bottom row.
    pub fn max_total(&self) -> i64 {
        self.best_terminal().map_or(0, |id| self.node(id).full_cost())
    }

    /// Values along one maximum-total path, apex first.
    pub fn best_path(&self) -> Vec<i64> {
        let mut path = Vec::with_capacity(self.rows.len());
        let mut current = self.best_terminal();

        while let Some(id) = current {
            let node = self.node(id);
            path.push(node.value);
            current = node
                .parents
                .iter()
                .copied()
                .max_by_key(|&parent| self.node(parent).full_cost());
        }

        path.reverse();
        path
    }

    fn best_terminal(&self) -> Option<NodeId> {
        let bottom = self.rows.last()?.clone();
        bottom
            .map(NodeId)
            .max_by_key(|&id| self.node(id).full_cost())
    }
}

impl FromStr for Triangle {
    type Err = TriangleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Triangle::parse(s)
    }
}

/// Parses `text` and returns its maximum apex-to-bottom total.
pub fn max_path_sum(text: &str) -> Result<i64, TriangleError> {
    Ok(Triangle::parse(text)?.max_total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = "3\n7 4\n2 4 6\n8 5 9 3\n";

    fn brute_force(rows: &[Vec<i64>], row: usize, column: usize) -> i64 {
        let value = rows[row][column];
        if row + 1 == rows.len() {
            return value;
        }
        value + brute_force(rows, row + 1, column).max(brute_force(rows, row + 1, column + 1))
    }

    fn render(rows: &[Vec<i64>]) -> String {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_sample_triangle() {
        let triangle = Triangle::parse(SAMPLE).unwrap();
        assert_eq!(triangle.row_count(), 4);
        assert_eq!(triangle.max_total(), 23);
        assert_eq!(triangle.best_path(), vec![3, 7, 4, 9]);
    }

    #[test]
    fn test_max_total_is_repeatable() {
        let triangle = Triangle::parse(SAMPLE).unwrap();
        assert_eq!(triangle.max_total(), triangle.max_total());
        assert_eq!(max_path_sum(SAMPLE), max_path_sum(SAMPLE));
    }

    #[test]
    fn test_sample_costs() {
        let triangle = Triangle::parse(SAMPLE).unwrap();
        let costs: Vec<i64> = triangle.bottom_row().iter().map(Node::full_cost).collect();
        assert_eq!(costs, vec![20, 19, 23, 16]);
    }

    #[test]
    fn test_parent_links() {
        let triangle = Triangle::parse(SAMPLE).unwrap();
        let apex = &triangle.row(0)[0];
        assert!(apex.parents().is_empty());
        assert_eq!(apex.best_incoming_cost(), 0);

        let row = triangle.row(2);
        assert_eq!(row[0].parents(), &[NodeId(1)]);
        assert_eq!(row[1].parents(), &[NodeId(1), NodeId(2)]);
        assert_eq!(row[2].parents(), &[NodeId(2)]);
    }

    #[test]
    fn test_single_row() {
        let triangle = Triangle::parse("42").unwrap();
        assert_eq!(triangle.max_total(), 42);
        assert_eq!(triangle.best_path(), vec![42]);
        assert_eq!(max_path_sum("-7\n"), Ok(-7));
    }

    #[test]
    fn test_rejects_wide_root() {
        assert_eq!(
            Triangle::parse("3 4\n7 4 1\n").unwrap_err(),
            TriangleError::ExpectedSingleRoot { found: 2 }
        );
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(Triangle::parse("").unwrap_err(), TriangleError::Empty);
        assert_eq!(Triangle::parse("\n  \n").unwrap_err(), TriangleError::Empty);
    }

    #[test]
    fn test_rejects_bad_number() {
        assert_eq!(
            Triangle::parse("3\n7 x\n").unwrap_err(),
            TriangleError::InvalidNumber {
                line: 2,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_bad_row_width() {
        assert_eq!(
            Triangle::parse("3\n7 4\n2 4\n").unwrap_err(),
            TriangleError::RowWidth {
                line: 3,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_blank_lines() {
        // Leading blank lines are skipped, the first blank after content ends the input.
        let triangle = Triangle::parse("\n\n3\n7 4\n\n2 4 6\n").unwrap();
        assert_eq!(triangle.row_count(), 2);
        assert_eq!(triangle.max_total(), 10);
    }

    #[test]
    fn test_rejects_overflowing_sum() {
        assert_eq!(
            Triangle::parse("9223372036854775807\n1 1\n").unwrap_err(),
            TriangleError::Overflow { line: 2 }
        );
        assert_eq!(
            max_path_sum("-9223372036854775808\n-1 0\n"),
            Err(TriangleError::Overflow { line: 2 })
        );
    }

    #[test]
    fn test_extreme_values_without_overflow() {
        let triangle = Triangle::parse("9223372036854775806\n1 -5\n").unwrap();
        assert_eq!(triangle.max_total(), i64::MAX);
        assert_eq!(triangle.best_path(), vec![i64::MAX - 1, 1]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TriangleError::ExpectedSingleRoot { found: 2 }.to_string(),
            "expected single root, found 2 values on the first row"
        );
    }

    prop_compose! {
        fn arb_rows()(
            rows in (1usize..9).prop_flat_map(|n| {
                (0..n)
                    .map(|r| prop::collection::vec(-50i64..100, r + 1))
                    .collect::<Vec<_>>()
            }),
        ) -> Vec<Vec<i64>> {
            rows
        }
    }

    proptest! {
        #[test]
        fn test_full_cost_invariant(rows in arb_rows()) {
            let triangle = Triangle::parse(&render(&rows)).unwrap();
            for node in triangle.nodes() {
                let expected = node
                    .parents()
                    .iter()
                    .map(|&id| triangle.node(id).full_cost())
                    .max()
                    .unwrap_or(0)
                    + node.value();
                prop_assert_eq!(node.full_cost(), expected);
            }
        }

        #[test]
        fn test_max_total_matches_brute_force(rows in arb_rows()) {
            let triangle = Triangle::parse(&render(&rows)).unwrap();
            prop_assert_eq!(triangle.max_total(), brute_force(&rows, 0, 0));

            let path = triangle.best_path();
            prop_assert_eq!(path.len(), rows.len());
            prop_assert_eq!(path.iter().sum::<i64>(), triangle.max_total());
        }
    }
}
