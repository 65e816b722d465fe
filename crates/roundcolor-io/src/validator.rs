//! Input and coloring validation.
//!
//! `validate_input` catches unusable inputs before the protocol starts.
//! `check_coloring` is the post-hoc correctness check for finished runs;
//! the executor never calls it.

use std::fmt;

use roundcolor_graph::Graph;
use roundcolor_types::constants::MIN_COLOR;
use roundcolor_types::{Color, ColoringError, ColoringResult, VertexId};

use crate::contract::ColoringInput;

/// A single way a coloring can be wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The coloring has a different length than the graph's vertex count.
    LengthMismatch { expected: usize, actual: usize },
    /// A vertex color lies outside `1..=max_degree + 1`.
    OutOfRange { vertex: VertexId, color: Color },
    /// Two adjacent vertices share a color. Reported once per edge, `u < v`.
    Conflict { u: VertexId, v: VertexId, color: Color },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LengthMismatch { expected, actual } => {
                write!(f, "coloring has {actual} entries, graph has {expected} vertices")
            }
            Violation::OutOfRange { vertex, color } => {
                write!(f, "{vertex} has out-of-range color {color}")
            }
            Violation::Conflict { u, v, color } => {
                write!(f, "{u} and {v} share color {color}")
            }
        }
    }
}

/// Every violation found in one coloring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when the coloring is proper and in range.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Converts the report into a result, summarizing the first few violations.
    pub fn into_result(self) -> ColoringResult<()> {
        if self.is_valid() {
            return Ok(());
        }
        let shown: Vec<String> = self.violations.iter().take(5).map(ToString::to_string).collect();
        let more = self.violations.len().saturating_sub(shown.len());
        let mut message = shown.join("; ");
        if more > 0 {
            message.push_str(&format!(" (+{more} more)"));
        }
        Err(ColoringError::InvalidColoring(message))
    }
}

/// Checks range and properness of a finished coloring.
pub fn check_coloring(graph: &Graph, coloring: &[Color], max_degree: u32) -> ValidationReport {
    let mut report = ValidationReport::default();

    if coloring.len() != graph.vertex_count() {
        report.violations.push(Violation::LengthMismatch {
            expected: graph.vertex_count(),
            actual: coloring.len(),
        });
        return report;
    }

    let max_color = u64::from(max_degree) + 1;
    for v in graph.vertices() {
        let color = coloring[v.index()];
        if color < MIN_COLOR || u64::from(color) > max_color {
            report.violations.push(Violation::OutOfRange { vertex: v, color });
        }
    }

    for (u, v) in graph.edges() {
        let color = coloring[u as usize];
        if color == coloring[v as usize] {
            report.violations.push(Violation::Conflict {
                u: VertexId(u),
                v: VertexId(v),
                color,
            });
        }
    }

    report
}

/// Validates a coloring, failing with `InvalidColoring` on any violation.
pub fn validate_coloring(graph: &Graph, coloring: &[Color], max_degree: u32) -> ColoringResult<()> {
    check_coloring(graph, coloring, max_degree).into_result()
}

/// Validates a complete coloring input.
///
/// Checks:
/// - Graph invariants (re-checked in case the value was built in memory)
/// - Declared degree bound covers the true maximum degree,
///   unless the config turns degree checking off
/// - Degree bound leaves room for `max_degree + 1` colors
/// - Protocol configuration is usable
pub fn validate_input(input: &ColoringInput) -> ColoringResult<()> {
    input.graph.validate()?;

    let declared = input.effective_max_degree();
    if declared == u32::MAX {
        return Err(ColoringError::InvalidConfig(
            "max_degree must leave room for max_degree + 1 colors".into(),
        ));
    }

    let check_degree = input.config.as_ref().map_or(true, |c| c.check_degree);
    let actual = input.graph.max_degree();
    if check_degree && declared < actual {
        return Err(ColoringError::InvalidGraph(format!(
            "Declared max degree {declared} is below the true max degree {actual}"
        )));
    }

    if let Some(ref config) = input.config {
        config.validate()?;
    }

    Ok(())
}
