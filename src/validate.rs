//! Deterministic checks for colorings and graph families.

use crate::coloring::{Color, Coloring};
use crate::error::{ColoringError, Result};
use crate::families::GraphFamily;
use crate::graph::Graph;

// ============================================================================
// Public API
// ============================================================================

/// Families with the number of colors Welsh–Powell is known to use on them.
const KNOWN_FAMILIES: &[(GraphFamily, usize)] = &[
    (GraphFamily::Complete(4), 4),
    (GraphFamily::Cycle(5), 3),
    (GraphFamily::Cycle(6), 2),
    (GraphFamily::Hypercube(3), 2),
    (GraphFamily::CompleteBipartite(2, 4), 2),
    (GraphFamily::Wheel(5), 4),
    (GraphFamily::Wheel(6), 3),
    (GraphFamily::Star(5), 2),
];

/// Returns the first edge `(u, v)`, `u < v`, whose endpoints share a color.
///
/// Self-loops are ignored. `colors` must have one entry per vertex; vertices beyond
/// its length are treated as uncolored.
pub fn find_conflict(graph: &Graph, colors: &[Color]) -> Option<(usize, usize)> {
    graph
        .edges()
        .filter(|&(u, v)| u != v)
        .find(|&(u, v)| matches!((colors.get(u), colors.get(v)), (Some(a), Some(b)) if a == b))
}

/// Checks that `coloring` is a proper coloring of `graph`.
///
/// # Errors
/// Returns [`ColoringError::InvalidInputSize`] if the coloring covers a different number
/// of vertices, or [`ColoringError::Conflict`] for the first monochromatic edge.
pub fn validate_coloring(graph: &Graph, coloring: &Coloring) -> Result<()> {
    if coloring.len() != graph.vertex_count() {
        return Err(ColoringError::InvalidInputSize {
            expected: graph.vertex_count(),
            got: coloring.len(),
        });
    }
    match find_conflict(graph, coloring.colors()) {
        Some((u, v)) => Err(ColoringError::Conflict {
            u,
            v,
            color: coloring.colors()[u],
        }),
        None => Ok(()),
    }
}

/// Validates a single family: closed-form sizes, properness of the full coloring, and
/// the `max_degree + 1` color bound.
///
/// # Errors
/// Returns an error message describing the first failed check.
pub fn validate_family(family: GraphFamily) -> Result<(), String> {
    let g = family.build();

    if g.vertex_count() != family.vertex_count() {
        return Err(format!(
            "{family}: expected {} vertices, built {}",
            family.vertex_count(),
            g.vertex_count()
        ));
    }
    if g.edge_count() != family.edge_count() {
        return Err(format!(
            "{family}: expected {} edges, built {}",
            family.edge_count(),
            g.edge_count()
        ));
    }

    let coloring = g.full_coloring();
    validate_coloring(&g, &coloring).map_err(|e| format!("{family}: {e}"))?;

    let bound = g.max_degree() + 1;
    if coloring.count_colors_used() > bound {
        return Err(format!(
            "{family}: used {} colors, bound is {bound}",
            coloring.count_colors_used()
        ));
    }

    Ok(())
}

/// Validates the bundled family table, including the exact color count of each entry.
///
/// # Errors
/// Returns an error message if any family fails validation.
pub fn validate_known_families() -> Result<(), String> {
    for &(family, expected_colors) in KNOWN_FAMILIES {
        validate_family(family)?;
        let used = family.build().full_coloring().count_colors_used();
        if used != expected_colors {
            return Err(format!(
                "{family}: expected {expected_colors} colors, used {used}"
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
