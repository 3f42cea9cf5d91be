//! Greedy Welsh–Powell vertex coloring.
//!
//! Two modes are provided on [`Graph`]:
//! - [`Graph::full_coloring`] colors a graph from scratch, visiting vertices by
//!   descending degree and filling one color class at a time.
//! - [`Graph::partial_coloring`] completes a pre-colored graph, repeatedly picking the
//!   uncolored vertex that sees the most distinct neighbor colors and giving it the
//!   smallest free color.
//!
//! Both are pure with respect to the graph: each call returns a fresh result and
//! leaves the graph untouched, so the modes can be mixed freely on one instance.
//! Every tie is broken by ascending vertex index, so results are deterministic.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{ColoringError, Result};
use crate::graph::Graph;

/// A color. `0`-based inside [`Coloring`]; `1`-based at the partial-coloring boundary.
pub type Color = u32;

// ============================================================================
// Coloring
// ============================================================================

/// A complete vertex coloring: one `0`-based color per vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<Color>,
}

impl Coloring {
    /// Returns the color of `v`, or `None` if `v` is not a vertex.
    #[inline]
    pub fn color_of(&self, v: usize) -> Option<Color> {
        self.colors.get(v).copied()
    }

    /// Returns the colors in vertex order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the number of colored vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` for the coloring of an empty graph.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the number of distinct colors used.
    pub fn count_colors_used(&self) -> usize {
        let mut distinct = self.colors.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct.len()
    }

    /// Returns the colors shifted to `1`-based values.
    pub fn to_one_based(&self) -> Vec<Color> {
        self.colors.iter().map(|&c| c + 1).collect()
    }

    /// Groups vertices by color, ordered by color value; vertices ascend within a class.
    pub fn color_classes(&self) -> Vec<Vec<usize>> {
        let Some(&max) = self.colors.iter().max() else {
            return Vec::new();
        };
        let mut classes = vec![Vec::new(); max as usize + 1];
        for (v, &c) in self.colors.iter().enumerate() {
            classes[c as usize].push(v);
        }
        classes.retain(|class| !class.is_empty());
        classes
    }

    /// Returns the inner color vector.
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, c) in self.colors.iter().enumerate() {
            writeln!(f, "Vertex {v} is colored with color {c}")?;
        }
        write!(f, "{} colors were used.", self.count_colors_used())
    }
}

// ============================================================================
// In-progress state
// ============================================================================

/// Per-call scratch state: `None` marks an uncolored vertex.
struct ColorState<'g> {
    graph: &'g Graph,
    color_of: Vec<Option<Color>>,
}

impl<'g> ColorState<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            color_of: vec![None; graph.vertex_count()],
        }
    }

    #[inline(always)]
    fn is_colored(&self, v: usize) -> bool {
        self.color_of[v].is_some()
    }

    #[inline(always)]
    fn assign(&mut self, v: usize, color: Color) {
        self.color_of[v] = Some(color);
    }

    /// Returns `true` if some neighbor of `v` currently holds `color`.
    fn has_adjacent_color(&self, v: usize, color: Color) -> bool {
        self.graph
            .neighbors_unchecked(v)
            .any(|u| self.color_of[u] == Some(color))
    }

    /// Smallest color `>= 0` not held by any colored neighbor of `v`.
    fn first_free_color(&self, v: usize) -> Color {
        let mut color = 0;
        while self.has_adjacent_color(v, color) {
            color += 1;
        }
        color
    }

    /// Number of distinct colors among the colored neighbors of `v`.
    fn saturation(&self, v: usize, scratch: &mut Vec<Color>) -> usize {
        scratch.clear();
        scratch.extend(
            self.graph
                .neighbors_unchecked(v)
                .filter_map(|u| self.color_of[u]),
        );
        scratch.sort_unstable();
        scratch.dedup();
        scratch.len()
    }

    /// The uncolored vertex with the highest saturation; the lowest index wins ties.
    fn most_saturated_uncolored(&self, scratch: &mut Vec<Color>) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for v in 0..self.color_of.len() {
            if self.is_colored(v) {
                continue;
            }
            let sat = self.saturation(v, scratch);
            if best.map_or(true, |(_, best_sat)| sat > best_sat) {
                best = Some((v, sat));
            }
        }
        best.map(|(v, _)| v)
    }

    fn into_coloring(self) -> Coloring {
        debug_assert!(self.color_of.iter().all(Option::is_some));
        Coloring {
            colors: self.color_of.into_iter().map(Option::unwrap_or_default).collect(),
        }
    }
}

// ============================================================================
// Algorithms
// ============================================================================

impl Graph {
    /// Colors the graph from scratch with the Welsh–Powell heuristic.
    ///
    /// Vertices are ordered by descending degree (stable, so equal degrees keep
    /// ascending index order). Each uncolored vertex in that order opens a new color
    /// class, which is then extended, in the same order, with every uncolored vertex
    /// that has no neighbor already in the class.
    ///
    /// The result is a proper coloring using at most `max_degree() + 1` colors.
    pub fn full_coloring(&self) -> Coloring {
        let mut order = self.degree_table();
        order.sort_by(|a, b| b.1.cmp(&a.1));

        let mut state = ColorState::new(self);
        let mut current: Color = 0;

        for &(v, _) in &order {
            if state.is_colored(v) {
                continue;
            }
            state.assign(v, current);
            let mut class_size = 1usize;

            for &(w, _) in &order {
                if state.is_colored(w) || self.adjacent(v, w) {
                    continue;
                }
                if !state.has_adjacent_color(w, current) {
                    state.assign(w, current);
                    class_size += 1;
                }
            }

            trace!(color = current, leader = v, class_size, "color class filled");
            current += 1;
        }

        debug!(
            vertices = self.vertex_count(),
            colors = current,
            "welsh-powell full coloring finished"
        );
        state.into_coloring()
    }

    /// Completes a partial coloring.
    ///
    /// `known[v]` is `Some(c)` with a `1`-based color for pre-colored vertices and `None`
    /// otherwise. Known colors are kept as given. The remaining vertices are colored one
    /// at a time: the uncolored vertex seeing the most distinct neighbor colors (lowest
    /// index on ties) receives the smallest color not used by its colored neighbors.
    ///
    /// Returns every vertex's color, `1`-based, in vertex order. Conflicts between known
    /// colors are not checked here; see [`crate::validate::find_conflict`].
    ///
    /// # Errors
    /// - [`ColoringError::InvalidInputSize`] if `known.len() != vertex_count()`.
    /// - [`ColoringError::InvalidColor`] if a known color is `0`.
    pub fn partial_coloring(&self, known: &[Option<Color>]) -> Result<Vec<Color>> {
        let n = self.vertex_count();
        if known.len() != n {
            return Err(ColoringError::InvalidInputSize {
                expected: n,
                got: known.len(),
            });
        }

        let mut state = ColorState::new(self);
        for (v, &k) in known.iter().enumerate() {
            match k {
                Some(0) => {
                    return Err(ColoringError::InvalidColor {
                        vertex: v,
                        color: 0,
                        max: Color::MAX,
                    })
                }
                Some(c) => state.assign(v, c - 1),
                None => {}
            }
        }

        let mut scratch = Vec::new();
        let mut assigned = 0usize;
        for _ in 0..n {
            let Some(v) = state.most_saturated_uncolored(&mut scratch) else {
                break;
            };
            let color = state.first_free_color(v);
            trace!(vertex = v, color, "assigned");
            state.assign(v, color);
            assigned += 1;
        }

        debug!(
            vertices = n,
            known = n - assigned,
            assigned,
            "partial coloring finished"
        );
        Ok(state.into_coloring().to_one_based())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::find_conflict;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn cycle(n: usize) -> Graph {
        let mut g = Graph::new(n);
        for i in 0..n {
            g.add_edge(i, (i + 1) % n).unwrap();
        }
        g
    }

    fn complete(n: usize) -> Graph {
        let mut g = Graph::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                g.add_edge(i, j).unwrap();
            }
        }
        g
    }

    // -------------------------------------------------------------------------
    // Full coloring
    // -------------------------------------------------------------------------

    #[test]
    fn full_coloring_of_k4_uses_four_colors() {
        let coloring = complete(4).full_coloring();
        assert_eq!(coloring.colors(), &[0, 1, 2, 3]);
        assert_eq!(coloring.count_colors_used(), 4);
    }

    #[test]
    fn full_coloring_of_c5_uses_three_colors() {
        let g = cycle(5);
        let coloring = g.full_coloring();
        assert_eq!(coloring.count_colors_used(), 3);
        assert_eq!(find_conflict(&g, coloring.colors()), None);
    }

    #[test]
    fn full_coloring_follows_stable_degree_order() {
        // Path 0-1-2-3: order is 1, 2 (degree 2), then 0, 3.
        // Class 0 = {1, 3}; class 1 = {2, 0}.
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        let coloring = g.full_coloring();
        assert_eq!(coloring.colors(), &[1, 0, 1, 0]);
    }

    #[test]
    fn full_coloring_of_edgeless_graph_uses_one_color() {
        let coloring = Graph::new(6).full_coloring();
        assert_eq!(coloring.colors(), &[0; 6]);
        assert_eq!(coloring.count_colors_used(), 1);
    }

    #[test]
    fn full_coloring_of_empty_graph() {
        let coloring = Graph::new(0).full_coloring();
        assert!(coloring.is_empty());
        assert_eq!(coloring.count_colors_used(), 0);
        assert!(coloring.color_classes().is_empty());
    }

    #[test]
    fn full_coloring_is_proper_and_bounded_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0xC0FFEE);
        for _ in 0..200 {
            let n = rng.random_range(1..100);
            let p = rng.random_range(0.0..0.8);
            let g = Graph::new_random(&mut rng, n, p);
            let coloring = g.full_coloring();
            assert_eq!(coloring.len(), n);
            assert_eq!(find_conflict(&g, coloring.colors()), None);
            assert!(coloring.count_colors_used() <= g.max_degree() + 1);
        }
    }

    #[test]
    fn full_coloring_is_deterministic() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        let g = Graph::new_random(&mut rng, 60, 0.3);
        assert_eq!(g.full_coloring(), g.full_coloring());
    }

    // -------------------------------------------------------------------------
    // Partial coloring
    // -------------------------------------------------------------------------

    #[test]
    fn partial_coloring_with_nothing_known_colors_everything() {
        let g = cycle(4);
        let colors = g.partial_coloring(&[None; 4]).unwrap();
        // All saturations are 0 at first, so vertex 0 goes first with color 1.
        assert_eq!(colors, vec![1, 2, 1, 2]);
    }

    #[test]
    fn partial_coloring_picks_most_saturated_vertex() {
        // Star centered at 0 with leaves 1, 2, 3; leaves 1 and 2 pre-colored 1 and 2.
        // Vertex 0 sees two distinct colors and gets the first free color, 3.
        let mut g = Graph::new(4);
        for leaf in 1..4 {
            g.add_edge(0, leaf).unwrap();
        }
        let colors = g.partial_coloring(&[None, Some(1), Some(2), None]).unwrap();
        assert_eq!(colors, vec![3, 1, 2, 1]);
    }

    #[test]
    fn partial_coloring_keeps_large_known_colors() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        let colors = g
            .partial_coloring(&[Some(1_000), None, Some(1_000)])
            .unwrap();
        assert_eq!(colors, vec![1_000, 1, 1_000]);
    }

    #[test]
    fn partial_coloring_preserves_known_colors_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0xBEEF);
        for _ in 0..100 {
            let n = rng.random_range(1..80);
            let g = Graph::new_random(&mut rng, n, 0.25);

            // Clues taken from a proper coloring, so the completion must stay proper.
            let reference = g.full_coloring().to_one_based();
            let known: Vec<Option<Color>> = reference
                .iter()
                .map(|&c| rng.random_bool(0.3).then_some(c))
                .collect();

            let colors = g.partial_coloring(&known).unwrap();
            for (v, k) in known.iter().enumerate() {
                if let Some(c) = k {
                    assert_eq!(colors[v], *c, "known color changed at {v}");
                }
            }
            assert!(colors.iter().all(|&c| c >= 1));
            assert_eq!(find_conflict(&g, &colors), None);
        }
    }

    #[test]
    fn partial_coloring_rejects_wrong_length() {
        let err = cycle(3).partial_coloring(&[None; 2]).unwrap_err();
        assert_eq!(
            err,
            ColoringError::InvalidInputSize {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn partial_coloring_rejects_zero_color() {
        let err = cycle(3).partial_coloring(&[None, Some(0), None]).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidColor { vertex: 1, color: 0, .. }));
    }

    #[test]
    fn modes_do_not_share_state() {
        let g = cycle(5);
        let first = g.full_coloring();
        let _ = g.partial_coloring(&[Some(3); 5]).unwrap();
        assert_eq!(g.full_coloring(), first);
    }

    // -------------------------------------------------------------------------
    // Coloring helpers
    // -------------------------------------------------------------------------

    #[test]
    fn color_classes_group_vertices() {
        let coloring = cycle(6).full_coloring();
        let classes = coloring.color_classes();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.iter().map(Vec::len).sum::<usize>(), 6);
    }

    #[test]
    fn display_lists_vertices_and_total() {
        let coloring = complete(2).full_coloring();
        assert_eq!(
            coloring.to_string(),
            "Vertex 0 is colored with color 0\nVertex 1 is colored with color 1\n2 colors were used."
        );
    }
}
