//! Sudoku as a graph-coloring instance.
//!
//! Each cell is a vertex; two cells are joined when they share a row, a column or a
//! box; digits are colors. Clues become known colors and the grid is completed with
//! [`Graph::partial_coloring`]. The completion is greedy, so a puzzle that needs
//! backtracking is reported as [`ColoringError::Unsatisfiable`] rather than solved.

use tracing::{debug, warn};

use crate::coloring::Color;
use crate::error::{ColoringError, Result};
use crate::graph::Graph;
use crate::validate::find_conflict;

/// Grid geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SudokuConfig {
    /// Side of one box; the grid side is `box_size²` (3 for the classic 9×9 grid).
    pub box_size: usize,
}

impl Default for SudokuConfig {
    fn default() -> Self {
        Self { box_size: 3 }
    }
}

impl SudokuConfig {
    /// Number of rows (and columns, and digits).
    pub const fn side(&self) -> usize {
        self.box_size * self.box_size
    }

    /// Number of cells.
    pub const fn cell_count(&self) -> usize {
        self.side() * self.side()
    }
}

/// A Sudoku grid backed by its conflict graph.
///
/// Cell `i` sits at row `i / side`, column `i % side`. The conflict graph is built once
/// in the constructor and never changes; only the cell values do.
#[derive(Clone, Debug)]
pub struct SudokuSolver {
    side: usize,
    cells: Vec<Option<Color>>,
    conflict_graph: Graph,
}

impl SudokuSolver {
    /// Creates a classic 9×9 grid from 81 cells (`None` = unknown, otherwise `1..=9`).
    ///
    /// # Errors
    /// See [`SudokuSolver::with_config`].
    pub fn new(values: &[Option<Color>]) -> Result<Self> {
        Self::with_config(values, &SudokuConfig::default())
    }

    /// Creates a grid with the given geometry.
    ///
    /// # Errors
    /// - [`ColoringError::InvalidInputSize`] if `values.len()` is not `side²`, or if the
    ///   box size is zero.
    /// - [`ColoringError::InvalidColor`] if a clue is outside `1..=side`.
    pub fn with_config(values: &[Option<Color>], config: &SudokuConfig) -> Result<Self> {
        if config.box_size == 0 {
            return Err(ColoringError::InvalidInputSize {
                expected: SudokuConfig::default().cell_count(),
                got: values.len(),
            });
        }
        let side = config.side();
        if values.len() != config.cell_count() {
            return Err(ColoringError::InvalidInputSize {
                expected: config.cell_count(),
                got: values.len(),
            });
        }
        let max = side as Color;
        for (cell, &value) in values.iter().enumerate() {
            if let Some(digit) = value {
                if !(1..=max).contains(&digit) {
                    return Err(ColoringError::InvalidColor {
                        vertex: cell,
                        color: digit,
                        max,
                    });
                }
            }
        }

        Ok(Self {
            side,
            cells: values.to_vec(),
            conflict_graph: build_conflict_graph(config.box_size),
        })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Current cell values in row-major order.
    #[inline]
    pub fn values(&self) -> &[Option<Color>] {
        &self.cells
    }

    /// The conflict graph.
    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.conflict_graph
    }

    /// Returns `true` once every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Completes the grid in place.
    ///
    /// Clues are never changed. On error the grid is left as it was.
    ///
    /// # Errors
    /// - [`ColoringError::Unsatisfiable`] if the greedy completion needs a digit above
    ///   `side`.
    /// - [`ColoringError::Conflict`] if two clues in one row, column or box are equal.
    pub fn solve(&mut self) -> Result<()> {
        let clues = self.cells.iter().filter(|c| c.is_some()).count();
        debug!(side = self.side, clues, "solving sudoku");

        if let Some((u, v)) = self.clue_conflict() {
            warn!(u, v, "conflicting clues");
            return Err(ColoringError::Conflict {
                u,
                v,
                color: self.cells[u].unwrap_or_default(),
            });
        }

        let solved = self.conflict_graph.partial_coloring(&self.cells)?;

        let max = self.side as Color;
        if let Some((cell, &digit)) = solved.iter().enumerate().find(|&(_, &d)| d > max) {
            warn!(cell, digit, "greedy completion ran out of digits");
            return Err(ColoringError::Unsatisfiable {
                vertex: cell,
                color: digit,
                max_colors: max,
            });
        }
        debug_assert_eq!(find_conflict(&self.conflict_graph, &solved), None);

        self.cells = solved.into_iter().map(Some).collect();
        debug!(filled = self.cells.len() - clues, "sudoku solved");
        Ok(())
    }

    /// First pair of peer cells holding the same clue.
    fn clue_conflict(&self) -> Option<(usize, usize)> {
        self.conflict_graph
            .edges()
            .find(|&(u, v)| self.cells[u].is_some() && self.cells[u] == self.cells[v])
    }

    /// Renders the grid: a line break before every row (so the text starts with an
    /// empty line), then each value followed by a comma. Unknown cells show as `_`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 3 + self.side);
        for (i, cell) in self.cells.iter().enumerate() {
            if i % self.side == 0 {
                out.push('\n');
            }
            match cell {
                Some(digit) => out.push_str(&digit.to_string()),
                None => out.push('_'),
            }
            out.push(',');
        }
        out
    }
}

/// Joins every pair of distinct cells that share a row, a column or a box.
fn build_conflict_graph(box_size: usize) -> Graph {
    let side = box_size * box_size;
    let mut g = Graph::new(side * side);
    let mut group = Vec::with_capacity(side);

    for r in 0..side {
        group.clear();
        group.extend((0..side).map(|c| r * side + c));
        connect_group(&mut g, &group);
    }
    for c in 0..side {
        group.clear();
        group.extend((0..side).map(|r| r * side + c));
        connect_group(&mut g, &group);
    }
    for br in 0..box_size {
        for bc in 0..box_size {
            group.clear();
            for r in 0..box_size {
                for c in 0..box_size {
                    group.push((br * box_size + r) * side + bc * box_size + c);
                }
            }
            connect_group(&mut g, &group);
        }
    }
    g
}

fn connect_group(g: &mut Graph, group: &[usize]) {
    for (i, &a) in group.iter().enumerate() {
        for &b in &group[i + 1..] {
            g.connect(a, b);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const PUZZLE: [Option<Color>; 81] = {
        const N: Option<Color> = None;
        [
            N, N, N, Some(2), Some(6), N, Some(7), N, Some(1),
            Some(6), Some(8), N, N, Some(7), N, N, Some(9), N,
            Some(1), Some(9), N, N, N, Some(4), Some(5), N, N,
            Some(8), Some(2), N, Some(1), N, N, N, Some(4), N,
            N, N, Some(4), Some(6), N, Some(2), Some(9), N, N,
            N, Some(5), N, N, N, Some(3), N, Some(2), Some(8),
            N, N, Some(9), Some(3), N, N, N, Some(7), Some(4),
            N, Some(4), N, N, Some(5), N, N, Some(3), Some(6),
            Some(7), N, Some(3), N, Some(1), Some(8), N, N, N,
        ]
    };

    #[rustfmt::skip]
    const SOLUTION: [Color; 81] = [
        4, 3, 5, 2, 6, 9, 7, 8, 1,
        6, 8, 2, 5, 7, 1, 4, 9, 3,
        1, 9, 7, 8, 3, 4, 5, 6, 2,
        8, 2, 6, 1, 9, 5, 3, 4, 7,
        3, 7, 4, 6, 8, 2, 9, 1, 5,
        9, 5, 1, 7, 4, 3, 6, 2, 8,
        5, 1, 9, 3, 2, 6, 8, 7, 4,
        2, 4, 8, 9, 5, 7, 1, 3, 6,
        7, 6, 3, 4, 1, 8, 2, 5, 9,
    ];

    // -------------------------------------------------------------------------
    // Conflict graph
    // -------------------------------------------------------------------------

    #[test]
    fn conflict_graph_has_twenty_peers_per_cell() {
        let g = build_conflict_graph(3);
        assert_eq!(g.vertex_count(), 81);
        assert!((0..81).all(|v| g.degree(v).unwrap() == 20));
        assert_eq!(g.edge_count(), 81 * 20 / 2);
    }

    #[test]
    fn conflict_graph_has_no_self_loops() {
        let g = build_conflict_graph(3);
        assert!((0..81).all(|v| !g.has_edge(v, v)));
    }

    #[test]
    fn conflict_graph_joins_rows_columns_and_boxes() {
        let g = build_conflict_graph(3);
        assert!(g.has_edge(0, 8)); // row
        assert!(g.has_edge(0, 72)); // column
        assert!(g.has_edge(0, 20)); // box (row 2, col 2)
        assert!(!g.has_edge(0, 30)); // row 3, col 3
    }

    // -------------------------------------------------------------------------
    // Solving
    // -------------------------------------------------------------------------

    #[test]
    fn solves_reference_puzzle() {
        let mut sudoku = SudokuSolver::new(&PUZZLE).unwrap();
        sudoku.solve().unwrap();
        let values: Vec<Color> = sudoku.values().iter().map(|c| c.unwrap()).collect();
        assert_eq!(values, SOLUTION);
        assert!(sudoku.is_complete());
    }

    #[test]
    fn solve_keeps_clues() {
        let mut sudoku = SudokuSolver::new(&PUZZLE).unwrap();
        sudoku.solve().unwrap();
        for (clue, value) in PUZZLE.iter().zip(sudoku.values()) {
            if clue.is_some() {
                assert_eq!(clue, value);
            }
        }
    }

    #[test]
    fn solving_a_solved_grid_is_a_no_op() {
        let full: Vec<Option<Color>> = SOLUTION.iter().copied().map(Some).collect();
        let mut sudoku = SudokuSolver::new(&full).unwrap();
        sudoku.solve().unwrap();
        assert_eq!(sudoku.values(), full.as_slice());
    }

    #[test]
    fn conflicting_clues_are_reported() {
        let mut values = [None; 81];
        values[0] = Some(5);
        values[1] = Some(5);
        let mut sudoku = SudokuSolver::new(&values).unwrap();
        let err = sudoku.solve().unwrap_err();
        assert!(matches!(err, ColoringError::Conflict { u: 0, v: 1, color: 5 }));
        assert_eq!(sudoku.values(), values.as_slice());
    }

    #[test]
    fn empty_grid_is_filled_greedily() {
        let mut sudoku = SudokuSolver::new(&[None; 81]).unwrap();
        sudoku.solve().unwrap();
        let solved: Vec<Color> = sudoku.values().iter().map(|c| c.unwrap()).collect();
        assert_eq!(find_conflict(sudoku.graph(), &solved), None);
        assert_eq!(&solved[..9], &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn puzzle_needing_backtracking_is_unsatisfiable() {
        let values: Vec<Option<Color>> =
            "800000000003600000070090200050007000000045700000100030001000068008500010090000400"
                .bytes()
                .map(|b| Color::from(b - b'0'))
                .map(|d| (d != 0).then_some(d))
                .collect();
        let mut sudoku = SudokuSolver::new(&values).unwrap();
        let err = sudoku.solve().unwrap_err();
        assert_eq!(
            err,
            ColoringError::Unsatisfiable {
                vertex: 30,
                color: 10,
                max_colors: 9
            }
        );
        assert_eq!(sudoku.values(), values.as_slice());
    }

    #[test]
    fn four_by_four_grid() {
        let config = SudokuConfig { box_size: 2 };
        #[rustfmt::skip]
        let values = [
            Some(1), None, None, None,
            None, None, Some(1), None,
            None, Some(1), None, None,
            None, None, None, Some(1),
        ];
        let mut sudoku = SudokuSolver::with_config(&values, &config).unwrap();
        assert_eq!(sudoku.side(), 4);
        sudoku.solve().unwrap();
        let solved: Vec<Color> = sudoku.values().iter().map(|c| c.unwrap()).collect();
        assert_eq!(find_conflict(sudoku.graph(), &solved), None);
        assert!(solved.iter().all(|&d| (1..=4).contains(&d)));
    }

    // -------------------------------------------------------------------------
    // Input validation
    // -------------------------------------------------------------------------

    #[test]
    fn rejects_wrong_length() {
        let err = SudokuSolver::new(&[None; 80]).unwrap_err();
        assert_eq!(
            err,
            ColoringError::InvalidInputSize {
                expected: 81,
                got: 80
            }
        );
    }

    #[test]
    fn rejects_out_of_range_digit() {
        let mut values = [None; 81];
        values[40] = Some(10);
        let err = SudokuSolver::new(&values).unwrap_err();
        assert_eq!(
            err,
            ColoringError::InvalidColor {
                vertex: 40,
                color: 10,
                max: 9
            }
        );
        values[40] = Some(0);
        assert!(SudokuSolver::new(&values).is_err());
    }

    #[test]
    fn rejects_zero_box_size() {
        let err = SudokuSolver::with_config(&[], &SudokuConfig { box_size: 0 }).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidInputSize { .. }));
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    #[test]
    fn render_breaks_before_every_row() {
        let mut sudoku = SudokuSolver::new(&PUZZLE).unwrap();
        sudoku.solve().unwrap();
        let text = sudoku.render();
        assert!(text.starts_with("\n4,3,5,2,6,9,7,8,1,\n6,8,2,"));
        assert!(text.ends_with("\n7,6,3,4,1,8,2,5,9,"));
        assert_eq!(text.lines().count(), 10);
        assert_eq!(text.matches(',').count(), 81);
    }

    #[test]
    fn render_marks_unknown_cells() {
        let sudoku = SudokuSolver::new(&PUZZLE).unwrap();
        let first_line = sudoku.render().lines().nth(1).unwrap().to_string();
        assert_eq!(first_line, "_,_,_,2,6,_,7,_,1,");
    }
}
