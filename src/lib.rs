//! # Welsh–Powell Graph Coloring
//!
//! A small Rust library for greedy vertex coloring of undirected graphs.
//!
//! This crate provides:
//! - An adjacency-matrix [`Graph`](graph::Graph) stored as row bitsets.
//! - The **Welsh–Powell** heuristic in two modes: coloring from scratch and
//!   completing a partially pre-colored graph.
//! - Builders for the classic graph families (\(K_n\), \(C_n\), \(W_n\), \(K_{m,n}\),
//!   stars, \(Q_d\)).
//! - A Sudoku encoding that solves puzzles through the partial-coloring mode.
//!
//! The colorings are greedy and deterministic: every result is a *proper* coloring
//! that follows fixed tie-break rules, not necessarily a minimum one.
//!
//! ## Quick Start
//!
//! ```
//! use welsh_powell::families::cycle_graph;
//!
//! // An odd cycle needs three colors.
//! let g = cycle_graph(5);
//! let coloring = g.full_coloring();
//! assert_eq!(coloring.count_colors_used(), 3);
//! ```
//!
//! ## Building Graphs by Hand
//!
//! ```
//! use welsh_powell::graph::Graph;
//!
//! let mut g = Graph::new(4);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(2, 3).unwrap();
//! assert_eq!(g.degree(1).unwrap(), 2);
//! assert!(g.add_edge(0, 4).is_err());
//!
//! // Complete a coloring where vertex 0 is fixed to color 2 (colors are 1-based here).
//! let colors = g.partial_coloring(&[Some(2), None, None, None]).unwrap();
//! assert_eq!(colors[0], 2);
//! ```
//!
//! ## Solving a Sudoku
//!
//! ```
//! use welsh_powell::sudoku::SudokuSolver;
//!
//! let grid: Vec<Option<u32>> =
//!     "000260701680070090190004500820100040004602900050003028009300074040050036703018000"
//!         .bytes()
//!         .map(|b| u32::from(b - b'0'))
//!         .map(|d| (d != 0).then_some(d))
//!         .collect();
//!
//! let mut sudoku = SudokuSolver::new(&grid).unwrap();
//! sudoku.solve().unwrap();
//! assert!(sudoku.is_complete());
//! assert!(sudoku.render().starts_with("\n4,3,5,2,6,9,7,8,1,"));
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Adjacency-matrix graph, degrees, and `0/1` matrix I/O.
//! - [`coloring`]: Full and partial Welsh–Powell coloring.
//! - [`families`]: Graph family constructors.
//! - [`sudoku`]: Sudoku as a coloring instance.
//! - [`validate`]: Properness checks and family self-validation.
//! - [`error`]: The crate error type.
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (`debug` per coloring run, `trace` per color
//! class or assignment, `warn` when a Sudoku cannot be completed). Install any
//! subscriber to see them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::needless_range_loop)] // Often clearer for matrix indexing
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs

pub mod coloring;
pub mod error;
pub mod families;
pub mod graph;
pub mod sudoku;
pub mod validate;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::coloring::{Color, Coloring};
    pub use crate::error::{ColoringError, ParseError, Result};
    pub use crate::families::{
        complete_bipartite_graph, complete_graph, cycle_graph, hypercube_graph, star_graph,
        wheel_graph, GraphFamily,
    };
    pub use crate::graph::{parse_adjacency_matrix, Graph};
    pub use crate::sudoku::{SudokuConfig, SudokuSolver};
    pub use crate::validate::{find_conflict, validate_coloring, validate_known_families};
}
