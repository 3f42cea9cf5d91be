//! Error types shared by the graph, coloring and Sudoku layers.

use thiserror::Error;

use crate::coloring::Color;

/// Errors reported at the public API boundary.
///
/// Internal algorithm steps work on already-validated indices and never
/// produce these on their own.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// A vertex index was not in `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// An input sequence had the wrong length.
    #[error("invalid input size: expected {expected} entries, got {got}")]
    InvalidInputSize {
        /// Required length.
        expected: usize,
        /// Supplied length.
        got: usize,
    },

    /// A supplied (1-based) color or digit was outside `1..=max`.
    #[error("invalid color {color} at vertex {vertex}: expected a value in 1..={max}")]
    InvalidColor {
        /// Vertex (or cell) carrying the value.
        vertex: usize,
        /// The rejected value.
        color: Color,
        /// Largest accepted value.
        max: Color,
    },

    /// The greedy completion needed more colors than are available.
    #[error("unsatisfiable: vertex {vertex} needs color {color} but only {max_colors} are available")]
    Unsatisfiable {
        /// First vertex that could not be colored within range.
        vertex: usize,
        /// 1-based color the completion assigned to it.
        color: Color,
        /// Number of colors allowed.
        max_colors: Color,
    },

    /// Two adjacent vertices share a color.
    #[error("vertices {u} and {v} are adjacent but both have color {color}")]
    Conflict {
        /// Lower endpoint.
        u: usize,
        /// Higher endpoint.
        v: usize,
        /// The shared color, in the numbering of the caller.
        color: Color,
    },

    /// Malformed adjacency-matrix text.
    #[error("failed to parse adjacency matrix: {0}")]
    Parse(#[from] ParseError),

    /// I/O error (file not found, etc.).
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ColoringError {
    fn from(e: std::io::Error) -> Self {
        ColoringError::Io(e.to_string())
    }
}

/// Errors encountered while parsing a `0/1` adjacency matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No non-empty rows were found.
    #[error("adjacency matrix is empty")]
    Empty,

    /// A row has a different length than the number of rows.
    #[error("adjacency matrix is not square: row {row} has length {got}, expected {expected}")]
    NonSquare {
        /// Row index with the wrong length.
        row: usize,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Encountered a character other than `0` or `1`.
    #[error("invalid character at ({row}, {col}): {ch:?} (expected '0' or '1')")]
    InvalidChar {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The invalid character.
        ch: char,
    },

    /// Diagonal contains a `1`.
    #[error("self-loop detected at vertex {vertex}")]
    SelfLoop {
        /// The vertex with a self-loop.
        vertex: usize,
    },

    /// `A[i][j] != A[j][i]`.
    #[error("matrix is not symmetric at ({i},{j})")]
    NotSymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = ColoringError> = std::result::Result<T, E>;
