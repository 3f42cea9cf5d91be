//! Undirected graph stored as an adjacency matrix of row bitsets.

use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{ColoringError, ParseError, Result};

const WORD_BITS: usize = 64;

#[inline(always)]
const fn words_for(n: usize) -> usize {
    n.div_ceil(WORD_BITS)
}

#[inline(always)]
const fn bit(v: usize) -> u64 {
    1u64 << (v % WORD_BITS)
}

// ============================================================================
// Graph
// ============================================================================

/// A fixed-size undirected graph.
///
/// Representation:
/// - Vertices are `0..vertex_count`.
/// - Row `v` of the adjacency matrix is a bitset of `ceil(vertex_count / 64)` words;
///   bit `u` of row `v` is set iff the edge `(v, u)` exists.
/// - Every mutation writes both `[u][v]` and `[v][u]`, so the matrix stays symmetric.
///
/// `add_edge(v, v)` is accepted and stores a self-loop; none of the builders in this
/// crate create one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    words: usize,
    adj: Vec<u64>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        let words = words_for(vertex_count);
        Self {
            vertex_count,
            words,
            adj: vec![0u64; vertex_count * words],
        }
    }

    /// Builds a random `G(n, p)` graph: each pair `i < j` is joined with probability `p`.
    pub fn new_random<R: Rng>(rng: &mut R, vertex_count: usize, p: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");

        let mut g = Self::new(vertex_count);
        for i in 0..vertex_count {
            for j in (i + 1)..vertex_count {
                if rng.random_bool(p) {
                    g.connect(i, j);
                }
            }
        }
        g
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.vertex_count {
            Ok(())
        } else {
            Err(ColoringError::OutOfRange {
                vertex: v,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Adds the edge `(u, v)`. Adding an existing edge is a no-op.
    ///
    /// # Errors
    /// Returns [`ColoringError::OutOfRange`] if either endpoint is not a vertex.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.connect(u, v);
        Ok(())
    }

    /// Removes the edge `(u, v)`. Removing a missing edge is a no-op.
    ///
    /// # Errors
    /// Returns [`ColoringError::OutOfRange`] if either endpoint is not a vertex.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.disconnect(u, v);
        Ok(())
    }

    /// Sets both matrix entries for `(u, v)` without bounds validation.
    #[inline]
    pub(crate) fn connect(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.vertex_count && v < self.vertex_count);
        let w = self.words;
        self.adj[u * w + v / WORD_BITS] |= bit(v);
        self.adj[v * w + u / WORD_BITS] |= bit(u);
    }

    #[inline]
    fn disconnect(&mut self, u: usize, v: usize) {
        let w = self.words;
        self.adj[u * w + v / WORD_BITS] &= !bit(v);
        self.adj[v * w + u / WORD_BITS] &= !bit(u);
    }

    /// Returns whether the edge `(u, v)` exists. Out-of-range indices have no edges.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.vertex_count && v < self.vertex_count && self.adjacent(u, v)
    }

    #[inline(always)]
    pub(crate) fn adjacent(&self, u: usize, v: usize) -> bool {
        (self.row(u)[v / WORD_BITS] & bit(v)) != 0
    }

    #[inline(always)]
    fn row(&self, v: usize) -> &[u64] {
        &self.adj[v * self.words..(v + 1) * self.words]
    }

    /// Returns the degree of vertex `v`.
    ///
    /// # Errors
    /// Returns [`ColoringError::OutOfRange`] if `v` is not a vertex.
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.degree_unchecked(v))
    }

    #[inline]
    pub(crate) fn degree_unchecked(&self, v: usize) -> usize {
        self.row(v).iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `(vertex, degree)` for every vertex, in index order.
    pub fn degree_table(&self) -> Vec<(usize, usize)> {
        (0..self.vertex_count)
            .map(|v| (v, self.degree_unchecked(v)))
            .collect()
    }

    /// Returns the largest vertex degree (`0` for an empty graph).
    pub fn max_degree(&self) -> usize {
        (0..self.vertex_count)
            .map(|v| self.degree_unchecked(v))
            .max()
            .unwrap_or(0)
    }

    /// Returns the number of edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates the neighbors of `v` in ascending order.
    ///
    /// # Errors
    /// Returns [`ColoringError::OutOfRange`] if `v` is not a vertex.
    pub fn neighbors(&self, v: usize) -> Result<Neighbors<'_>> {
        self.check_vertex(v)?;
        Ok(self.neighbors_unchecked(v))
    }

    #[inline]
    pub(crate) fn neighbors_unchecked(&self, v: usize) -> Neighbors<'_> {
        let row = self.row(v);
        Neighbors {
            row,
            word_idx: 0,
            current: row.first().copied().unwrap_or(0),
        }
    }

    /// Iterates every edge once as `(u, v)` with `u <= v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count).flat_map(move |u| {
            self.neighbors_unchecked(u)
                .filter(move |&v| v >= u)
                .map(move |v| (u, v))
        })
    }

    /// Lists the neighbors of `v` (the row of the matrix as indices).
    ///
    /// # Errors
    /// Returns [`ColoringError::OutOfRange`] if `v` is not a vertex.
    pub fn adjacent_vertices(&self, v: usize) -> Result<Vec<usize>> {
        Ok(self.neighbors(v)?.collect())
    }

    /// Returns a copy of the adjacency matrix.
    pub fn adjacency_matrix(&self) -> Vec<Vec<bool>> {
        (0..self.vertex_count)
            .map(|i| (0..self.vertex_count).map(|j| self.adjacent(i, j)).collect())
            .collect()
    }

    /// Saves the adjacency matrix to a file as an `n x n` matrix of `0/1` characters.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_file(&self, filename: impl AsRef<Path>) -> Result<()> {
        let mut f = File::create(filename)?;
        self.write_to(&mut f)
    }

    /// Writes the adjacency matrix as an `n x n` matrix of `0/1` characters.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<()> {
        for i in 0..self.vertex_count {
            for j in 0..self.vertex_count {
                let edge = u8::from(self.adjacent(i, j));
                write!(w, "{edge}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// Loads a graph from a file containing an `n x n` adjacency matrix.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the matrix is malformed.
    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(filename)?);
        let mut text = String::new();
        for line in reader.lines() {
            text.push_str(&line?);
            text.push('\n');
        }
        parse_adjacency_matrix(&text)
    }
}

/// One row per vertex: `i: ` followed by each matrix entry as `0`/`1` and a space.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.vertex_count {
            write!(f, "{i}: ")?;
            for j in 0..self.vertex_count {
                write!(f, "{} ", u8::from(self.adjacent(i, j)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of one adjacency row.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    row: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let b = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * WORD_BITS + b);
            }
            self.word_idx += 1;
            self.current = *self.row.get(self.word_idx)?;
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a `0/1` adjacency matrix from text.
///
/// Rules:
/// - Blank lines are ignored, surrounding whitespace is trimmed.
/// - The matrix must be square, symmetric, and have a zero diagonal.
///
/// # Errors
/// Returns [`ColoringError::Parse`] if the input is empty, non-square, contains invalid
/// characters, has self-loops, or is not symmetric.
pub fn parse_adjacency_matrix(text: &str) -> Result<Graph> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ParseError::Empty.into());
    }
    let n = lines.len();

    let mut g = Graph::new(n);
    for (i, line) in lines.iter().enumerate() {
        let bytes = line.as_bytes();
        if bytes.len() != n {
            return Err(ParseError::NonSquare {
                row: i,
                expected: n,
                got: bytes.len(),
            }
            .into());
        }
        for (j, &b) in bytes.iter().enumerate() {
            match b {
                b'0' => {}
                b'1' => g.adj[i * g.words + j / WORD_BITS] |= bit(j),
                _ => {
                    return Err(ParseError::InvalidChar {
                        row: i,
                        col: j,
                        ch: b as char,
                    }
                    .into())
                }
            }
        }
    }

    for i in 0..n {
        if g.adjacent(i, i) {
            return Err(ParseError::SelfLoop { vertex: i }.into());
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if g.adjacent(i, j) != g.adjacent(j, i) {
                return Err(ParseError::NotSymmetric { i, j }.into());
            }
        }
    }

    Ok(g)
}

// ============================================================================
// Tests
// ============================================================================
