//! Constructors for well-known graph families.
//!
//! Every constructor returns a fresh [`Graph`] whose edges are defined purely by the
//! index arithmetic of the family. Vertex layouts:
//!
//! | Family            | Vertices          | Layout |
//! |-------------------|-------------------|--------|
//! | `K_n`             | `n`               | every distinct pair joined |
//! | `C_n`             | `n`               | `i - (i + 1) mod n` |
//! | `W_n`             | `n + 1`           | rim `C_n` on `0..n`, hub `n` |
//! | `K_{m,n}`         | `m + n`           | sides `0..m` and `m..m + n` |
//! | `S_n = K_{1,n}`   | `n + 1`           | center `0`, leaves `1..=n` |
//! | `Q_d`             | `2^d`             | two copies of `Q_{d-1}` plus a matching |

use std::fmt;

use crate::graph::Graph;

// ============================================================================
// GraphFamily
// ============================================================================

/// A named graph family with its size parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphFamily {
    /// Complete graph `K_n`.
    Complete(usize),
    /// Cycle graph `C_n`.
    Cycle(usize),
    /// Wheel graph `W_n`: a hub joined to every vertex of `C_n`.
    Wheel(usize),
    /// Complete bipartite graph `K_{m,n}`.
    CompleteBipartite(usize, usize),
    /// Star graph `K_{1,n}`.
    Star(usize),
    /// Hypercube graph `Q_d`.
    Hypercube(u32),
}

impl GraphFamily {
    /// Builds the graph.
    pub fn build(self) -> Graph {
        match self {
            GraphFamily::Complete(n) => complete_graph(n),
            GraphFamily::Cycle(n) => cycle_graph(n),
            GraphFamily::Wheel(n) => wheel_graph(n),
            GraphFamily::CompleteBipartite(m, n) => complete_bipartite_graph(m, n),
            GraphFamily::Star(n) => star_graph(n),
            GraphFamily::Hypercube(d) => hypercube_graph(d),
        }
    }

    /// Number of vertices of the built graph.
    pub const fn vertex_count(self) -> usize {
        match self {
            GraphFamily::Complete(n) | GraphFamily::Cycle(n) => n,
            GraphFamily::Wheel(n) | GraphFamily::Star(n) => n + 1,
            GraphFamily::CompleteBipartite(m, n) => m + n,
            GraphFamily::Hypercube(d) => 1usize << d,
        }
    }

    /// Number of edges of the built graph, from the closed form of the family.
    pub const fn edge_count(self) -> usize {
        match self {
            GraphFamily::Complete(n) => n * n.saturating_sub(1) / 2,
            GraphFamily::Cycle(n) => cycle_edge_count(n),
            GraphFamily::Wheel(n) => cycle_edge_count(n) + n,
            GraphFamily::CompleteBipartite(m, n) => m * n,
            GraphFamily::Star(n) => n,
            GraphFamily::Hypercube(0) => 0,
            GraphFamily::Hypercube(d) => d as usize * (1usize << (d - 1)),
        }
    }
}

const fn cycle_edge_count(n: usize) -> usize {
    match n {
        0 | 1 => 0,
        2 => 1,
        _ => n,
    }
}

impl fmt::Display for GraphFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFamily::Complete(n) => write!(f, "K_{n}"),
            GraphFamily::Cycle(n) => write!(f, "C_{n}"),
            GraphFamily::Wheel(n) => write!(f, "W_{n}"),
            GraphFamily::CompleteBipartite(m, n) => write!(f, "K_{{{m},{n}}}"),
            GraphFamily::Star(n) => write!(f, "S_{n}"),
            GraphFamily::Hypercube(d) => write!(f, "Q_{d}"),
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// Complete graph `K_n`: an edge between every distinct pair.
pub fn complete_graph(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            g.connect(i, j);
        }
    }
    g
}

/// Adds the rim of `C_n` on vertices `0..n`.
fn add_cycle(g: &mut Graph, n: usize) {
    for i in 0..n {
        let j = (i + 1) % n;
        // n == 1 would wrap onto itself.
        if i != j {
            g.connect(i, j);
        }
    }
}

/// Cycle graph `C_n`: edges `(i, (i + 1) mod n)`.
///
/// `C_0` and `C_1` have no edges and `C_2` is a single edge.
pub fn cycle_graph(n: usize) -> Graph {
    let mut g = Graph::new(n);
    add_cycle(&mut g, n);
    g
}

/// Wheel graph `W_n`: the cycle `C_n` on `0..n` plus hub `n` joined to every rim vertex.
pub fn wheel_graph(n: usize) -> Graph {
    let mut g = Graph::new(n + 1);
    add_cycle(&mut g, n);
    for i in 0..n {
        g.connect(n, i);
    }
    g
}

/// Complete bipartite graph `K_{m,n}` with sides `0..m` and `m..m + n`.
pub fn complete_bipartite_graph(m: usize, n: usize) -> Graph {
    let mut g = Graph::new(m + n);
    for i in 0..m {
        for j in m..(m + n) {
            g.connect(i, j);
        }
    }
    g
}

/// Star graph `K_{1,n}`: center `0` joined to leaves `1..=n`.
pub fn star_graph(n: usize) -> Graph {
    complete_bipartite_graph(1, n)
}

/// Hypercube graph `Q_d`, built recursively.
///
/// `Q_0` is a single isolated vertex. `Q_d` places two copies of `Q_{d-1}` at
/// `[0, h)` and `[h, 2h)` with `h = 2^{d-1}`, reproducing the edges of each copy by
/// offset, and joins vertex `i` to vertex `h + i` for every `i < h`.
///
/// # Panics
/// Panics if `2^d` vertices do not fit in `usize`.
pub fn hypercube_graph(d: u32) -> Graph {
    if d == 0 {
        return Graph::new(1);
    }
    let half = hypercube_graph(d - 1);
    let h = half.vertex_count();

    let mut g = Graph::new(2 * h);
    for offset in [0, h] {
        for (u, v) in half.edges() {
            g.connect(offset + u, offset + v);
        }
    }
    for i in 0..h {
        g.connect(i, h + i);
    }
    g
}

// ============================================================================
// Tests
// ============================================================================
