//! Pixel graph construction.
//!
//! Nodes are pixels; edges join a pixel to each of its eight neighbours and
//! are weighted by a luminance-aware colour dissimilarity. Under the default
//! [`Neighbourhood::InteriorSources`] policy only interior pixels emit edges,
//! so border pixels appear exclusively as edge targets.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::pixels::{Color, PixelGrid};

/// Neighbour offsets `(d_row, d_col)` in emission order: up, up-right,
/// right, down-right, down, down-left, left, up-left.
pub const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Selects which pixels emit edges.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Neighbourhood {
    /// Only pixels with `1 <= row <= height - 2` and `1 <= col <= width - 2`
    /// emit edges, each to all eight neighbours.
    #[default]
    InteriorSources,
    /// Every pixel emits edges to each of its in-bounds neighbours.
    AllPixels,
}

impl Neighbourhood {
    /// Smallest side length for which the policy can emit any edge.
    #[must_use]
    pub const fn minimum_side(self) -> usize {
        match self {
            Self::InteriorSources => 3,
            Self::AllPixels => 1,
        }
    }
}

/// A pixel in the graph. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelNode {
    id: usize,
    row: usize,
    col: usize,
    color: Color,
}

impl PixelNode {
    /// Identity, `row * width + col`.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> usize { self.id }

    /// Row index.
    #[must_use]
    #[rustfmt::skip]
    pub fn row(&self) -> usize { self.row }

    /// Column index.
    #[must_use]
    #[rustfmt::skip]
    pub fn col(&self) -> usize { self.col }

    /// Pixel colour.
    #[must_use]
    #[rustfmt::skip]
    pub fn color(&self) -> Color { self.color }
}

/// An undirected, weighted edge between two pixel identities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge. `weight` is expected to be finite and non-negative.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Identity of the pixel that emitted the edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Identity of the neighbouring pixel.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Colour dissimilarity between the endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }
}

/// Weighted sum of squared channel differences,
/// `0.3 * dr^2 + 0.59 * dg^2 + 0.11 * db^2`.
///
/// Zero exactly when both colours are identical.
///
/// # Examples
/// ```
/// use seggraph_core::{Color, color_dissimilarity};
///
/// let black = Color::new(0, 0, 0);
/// assert_eq!(color_dissimilarity(black, black), 0.0);
/// assert!(color_dissimilarity(black, Color::new(0, 10, 0)) > color_dissimilarity(black, Color::new(0, 0, 10)));
/// ```
#[must_use]
pub fn color_dissimilarity(first: Color, second: Color) -> f64 {
    let red = f64::from(first.red) - f64::from(second.red);
    let green = f64::from(first.green) - f64::from(second.green);
    let blue = f64::from(first.blue) - f64::from(second.blue);
    0.3 * red * red + 0.59 * green * green + 0.11 * blue * blue
}

/// Nodes and candidate edges built from a [`PixelGrid`].
///
/// Read-only after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGraph {
    height: usize,
    width: usize,
    nodes: Vec<PixelNode>,
    edges: Vec<Edge>,
}

impl PixelGraph {
    /// Builds the graph for `grid` under `neighbourhood`.
    ///
    /// Edges are listed row-major by source, each source's edges following
    /// [`NEIGHBOUR_OFFSETS`]. The parallel build produces the same list.
    ///
    /// # Examples
    /// ```
    /// use seggraph_core::{Color, Neighbourhood, PixelGraph, PixelGrid};
    ///
    /// let grid = PixelGrid::from_fn(4, 5, |_, _| Color::default()).expect("valid grid");
    /// let graph = PixelGraph::build(&grid, Neighbourhood::InteriorSources);
    /// assert_eq!(graph.node_count(), 20);
    /// assert_eq!(graph.edges().len(), 2 * 3 * 8);
    /// ```
    #[must_use]
    pub fn build(grid: &PixelGrid, neighbourhood: Neighbourhood) -> Self {
        let height = grid.height();
        let width = grid.width();
        let nodes = grid
            .colors()
            .iter()
            .enumerate()
            .map(|(id, &color)| PixelNode {
                id,
                row: id / width,
                col: id % width,
                color,
            })
            .collect();

        let rows = source_rows(height, neighbourhood);
        let edges = collect_edges(grid, rows, neighbourhood);

        Self {
            height,
            width,
            nodes,
            edges,
        }
    }

    /// Number of rows in the source grid.
    #[must_use]
    #[rustfmt::skip]
    pub fn height(&self) -> usize { self.height }

    /// Number of columns in the source grid.
    #[must_use]
    #[rustfmt::skip]
    pub fn width(&self) -> usize { self.width }

    /// Number of nodes, `height * width`.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// All nodes indexed by identity.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[PixelNode] { &self.nodes }

    /// Candidate edges in emission order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Node with identity `id`, or `None` when out of range.
    #[must_use]
    pub fn node(&self, id: usize) -> Option<&PixelNode> {
        self.nodes.get(id)
    }
}

fn source_rows(height: usize, neighbourhood: Neighbourhood) -> std::ops::Range<usize> {
    match neighbourhood {
        Neighbourhood::InteriorSources => 1..height.saturating_sub(1),
        Neighbourhood::AllPixels => 0..height,
    }
}

fn source_cols(width: usize, neighbourhood: Neighbourhood) -> std::ops::Range<usize> {
    match neighbourhood {
        Neighbourhood::InteriorSources => 1..width.saturating_sub(1),
        Neighbourhood::AllPixels => 0..width,
    }
}

#[cfg(feature = "parallel")]
fn collect_edges(
    grid: &PixelGrid,
    rows: std::ops::Range<usize>,
    neighbourhood: Neighbourhood,
) -> Vec<Edge> {
    // Indexed parallel iterators keep row order on collect.
    let per_row: Vec<Vec<Edge>> = rows
        .into_par_iter()
        .map(|row| row_edges(grid, row, neighbourhood))
        .collect();
    per_row.into_iter().flatten().collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_edges(
    grid: &PixelGrid,
    rows: std::ops::Range<usize>,
    neighbourhood: Neighbourhood,
) -> Vec<Edge> {
    rows.flat_map(|row| row_edges(grid, row, neighbourhood))
        .collect()
}

fn row_edges(grid: &PixelGrid, row: usize, neighbourhood: Neighbourhood) -> Vec<Edge> {
    let cols = source_cols(grid.width(), neighbourhood);
    let mut edges = Vec::with_capacity(cols.len() * NEIGHBOUR_OFFSETS.len());
    for col in cols {
        let source = grid.index_of(row, col);
        let Some(source_color) = grid.color(row, col) else {
            continue;
        };
        for (d_row, d_col) in NEIGHBOUR_OFFSETS {
            let Some((n_row, n_col)) = offset(row, col, d_row, d_col) else {
                continue;
            };
            let Some(target_color) = grid.color(n_row, n_col) else {
                continue;
            };
            edges.push(Edge::new(
                source,
                grid.index_of(n_row, n_col),
                color_dissimilarity(source_color, target_color),
            ));
        }
    }
    edges
}

fn offset(row: usize, col: usize, d_row: isize, d_col: isize) -> Option<(usize, usize)> {
    Some((row.checked_add_signed(d_row)?, col.checked_add_signed(d_col)?))
}
