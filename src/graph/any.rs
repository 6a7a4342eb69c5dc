//! A tagged union over the four representations.
//!
//! Dispatch is a `match` on the variant, so an `AnyGraph` costs no more than the
//! representation it wraps and needs no trait object.

use core::fmt;

use crate::error::GraphResult;
use crate::graph::{ArcGraph, Edge, FromGraph, Graph, ListGraph, MatrixGraph, SetGraph};

/// Names one of the storage strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// [`ListGraph`].
    List,
    /// [`MatrixGraph`].
    Matrix,
    /// [`SetGraph`].
    Set,
    /// [`ArcGraph`].
    Arc,
}

impl Representation {
    /// Every representation, in declaration order.
    pub const ALL: [Representation; 4] = [
        Representation::List,
        Representation::Matrix,
        Representation::Set,
        Representation::Arc,
    ];

    /// Returns `true` if parallel edges are stored as separate entries.
    pub const fn keeps_parallel_edges(self) -> bool {
        matches!(self, Representation::List | Representation::Arc)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Representation::List => "list",
            Representation::Matrix => "matrix",
            Representation::Set => "set",
            Representation::Arc => "arc",
        })
    }
}

/// A graph whose representation is chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGraph {
    /// Adjacency lists.
    List(ListGraph),
    /// Adjacency matrix.
    Matrix(MatrixGraph),
    /// Adjacency sets.
    Set(SetGraph),
    /// Flat arc list.
    Arc(ArcGraph),
}

macro_rules! dispatch {
    ($self:expr, $graph:ident => $body:expr) => {
        match $self {
            AnyGraph::List($graph) => $body,
            AnyGraph::Matrix($graph) => $body,
            AnyGraph::Set($graph) => $body,
            AnyGraph::Arc($graph) => $body,
        }
    };
}

impl AnyGraph {
    /// Creates an edgeless graph of the given representation.
    ///
    /// # Errors
    /// [`GraphError::CapacityOverflow`](crate::GraphError::CapacityOverflow)
    /// for a matrix that cannot be allocated.
    pub fn new(representation: Representation, vertex_count: usize) -> GraphResult<Self> {
        Ok(match representation {
            Representation::List => AnyGraph::List(ListGraph::new(vertex_count)),
            Representation::Matrix => AnyGraph::Matrix(MatrixGraph::new(vertex_count)?),
            Representation::Set => AnyGraph::Set(SetGraph::new(vertex_count)),
            Representation::Arc => AnyGraph::Arc(ArcGraph::new(vertex_count)),
        })
    }

    /// Copies any graph into the given representation.
    ///
    /// # Errors
    /// As [`FromGraph::from_graph`].
    pub fn from_graph_as<G: Graph + ?Sized>(
        representation: Representation,
        source: &G,
    ) -> GraphResult<Self> {
        Ok(match representation {
            Representation::List => AnyGraph::List(ListGraph::from_graph(source)?),
            Representation::Matrix => AnyGraph::Matrix(MatrixGraph::from_graph(source)?),
            Representation::Set => AnyGraph::Set(SetGraph::from_graph(source)?),
            Representation::Arc => AnyGraph::Arc(ArcGraph::from_graph(source)?),
        })
    }

    /// The representation currently backing this graph.
    pub fn representation(&self) -> Representation {
        match self {
            AnyGraph::List(_) => Representation::List,
            AnyGraph::Matrix(_) => Representation::Matrix,
            AnyGraph::Set(_) => Representation::Set,
            AnyGraph::Arc(_) => Representation::Arc,
        }
    }

    /// Copies this graph into another representation.
    ///
    /// Converting into the current representation is a plain clone.
    ///
    /// # Errors
    /// As [`FromGraph::from_graph`].
    pub fn convert(&self, representation: Representation) -> GraphResult<Self> {
        if representation == self.representation() {
            return Ok(self.clone());
        }
        Self::from_graph_as(representation, self)
    }
}

impl Graph for AnyGraph {
    fn vertex_count(&self) -> usize {
        dispatch!(self, g => g.vertex_count())
    }

    fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        dispatch!(self, g => g.add_edge(from, to))
    }

    fn successors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        dispatch!(self, g => g.successors(vertex))
    }

    fn predecessors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        dispatch!(self, g => g.predecessors(vertex))
    }

    fn contains_edge(&self, from: usize, to: usize) -> GraphResult<bool> {
        dispatch!(self, g => g.contains_edge(from, to))
    }

    fn out_degree(&self, vertex: usize) -> GraphResult<usize> {
        dispatch!(self, g => g.out_degree(vertex))
    }

    fn edge_count(&self) -> usize {
        dispatch!(self, g => g.edge_count())
    }

    fn edges(&self) -> Vec<Edge> {
        dispatch!(self, g => g.edges())
    }
}

impl From<ListGraph> for AnyGraph {
    fn from(graph: ListGraph) -> Self {
        AnyGraph::List(graph)
    }
}

impl From<MatrixGraph> for AnyGraph {
    fn from(graph: MatrixGraph) -> Self {
        AnyGraph::Matrix(graph)
    }
}

impl From<SetGraph> for AnyGraph {
    fn from(graph: SetGraph) -> Self {
        AnyGraph::Set(graph)
    }
}

impl From<ArcGraph> for AnyGraph {
    fn from(graph: ArcGraph) -> Self {
        AnyGraph::Arc(graph)
    }
}
