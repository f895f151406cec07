//! Graph data structures for input to the path graph component.
//!
//! A [`Graph`] is an immutable map from node id to position and weighted
//! neighbors. It is validated once at construction so the renderer can look
//! up any neighbor without checking for dangling ids.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::{GraphError, Result};

/// A node in the graph: a graph-space position plus weighted neighbors.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphNode {
	/// Graph-space x coordinate.
	pub x: f64,
	/// Graph-space y coordinate.
	pub y: f64,
	/// Neighbor id to edge cost. Undirected edges appear on both endpoints.
	#[serde(default)]
	pub neighbors: BTreeMap<String, f64>,
	/// Optional heuristic estimate carried along from a search backend.
	/// Not rendered.
	#[serde(default, rename = "h")]
	pub heuristic: Option<f64>,
}

/// Axis-aligned bounding box of all node positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub min_x: f64,
	pub max_x: f64,
	pub min_y: f64,
	pub max_y: f64,
}

impl Bounds {
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}
}

/// Validated, read-only weighted graph.
///
/// Nodes iterate in id order, which keeps rendering deterministic.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "GraphSource")]
pub struct Graph {
	nodes: BTreeMap<String, GraphNode>,
}

impl Graph {
	/// Validates `nodes` and wraps them.
	///
	/// Fails with [`GraphError::DanglingEdge`] when a neighbor id has no node
	/// entry, [`GraphError::InvalidCost`] for negative or non-finite costs and
	/// [`GraphError::InvalidGraph`] for non-finite positions.
	pub fn new(nodes: BTreeMap<String, GraphNode>) -> Result<Self> {
		for (id, node) in &nodes {
			if !node.x.is_finite() || !node.y.is_finite() {
				return Err(GraphError::invalid(format!(
					"node {id:?} has a non-finite position ({}, {})",
					node.x, node.y
				)));
			}
			for (neighbor, &cost) in &node.neighbors {
				if !nodes.contains_key(neighbor) {
					return Err(GraphError::DanglingEdge {
						from: id.clone(),
						to: neighbor.clone(),
					});
				}
				if !cost.is_finite() || cost < 0.0 {
					return Err(GraphError::InvalidCost {
						from: id.clone(),
						to: neighbor.clone(),
						cost,
					});
				}
			}
		}
		Ok(Self { nodes })
	}

	/// Parses either JSON shape accepted by [`Graph`]'s `Deserialize` impl.
	///
	/// Syntax errors come back as [`GraphError::Parse`]; validation errors
	/// keep their own variant.
	pub fn from_json(json: &str) -> Result<Self> {
		let source: GraphSource = serde_json::from_str(json)?;
		Graph::try_from(source)
	}

	pub fn builder() -> GraphBuilder {
		GraphBuilder::default()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.nodes.contains_key(id)
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.get(id)
	}

	/// All nodes in id order.
	pub fn nodes(&self) -> impl Iterator<Item = (&str, &GraphNode)> {
		self.nodes.iter().map(|(id, node)| (id.as_str(), node))
	}

	/// Every `(node, neighbor, cost)` triple. Undirected edges show up twice.
	pub fn adjacencies(&self) -> impl Iterator<Item = (&str, &str, f64)> {
		self.nodes.iter().flat_map(|(id, node)| {
			node.neighbors
				.iter()
				.map(move |(neighbor, &cost)| (id.as_str(), neighbor.as_str(), cost))
		})
	}

	/// Cost of the directed entry `from -> to`, if present.
	pub fn cost(&self, from: &str, to: &str) -> Option<f64> {
		self.nodes.get(from)?.neighbors.get(to).copied()
	}

	/// Cost shown for the undirected edge between `a` and `b`: the lower of
	/// the two directed entries when both exist.
	pub fn edge_cost(&self, a: &str, b: &str) -> Option<f64> {
		match (self.cost(a, b), self.cost(b, a)) {
			(Some(ab), Some(ba)) => Some(ab.min(ba)),
			(ab, ba) => ab.or(ba),
		}
	}

	/// Bounding box of all node positions, `None` for an empty graph.
	pub fn bounds(&self) -> Option<Bounds> {
		let mut nodes = self.nodes.values();
		let first = nodes.next()?;
		let init = Bounds {
			min_x: first.x,
			max_x: first.x,
			min_y: first.y,
			max_y: first.y,
		};
		Some(nodes.fold(init, |b, n| Bounds {
			min_x: b.min_x.min(n.x),
			max_x: b.max_x.max(n.x),
			min_y: b.min_y.min(n.y),
			max_y: b.max_y.max(n.y),
		}))
	}
}

/// Incremental construction of a [`Graph`] with undirected edges.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
	nodes: BTreeMap<String, GraphNode>,
	edges: Vec<(String, String, f64)>,
}

impl GraphBuilder {
	pub fn node(mut self, id: impl Into<String>, x: f64, y: f64) -> Self {
		self.nodes.insert(
			id.into(),
			GraphNode {
				x,
				y,
				..GraphNode::default()
			},
		);
		self
	}

	/// Adds an undirected edge; both endpoints receive the cost.
	pub fn edge(mut self, a: impl Into<String>, b: impl Into<String>, cost: f64) -> Self {
		self.edges.push((a.into(), b.into(), cost));
		self
	}

	pub fn build(mut self) -> Result<Graph> {
		for (a, b, cost) in self.edges {
			link(&mut self.nodes, &a, &b, cost)?;
		}
		Graph::new(self.nodes)
	}
}

fn link(nodes: &mut BTreeMap<String, GraphNode>, a: &str, b: &str, cost: f64) -> Result<()> {
	for (from, to) in [(a, b), (b, a)] {
		if !nodes.contains_key(to) {
			return Err(GraphError::DanglingEdge {
				from: from.to_string(),
				to: to.to_string(),
			});
		}
	}
	for (from, to) in [(a, b), (b, a)] {
		if let Some(node) = nodes.get_mut(from) {
			node.neighbors.insert(to.to_string(), cost);
		}
	}
	Ok(())
}

/// Edge record in the edge-list JSON shape.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct EdgeRecord {
	from: String,
	to: String,
	cost: f64,
}

/// The two accepted JSON shapes: `{ nodes, edges }` as served by a search
/// backend, or a plain id -> node adjacency map.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum GraphSource {
	EdgeList {
		nodes: BTreeMap<String, GraphNode>,
		edges: Vec<EdgeRecord>,
	},
	Adjacency(BTreeMap<String, GraphNode>),
}

impl TryFrom<GraphSource> for Graph {
	type Error = GraphError;

	fn try_from(source: GraphSource) -> Result<Self> {
		match source {
			GraphSource::Adjacency(nodes) => Graph::new(nodes),
			GraphSource::EdgeList { mut nodes, edges } => {
				for edge in edges {
					link(&mut nodes, &edge.from, &edge.to, edge.cost)?;
				}
				Graph::new(nodes)
			}
		}
	}
}
