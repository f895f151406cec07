//! Errors raised while loading a graph or fitting it to a surface.

/// Result alias used across the visualizer.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Structural and input-validation failures.
///
/// These are surfaced once, at the call that received the offending input.
/// Overlay mutators (current node, explored set, path) never produce them.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
	/// Empty graph, degenerate bounding box, non-finite position or an
	/// unusable surface size.
	#[error("invalid graph: {0}")]
	InvalidGraph(String),

	/// A neighbor id that has no node entry of its own.
	#[error("dangling edge: {from} -> {to} (no node named {to:?})")]
	DanglingEdge {
		/// Node that lists the neighbor.
		from: String,
		/// Missing neighbor id.
		to: String,
	},

	/// Edge cost that is negative, NaN or infinite.
	#[error("invalid cost {cost} on edge {from} -> {to}")]
	InvalidCost {
		/// Node that lists the neighbor.
		from: String,
		/// Neighbor id.
		to: String,
		/// Offending cost value.
		cost: f64,
	},

	/// Scene or graph JSON that failed to deserialize.
	#[error("parse error: {0}")]
	Parse(String),
}

impl GraphError {
	/// Shorthand for [`GraphError::InvalidGraph`].
	pub fn invalid(msg: impl Into<String>) -> Self {
		Self::InvalidGraph(msg.into())
	}
}

impl From<serde_json::Error> for GraphError {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(err.to_string())
	}
}
