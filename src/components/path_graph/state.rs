//! Traversal overlay read by the render pipeline.
//!
//! [`VisualState`] only stores ids; it never checks them against the graph.
//! An id the graph does not contain simply matches no node when drawn.

use std::collections::HashSet;

/// How a node is drawn, by descending precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
	/// The node the traversal is currently on.
	Current,
	/// Visited earlier in the traversal.
	Explored,
	/// Part of the highlighted path but not visited.
	OnPath,
	Idle,
}

/// Current node, explored set and highlighted path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualState {
	current_node: Option<String>,
	explored_nodes: HashSet<String>,
	highlighted_path: Vec<String>,
}

impl VisualState {
	pub fn current_node(&self) -> Option<&str> {
		self.current_node.as_deref()
	}

	pub fn explored_nodes(&self) -> &HashSet<String> {
		&self.explored_nodes
	}

	pub fn highlighted_path(&self) -> &[String] {
		&self.highlighted_path
	}

	pub fn set_current_node(&mut self, id: impl Into<String>) {
		self.current_node = Some(id.into());
	}

	/// Returns `false` when `id` was already explored.
	pub fn add_explored_node(&mut self, id: impl Into<String>) -> bool {
		self.explored_nodes.insert(id.into())
	}

	pub fn set_highlighted_path(&mut self, path: Vec<String>) {
		self.highlighted_path = path;
	}

	/// Clears current node, explored set and path, in that order.
	pub fn reset(&mut self) {
		self.current_node = None;
		self.explored_nodes.clear();
		self.highlighted_path.clear();
	}

	/// True iff `a` and `b` are consecutive in the highlighted path, in
	/// either order.
	pub fn is_edge_in_path(&self, a: &str, b: &str) -> bool {
		self.highlighted_path
			.windows(2)
			.any(|pair| (pair[0] == a && pair[1] == b) || (pair[0] == b && pair[1] == a))
	}

	pub fn node_role(&self, id: &str) -> NodeRole {
		if self.current_node.as_deref() == Some(id) {
			NodeRole::Current
		} else if self.explored_nodes.contains(id) {
			NodeRole::Explored
		} else if self.highlighted_path.iter().any(|p| p == id) {
			NodeRole::OnPath
		} else {
			NodeRole::Idle
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn path(ids: &[&str]) -> Vec<String> {
		ids.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn edge_in_path_requires_adjacency() {
		let mut state = VisualState::default();
		state.set_highlighted_path(path(&["A", "B", "C"]));

		assert!(state.is_edge_in_path("A", "B"));
		assert!(state.is_edge_in_path("B", "A"));
		assert!(state.is_edge_in_path("C", "B"));
		assert!(!state.is_edge_in_path("A", "C"));
		assert!(!state.is_edge_in_path("A", "D"));
	}

	#[test]
	fn single_node_path_highlights_no_edge() {
		let mut state = VisualState::default();
		state.set_highlighted_path(path(&["A"]));
		assert!(!state.is_edge_in_path("A", "A"));
	}

	#[test]
	fn explored_is_idempotent() {
		let mut state = VisualState::default();
		assert!(state.add_explored_node("A"));
		assert!(!state.add_explored_node("A"));
		assert_eq!(state.explored_nodes().len(), 1);
	}

	#[test]
	fn roles_follow_precedence() {
		let mut state = VisualState::default();
		state.set_highlighted_path(path(&["A", "B", "C"]));
		state.add_explored_node("A");
		state.add_explored_node("B");
		state.set_current_node("A");

		assert_eq!(state.node_role("A"), NodeRole::Current);
		assert_eq!(state.node_role("B"), NodeRole::Explored);
		assert_eq!(state.node_role("C"), NodeRole::OnPath);
		assert_eq!(state.node_role("D"), NodeRole::Idle);
	}

	#[test]
	fn reset_clears_everything() {
		let mut state = VisualState::default();
		state.set_current_node("A");
		state.add_explored_node("A");
		state.set_highlighted_path(path(&["A", "B"]));
		state.reset();
		assert_eq!(state, VisualState::default());
	}
}
