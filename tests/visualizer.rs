//! End-to-end behavior of `GraphVisualizer` against a recording surface.

use std::collections::HashSet;
use std::rc::Rc;

use path_graph::{
	DrawCommand, Graph, GraphError, GraphVisualizer, PlaybackStatus, RecordingSurface,
	VisualizerConfig,
};

fn two_nodes() -> Graph {
	Graph::from_json(
		r#"{
			"A": { "x": 0, "y": 0, "neighbors": { "B": 1.0 } },
			"B": { "x": 100, "y": 50, "neighbors": { "A": 1.0 } }
		}"#,
	)
	.unwrap()
}

fn courier_map() -> Graph {
	Graph::from_json(
		r#"{
			"nodes": {
				"A": { "x": 0, "y": 0 }, "B": { "x": 2, "y": 1 }, "C": { "x": 1, "y": 3 },
				"D": { "x": 4, "y": 0 }, "E": { "x": 3, "y": 2 }, "G": { "x": 6, "y": 1 }
			},
			"edges": [
				{ "from": "A", "to": "B", "cost": 2.2 }, { "from": "A", "to": "C", "cost": 3.2 },
				{ "from": "B", "to": "C", "cost": 2.2 }, { "from": "B", "to": "E", "cost": 1.4 },
				{ "from": "B", "to": "D", "cost": 2.2 }, { "from": "D", "to": "E", "cost": 2.2 },
				{ "from": "D", "to": "G", "cost": 2.2 }
			]
		}"#,
	)
	.unwrap()
}

fn visualizer(graph: Graph) -> GraphVisualizer<RecordingSurface> {
	GraphVisualizer::new(Rc::new(graph), RecordingSurface::new(800.0, 600.0)).unwrap()
}

fn ids(path: &[&str]) -> Vec<String> {
	path.iter().map(|s| s.to_string()).collect()
}

/// Edge lines in the current frame: every line not drawn in the grid color.
fn edge_lines(vis: &GraphVisualizer<RecordingSurface>) -> Vec<((f64, f64), (f64, f64))> {
	let grid = vis.theme().grid.color;
	vis.surface()
		.styled()
		.into_iter()
		.filter_map(|(style, cmd)| match cmd {
			DrawCommand::Line { from, to } if style.stroke != grid => Some((*from, *to)),
			_ => None,
		})
		.collect()
}

#[test]
fn single_edge_is_drawn_once_with_cost_label() {
	let mut vis = visualizer(two_nodes());
	let stats = vis.draw();

	assert_eq!(stats.edges, 1);
	assert_eq!(edge_lines(&vis).len(), 1);
	assert_eq!(
		vis.surface().texts().iter().filter(|t| **t == "1.0").count(),
		1
	);
}

#[test]
fn every_undirected_edge_is_drawn_exactly_once() {
	let graph = courier_map();
	let mut vis = visualizer(graph.clone());
	let stats = vis.draw();

	let expected: HashSet<(&str, &str)> = graph
		.adjacencies()
		.map(|(a, b, _)| path_graph::canonical_edge(a, b))
		.collect();
	assert_eq!(expected.len(), 7);
	assert_eq!(stats.edges, 7);
	assert_eq!(edge_lines(&vis).len(), 7);
}

#[test]
fn draw_is_idempotent() {
	let mut vis = visualizer(courier_map());
	vis.set_highlighted_path(ids(&["A", "B", "D", "G"]));
	let first = vis.surface().commands().to_vec();
	vis.draw();
	assert_eq!(vis.surface().commands(), first.as_slice());
}

#[test]
fn nodes_fit_inside_the_surface() {
	let vis = visualizer(courier_map());
	let t = vis.transform();
	assert!(t.scale > 0.0);
	for (_, node) in vis.graph().nodes() {
		let (x, y) = t.transform_point(node.x, node.y);
		assert!((0.0..=800.0).contains(&x) && (0.0..=600.0).contains(&y));
	}
}

#[test]
fn single_node_graph_is_invalid() {
	let graph = Graph::from_json(r#"{ "A": { "x": 5, "y": 5, "neighbors": {} } }"#).unwrap();
	let err = GraphVisualizer::new(Rc::new(graph), RecordingSurface::new(800.0, 600.0))
		.err()
		.unwrap();
	assert!(matches!(err, GraphError::InvalidGraph(_)));
}

#[test]
fn each_mutator_redraws_once() {
	let mut vis = visualizer(two_nodes());
	vis.set_current_node("A");
	vis.add_explored_node("A");
	vis.set_highlighted_path(ids(&["A", "B"]));
	vis.reset();
	assert_eq!(vis.surface().frames(), 4);
}

#[test]
fn explored_set_is_idempotent() {
	let mut vis = visualizer(two_nodes());
	vis.add_explored_node("A");
	vis.add_explored_node("A");
	assert_eq!(vis.state().explored_nodes().len(), 1);
}

#[test]
fn reset_clears_overlay() {
	let mut vis = visualizer(two_nodes());
	vis.set_current_node("B");
	vis.add_explored_node("A");
	vis.set_highlighted_path(ids(&["A", "B"]));
	vis.reset();

	assert_eq!(vis.state().current_node(), None);
	assert!(vis.state().explored_nodes().is_empty());
	assert!(vis.state().highlighted_path().is_empty());
}

#[test]
fn unknown_ids_are_accepted_and_inert() {
	let mut vis = visualizer(two_nodes());
	vis.draw();
	let before = vis.surface().commands().to_vec();

	vis.set_current_node("Z");
	vis.add_explored_node("Y");
	assert_eq!(vis.state().current_node(), Some("Z"));
	assert_eq!(vis.surface().commands(), before.as_slice());
}

#[test]
fn playback_follows_the_example_timeline() {
	let mut vis = visualizer(two_nodes());
	let handle = vis.animate_path(ids(&["A", "B"]), 1000.0);

	assert_eq!(vis.state().current_node(), Some("A"));
	assert_eq!(vis.state().explored_nodes().len(), 1);
	assert!(vis.state().highlighted_path().is_empty());

	vis.advance(500.0);
	assert_eq!(vis.state().current_node(), Some("B"));
	assert!(vis.state().explored_nodes().contains("A"));
	assert!(vis.state().explored_nodes().contains("B"));
	assert!(vis.state().highlighted_path().is_empty());

	vis.advance(500.0);
	assert_eq!(vis.state().highlighted_path(), ["A", "B"]);
	assert_eq!(handle.status(), PlaybackStatus::Done);
	assert!(!vis.is_animating());
}

#[test]
fn playback_observes_path_order_with_growing_explored_set() {
	let path = ["A", "B", "E", "D", "G"];
	let mut vis = visualizer(courier_map());
	vis.animate_path(ids(&path), 500.0);

	let mut seen = vec![vis.state().current_node().unwrap().to_string()];
	let mut explored = vis.state().explored_nodes().len();
	let mut frames = vis.surface().frames();
	while vis.is_animating() {
		let steps = vis.advance(25.0);
		assert_eq!(vis.surface().frames() - frames, steps);
		frames = vis.surface().frames();

		let now = vis.state().explored_nodes().len();
		assert!(now >= explored);
		explored = now;
		if let Some(current) = vis.state().current_node() {
			if seen.last().map(String::as_str) != Some(current) {
				seen.push(current.to_string());
			}
		}
	}

	assert_eq!(seen, ids(&path));
	assert_eq!(vis.state().current_node(), Some("G"));
	assert!(path.iter().all(|id| vis.state().explored_nodes().contains(*id)));
	assert_eq!(vis.state().highlighted_path(), path);
}

#[test]
fn empty_playback_changes_nothing() {
	let mut vis = visualizer(two_nodes());
	let handle = vis.animate_path(Vec::new(), 1000.0);
	assert_eq!(handle.status(), PlaybackStatus::Done);
	assert_eq!(vis.surface().frames(), 0);
	assert_eq!(vis.state().current_node(), None);
}

#[test]
fn cancelled_playback_freezes_overlay() {
	let mut vis = visualizer(courier_map());
	let handle = vis.animate_path(ids(&["A", "B", "D"]), 300.0);
	vis.advance(100.0);
	assert!(handle.cancel());

	let frames = vis.surface().frames();
	assert_eq!(vis.advance(1000.0), 0);
	assert_eq!(vis.surface().frames(), frames);
	assert_eq!(vis.state().current_node(), Some("B"));
	assert!(vis.state().highlighted_path().is_empty());
}

#[test]
fn restarting_playback_cancels_the_previous_run() {
	let mut vis = visualizer(courier_map());
	let first = vis.animate_path(ids(&["A", "B", "D"]), 300.0);
	let second = vis.animate_path(ids(&["C", "E"]), 200.0);
	assert_eq!(first.status(), PlaybackStatus::Cancelled);

	vis.advance(100.0);
	vis.advance(100.0);
	assert_eq!(second.status(), PlaybackStatus::Done);
	assert_eq!(vis.state().highlighted_path(), ["C", "E"]);
	assert!(!first.cancel());
	assert!(vis.state().explored_nodes().contains("A"));
	assert!(!vis.state().explored_nodes().contains("B"));
}

#[test]
fn drag_pans_and_redraws_only_while_pressed() {
	let mut vis = visualizer(two_nodes());
	let start = *vis.transform();

	vis.pointer_move(10.0, 10.0);
	assert_eq!(vis.surface().frames(), 0);

	vis.pointer_down(100.0, 100.0);
	vis.pointer_move(130.0, 90.0);
	vis.pointer_up();
	vis.pointer_move(500.0, 500.0);

	assert_eq!(vis.surface().frames(), 1);
	assert_eq!(vis.transform().offset_x, start.offset_x + 30.0);
	assert_eq!(vis.transform().offset_y, start.offset_y - 10.0);
	assert_eq!(vis.transform().scale, start.scale);
}

#[test]
fn scroll_zooms_without_anchoring_by_default() {
	let mut vis = visualizer(two_nodes());
	let start = *vis.transform();

	vis.scroll(1.0);
	assert!((vis.transform().scale - start.scale * 0.9).abs() < 1e-9);
	vis.scroll_at(-1.0, 400.0, 300.0);
	assert!((vis.transform().scale - start.scale * 0.9 * 1.1).abs() < 1e-9);
	assert_eq!(vis.transform().offset_x, start.offset_x);
	assert_eq!(vis.surface().frames(), 2);
}

#[test]
fn anchored_zoom_keeps_point_under_cursor() {
	let config = VisualizerConfig {
		anchored_zoom: true,
		..VisualizerConfig::default()
	};
	let mut vis = GraphVisualizer::with_config(
		Rc::new(two_nodes()),
		RecordingSurface::new(800.0, 600.0),
		&config,
	)
	.unwrap();
	let before = vis.transform().surface_to_graph(250.0, 120.0);
	vis.scroll_at(-1.0, 250.0, 120.0);
	let after = vis.transform().surface_to_graph(250.0, 120.0);
	assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);
}

#[test]
fn resize_refits_to_the_new_surface() {
	let mut vis = visualizer(two_nodes());
	vis.pointer_down(0.0, 0.0);
	vis.pointer_move(40.0, 40.0);
	vis.pointer_up();

	vis.surface_mut().set_size(400.0, 300.0);
	vis.resize().unwrap();
	let expected = path_graph::ViewportTransform::compute_initial(vis.graph(), 400.0, 300.0).unwrap();
	assert_eq!(*vis.transform(), expected);

	vis.surface_mut().set_size(0.0, 300.0);
	assert!(vis.resize().is_err());
	assert_eq!(*vis.transform(), expected);
}
