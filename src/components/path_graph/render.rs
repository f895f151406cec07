//! Surface rendering for the path graph.
//!
//! Every frame is a full clear-and-redraw in four passes, back to front:
//! 1. Grid (decorative, spaced with the viewport scale)
//! 2. Edges with cost labels, each undirected edge once
//! 3. Nodes, filled by traversal role
//! 4. Node id labels
//!
//! Rendering reads graph, transform and overlay state only, so drawing twice
//! without a mutation in between issues the same commands.

use std::collections::HashSet;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{NodeRole, VisualState};
use super::surface::{DrawingSurface, Font, Glow, Style};
use super::theme::Theme;
use super::transform::ViewportTransform;
use super::types::Graph;

/// What one frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
	pub grid_lines: usize,
	pub edges: usize,
	pub nodes: usize,
}

/// Borrowed inputs for a frame.
pub struct Scene<'a> {
	pub graph: &'a Graph,
	pub transform: &'a ViewportTransform,
	pub state: &'a VisualState,
	pub config: &'a ScaleConfig,
	pub theme: &'a Theme,
}

/// Renders the complete scene to `surface`.
pub fn render<S: DrawingSurface + ?Sized>(scene: &Scene<'_>, surface: &mut S) -> FrameStats {
	let scale = ScaledValues::new(scene.config, scene.transform.scale);

	surface.clear();
	let grid_lines = draw_grid(surface, &scale, scene.theme);
	let edges = draw_edges(scene, surface, &scale);
	let nodes = draw_nodes(scene, surface, &scale);
	draw_labels(scene, surface, &scale);

	FrameStats {
		grid_lines,
		edges,
		nodes,
	}
}

/// Sorted endpoint pair identifying an undirected edge.
pub fn canonical_edge<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
	if a <= b { (a, b) } else { (b, a) }
}

fn draw_grid<S: DrawingSurface + ?Sized>(
	surface: &mut S,
	scale: &ScaledValues,
	theme: &Theme,
) -> usize {
	let Some(spacing) = scale.grid_spacing else {
		return 0;
	};
	let (width, height) = surface.size();

	surface.set_style(&Style {
		stroke: theme.grid.color,
		line_width: theme.grid.line_width,
		..Style::default()
	});

	let mut lines = 0;
	let mut x = 0.0;
	while x < width {
		surface.draw_line((x, 0.0), (x, height));
		x += spacing;
		lines += 1;
	}
	let mut y = 0.0;
	while y < height {
		surface.draw_line((0.0, y), (width, y));
		y += spacing;
		lines += 1;
	}
	lines
}

fn draw_edges<S: DrawingSurface + ?Sized>(
	scene: &Scene<'_>,
	surface: &mut S,
	scale: &ScaledValues,
) -> usize {
	let (graph, theme) = (scene.graph, scene.theme);
	let mut drawn: HashSet<(&str, &str)> = HashSet::new();

	let cost_style = Style {
		fill: theme.edge.cost_color,
		font: Font {
			size: scale.cost_font_size,
			bold: false,
			family: theme.font_family.to_string(),
		},
		..Style::default()
	};

	for (from, to, cost) in graph.adjacencies() {
		let key = canonical_edge(from, to);
		if !drawn.insert(key) {
			continue;
		}
		let (Some(a), Some(b)) = (graph.node(key.0), graph.node(key.1)) else {
			continue;
		};

		let p1 = scene.transform.transform_point(a.x, a.y);
		let p2 = scene.transform.transform_point(b.x, b.y);

		let style = if scene.state.is_edge_in_path(key.0, key.1) {
			Style {
				stroke: theme.edge.highlight_color,
				line_width: theme.edge.highlight_width,
				..Style::default()
			}
		} else {
			Style {
				stroke: theme.edge.color,
				line_width: theme.edge.line_width,
				..Style::default()
			}
		};
		surface.set_style(&style);
		surface.draw_line(p1, p2);

		let cost = graph.edge_cost(key.0, key.1).unwrap_or(cost);
		let (nx, ny) = label_normal(p1, p2);
		let mid = ((p1.0 + p2.0) / 2.0, (p1.1 + p2.1) / 2.0);
		surface.set_style(&cost_style);
		surface.draw_text(
			&format!("{cost:.1}"),
			(mid.0 + nx * scale.cost_offset, mid.1 + ny * scale.cost_offset),
		);
	}
	drawn.len()
}

/// Unit normal of segment `p1 -> p2`, flipped to point up (or left for
/// vertical segments). Zero-length segments get straight up.
fn label_normal(p1: (f64, f64), p2: (f64, f64)) -> (f64, f64) {
	let (dx, dy) = (p2.0 - p1.0, p2.1 - p1.1);
	let len = (dx * dx + dy * dy).sqrt();
	if len < 1e-9 {
		return (0.0, -1.0);
	}
	let (nx, ny) = (dy / len, -dx / len);
	if ny > 0.0 || (ny == 0.0 && nx > 0.0) {
		(-nx, -ny)
	} else {
		(nx, ny)
	}
}

fn draw_nodes<S: DrawingSurface + ?Sized>(
	scene: &Scene<'_>,
	surface: &mut S,
	scale: &ScaledValues,
) -> usize {
	let node_style = &scene.theme.node;
	let mut count = 0;

	for (id, node) in scene.graph.nodes() {
		let role = scene.state.node_role(id);
		let fill = match role {
			NodeRole::Current => node_style.current_fill,
			NodeRole::Explored => node_style.visited_fill,
			NodeRole::OnPath => node_style.path_fill,
			NodeRole::Idle => node_style.fill,
		};
		let is_current = role == NodeRole::Current;

		surface.set_style(&Style {
			stroke: node_style.border_color,
			fill,
			line_width: if is_current {
				node_style.current_border_width
			} else {
				node_style.border_width
			},
			glow: (is_current && node_style.glow_blur > 0.0).then_some(Glow {
				color: node_style.glow_color,
				blur: node_style.glow_blur,
			}),
			..Style::default()
		});
		surface.draw_circle(
			scene.transform.transform_point(node.x, node.y),
			scale.node_radius,
		);
		count += 1;
	}
	count
}

fn draw_labels<S: DrawingSurface + ?Sized>(
	scene: &Scene<'_>,
	surface: &mut S,
	scale: &ScaledValues,
) {
	surface.set_style(&Style {
		fill: scene.theme.label_color,
		font: Font {
			size: scale.label_font_size,
			bold: true,
			family: scene.theme.font_family.to_string(),
		},
		..Style::default()
	});

	for (id, node) in scene.graph.nodes() {
		surface.draw_text(id, scene.transform.transform_point(node.x, node.y));
	}
}
