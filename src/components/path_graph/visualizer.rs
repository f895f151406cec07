//! The embeddable visualizer: one graph, one surface, one overlay.
//!
//! [`GraphVisualizer`] owns the viewport transform, the overlay state and the
//! surface, and shares the graph read-only with the host. Every public
//! mutation finishes updating state and then redraws exactly once, so the
//! surface never shows a half-applied change.

use std::rc::Rc;

use log::{debug, warn};

use super::animation::{AnimationSequencer, PlaybackHandle, PlaybackStep};
use super::config::VisualizerConfig;
use super::error::Result;
use super::interaction::InteractionController;
use super::render::{self, FrameStats, Scene};
use super::scale::ScaleConfig;
use super::state::VisualState;
use super::surface::DrawingSurface;
use super::theme::Theme;
use super::transform::ViewportTransform;
use super::types::Graph;

/// Interactive, animatable view of a weighted graph.
pub struct GraphVisualizer<S: DrawingSurface> {
	graph: Rc<Graph>,
	surface: S,
	transform: ViewportTransform,
	state: VisualState,
	interaction: InteractionController,
	sequencer: AnimationSequencer,
	scale: ScaleConfig,
	theme: Theme,
	last_frame: FrameStats,
}

impl<S: DrawingSurface> GraphVisualizer<S> {
	/// Fits `graph` to the surface with the default configuration.
	///
	/// Nothing is drawn until the first mutation or [`Self::draw`].
	pub fn new(graph: Rc<Graph>, surface: S) -> Result<Self> {
		Self::with_config(graph, surface, &VisualizerConfig::default())
	}

	pub fn with_config(graph: Rc<Graph>, surface: S, config: &VisualizerConfig) -> Result<Self> {
		let (width, height) = surface.size();
		let transform = ViewportTransform::compute_initial(&graph, width, height)?;
		debug!(
			"path-graph: fitted {} nodes to {width}x{height} at scale {:.2}",
			graph.len(),
			transform.scale
		);

		Ok(Self {
			graph,
			surface,
			transform,
			state: VisualState::default(),
			interaction: InteractionController::new(config.anchored_zoom),
			sequencer: AnimationSequencer::default(),
			scale: ScaleConfig::default(),
			theme: config.resolve_theme(),
			last_frame: FrameStats::default(),
		})
	}

	/// Replaces the sizing rules used by subsequent frames.
	pub fn with_scale_config(mut self, scale: ScaleConfig) -> Self {
		self.scale = scale;
		self
	}

	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	pub fn transform(&self) -> &ViewportTransform {
		&self.transform
	}

	pub fn state(&self) -> &VisualState {
		&self.state
	}

	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Mutable access for hosts that resize or reconfigure their backend.
	/// Call [`Self::resize`] afterwards if the size changed.
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	/// Stats of the most recent frame.
	pub fn last_frame(&self) -> FrameStats {
		self.last_frame
	}

	/// Clears the surface and redraws grid, edges, nodes and labels.
	pub fn draw(&mut self) -> FrameStats {
		let scene = Scene {
			graph: &self.graph,
			transform: &self.transform,
			state: &self.state,
			config: &self.scale,
			theme: &self.theme,
		};
		self.last_frame = render::render(&scene, &mut self.surface);
		self.last_frame
	}

	pub fn set_current_node(&mut self, id: &str) {
		self.warn_unknown(id);
		self.state.set_current_node(id);
		self.draw();
	}

	pub fn add_explored_node(&mut self, id: &str) {
		self.warn_unknown(id);
		self.state.add_explored_node(id);
		self.draw();
	}

	/// Makes `id` current and explored with a single redraw.
	pub fn visit_node(&mut self, id: &str) {
		self.warn_unknown(id);
		self.state.set_current_node(id);
		self.state.add_explored_node(id);
		self.draw();
	}

	pub fn set_highlighted_path(&mut self, path: Vec<String>) {
		for id in &path {
			self.warn_unknown(id);
		}
		self.state.set_highlighted_path(path);
		self.draw();
	}

	/// Clears the overlay and redraws once. A running playback keeps going.
	pub fn reset(&mut self) {
		self.state.reset();
		self.draw();
	}

	/// Plays `path` over `duration_ms`, cancelling any playback in progress.
	///
	/// The first node is visited right away; later steps fire from
	/// [`Self::advance`]. An empty path changes nothing and returns a handle
	/// that is already done.
	pub fn animate_path(&mut self, path: Vec<String>, duration_ms: f64) -> PlaybackHandle {
		let handle = self.sequencer.start(path, duration_ms);
		self.advance(0.0);
		handle
	}

	/// Advances playback by `dt_ms`, applying each due step with one redraw.
	/// Returns the number of steps applied.
	pub fn advance(&mut self, dt_ms: f64) -> usize {
		let steps = self.sequencer.advance(dt_ms);
		let count = steps.len();
		for step in steps {
			match step {
				PlaybackStep::Visit(id) => self.visit_node(&id),
				PlaybackStep::Highlight(path) => self.set_highlighted_path(path),
			}
		}
		count
	}

	pub fn cancel_animation(&mut self) -> bool {
		self.sequencer.cancel()
	}

	pub fn is_animating(&self) -> bool {
		self.sequencer.is_running()
	}

	/// Refits the graph to the surface's current size and redraws. Pan and
	/// zoom are discarded. On error the previous transform is kept.
	pub fn resize(&mut self) -> Result<()> {
		let (width, height) = self.surface.size();
		self.transform = ViewportTransform::compute_initial(&self.graph, width, height)?;
		debug!("path-graph: resized to {width}x{height}");
		self.draw();
		Ok(())
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.interaction.pointer_down(x, y);
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if self.interaction.pointer_move(&mut self.transform, x, y) {
			self.draw();
		}
	}

	pub fn pointer_up(&mut self) {
		self.interaction.pointer_up();
	}

	/// Zooms out one step for a positive `delta_sign`, in otherwise.
	pub fn scroll(&mut self, delta_sign: f64) {
		self.interaction.scroll(&mut self.transform, delta_sign);
		self.draw();
	}

	/// Scroll with the pointer position, for anchored zoom.
	pub fn scroll_at(&mut self, delta_sign: f64, x: f64, y: f64) {
		self.interaction
			.scroll_at(&mut self.transform, delta_sign, x, y);
		self.draw();
	}

	fn warn_unknown(&self, id: &str) {
		if cfg!(debug_assertions) && !self.graph.contains(id) {
			warn!("path-graph: overlay references unknown node {id:?}");
		}
	}
}
