//! Graph-space to surface-space mapping.
//!
//! The transform is fitted once to the graph's bounding box, then nudged by
//! pan (additive offset) and zoom (multiplicative scale). Neither is clamped,
//! and plain [`ViewportTransform::zoom`] does not anchor to the pointer, so
//! repeated zooming drifts the focal point. [`ViewportTransform::zoom_about`]
//! is the anchored alternative.

use super::error::{GraphError, Result};
use super::types::Graph;

/// Share of the surface the bounding box may occupy on each axis.
pub const FIT_MARGIN: f64 = 0.8;
/// Upper bound on the fitted scale so tiny graphs are not blown up.
pub const MAX_FIT_SCALE: f64 = 80.0;
/// Scale multiplier for one zoom-in step.
pub const ZOOM_IN_FACTOR: f64 = 1.1;
/// Scale multiplier for one zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Affine scale + offset applied to every graph-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
	pub scale: f64,
	pub offset_x: f64,
	pub offset_y: f64,
}

impl ViewportTransform {
	/// Fits `graph` into a `width` x `height` surface, centered, using at most
	/// [`FIT_MARGIN`] of each dimension.
	///
	/// Fails with [`GraphError::InvalidGraph`] for an empty graph, a bounding
	/// box with zero width or height, or a surface with no usable area.
	pub fn compute_initial(graph: &Graph, width: f64, height: f64) -> Result<Self> {
		if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
			return Err(GraphError::invalid(format!(
				"surface size {width}x{height} has no drawable area"
			)));
		}
		let bounds = graph
			.bounds()
			.ok_or_else(|| GraphError::invalid("graph has no nodes"))?;
		let (graph_w, graph_h) = (bounds.width(), bounds.height());
		if graph_w == 0.0 || graph_h == 0.0 {
			return Err(GraphError::invalid(format!(
				"bounding box is degenerate ({graph_w} x {graph_h})"
			)));
		}

		let scale = (width * FIT_MARGIN / graph_w)
			.min(height * FIT_MARGIN / graph_h)
			.min(MAX_FIT_SCALE);

		Ok(Self {
			scale,
			offset_x: (width - graph_w * scale) / 2.0 - bounds.min_x * scale,
			offset_y: (height - graph_h * scale) / 2.0 - bounds.min_y * scale,
		})
	}

	pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
		(x * self.scale + self.offset_x, y * self.scale + self.offset_y)
	}

	/// Inverse of [`Self::transform_point`].
	pub fn surface_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.offset_x) / self.scale, (sy - self.offset_y) / self.scale)
	}

	pub fn pan(&mut self, dx: f64, dy: f64) {
		self.offset_x += dx;
		self.offset_y += dy;
	}

	/// Multiplies the scale; offsets are left alone.
	pub fn zoom(&mut self, factor: f64) {
		self.scale *= factor;
	}

	/// Zooms so the graph point under surface position `(x, y)` stays put.
	pub fn zoom_about(&mut self, factor: f64, x: f64, y: f64) {
		self.offset_x = x - (x - self.offset_x) * factor;
		self.offset_y = y - (y - self.offset_y) * factor;
		self.scale *= factor;
	}
}
