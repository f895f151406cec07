//! Zoom-dependent sizing for graph visuals.
//!
//! Everything is drawn in surface space, so sizes are computed per frame from
//! the viewport scale. Each element grows with the zoom factor
//! `scale / reference_scale` but stops growing at its own cap, which keeps
//! labels and nodes legible without letting them swamp the view when zoomed
//! in.

/// A base size paired with the zoom factor at which it stops growing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CappedSize {
	/// Size in surface units at zoom factor 1.
	pub base: f64,
	/// Largest zoom factor applied to `base`.
	pub max_factor: f64,
}

impl CappedSize {
	pub const fn new(base: f64, max_factor: f64) -> Self {
		Self { base, max_factor }
	}

	/// Size in surface units for zoom factor `factor`.
	pub fn apply(&self, factor: f64) -> f64 {
		self.base * factor.min(self.max_factor)
	}
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleConfig {
	/// Viewport scale treated as zoom factor 1.
	pub reference_scale: f64,
	/// Grid spacing in graph-space units.
	pub grid_unit: f64,
	/// Below this surface-space spacing the grid is not drawn.
	pub min_grid_spacing: f64,
	pub node_radius: CappedSize,
	pub label_font: CappedSize,
	pub cost_font: CappedSize,
	/// Perpendicular distance of cost labels from their edge, surface units.
	pub cost_offset: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			reference_scale: 50.0,
			grid_unit: 50.0,
			min_grid_spacing: 2.0,
			node_radius: CappedSize::new(20.0, 1.5),
			label_font: CappedSize::new(14.0, 1.2),
			cost_font: CappedSize::new(12.0, 1.0),
			cost_offset: 5.0,
		}
	}
}

/// Pre-computed sizes for one viewport scale.
///
/// Create this once per frame and pass it to the drawing passes.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledValues {
	/// Current viewport scale.
	pub scale: f64,
	/// Surface-space distance between grid lines, `None` when too dense to draw.
	pub grid_spacing: Option<f64>,
	pub node_radius: f64,
	pub label_font_size: f64,
	pub cost_font_size: f64,
	pub cost_offset: f64,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, scale: f64) -> Self {
		let factor = scale / config.reference_scale;
		let spacing = config.grid_unit * scale;

		Self {
			scale,
			grid_spacing: (spacing.is_finite() && spacing >= config.min_grid_spacing)
				.then_some(spacing),
			node_radius: config.node_radius.apply(factor),
			label_font_size: config.label_font.apply(factor),
			cost_font_size: config.cost_font.apply(factor),
			cost_offset: config.cost_offset,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sizes_track_zoom_until_capped() {
		let config = ScaleConfig::default();

		let small = ScaledValues::new(&config, 25.0);
		assert_eq!(small.node_radius, 10.0);
		assert_eq!(small.label_font_size, 7.0);
		assert_eq!(small.cost_font_size, 6.0);

		let large = ScaledValues::new(&config, 500.0);
		assert_eq!(large.node_radius, 30.0);
		assert!((large.label_font_size - 16.8).abs() < 1e-9);
		assert_eq!(large.cost_font_size, 12.0);
	}

	#[test]
	fn dense_grid_is_dropped() {
		let config = ScaleConfig::default();
		assert_eq!(ScaledValues::new(&config, 1.0).grid_spacing, Some(50.0));
		assert_eq!(ScaledValues::new(&config, 0.01).grid_spacing, None);
	}
}
