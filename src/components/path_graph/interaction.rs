//! Normalized pointer and scroll input.
//!
//! Events arrive already translated into surface coordinates. Each handler
//! updates the viewport and reports whether the view changed, so the caller
//! knows to redraw.

use super::transform::{ViewportTransform, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

/// Tracks an in-progress background drag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
	pub active: bool,
	pub last_x: f64,
	pub last_y: f64,
}

/// Translates input events into pan and zoom.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
	drag: DragState,
	/// Zoom around the pointer in [`Self::scroll_at`] instead of scaling
	/// about the surface origin.
	pub anchored_zoom: bool,
}

impl InteractionController {
	pub fn new(anchored_zoom: bool) -> Self {
		Self {
			anchored_zoom,
			..Self::default()
		}
	}

	pub fn drag(&self) -> &DragState {
		&self.drag
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.drag = DragState {
			active: true,
			last_x: x,
			last_y: y,
		};
	}

	/// Pans by the movement since the last pointer position. Returns `false`
	/// when no drag is in progress.
	pub fn pointer_move(&mut self, transform: &mut ViewportTransform, x: f64, y: f64) -> bool {
		if !self.drag.active {
			return false;
		}
		transform.pan(x - self.drag.last_x, y - self.drag.last_y);
		self.drag.last_x = x;
		self.drag.last_y = y;
		true
	}

	pub fn pointer_up(&mut self) {
		self.drag.active = false;
	}

	/// One discrete zoom step: out for a positive sign, in otherwise.
	pub fn scroll(&mut self, transform: &mut ViewportTransform, delta_sign: f64) {
		transform.zoom(zoom_factor(delta_sign));
	}

	/// Like [`Self::scroll`], anchored at `(x, y)` when `anchored_zoom` is set.
	pub fn scroll_at(&mut self, transform: &mut ViewportTransform, delta_sign: f64, x: f64, y: f64) {
		if self.anchored_zoom {
			transform.zoom_about(zoom_factor(delta_sign), x, y);
		} else {
			self.scroll(transform, delta_sign);
		}
	}
}

/// Collapses a raw wheel `deltaY` into a scroll sign. Zero (a horizontal
/// swipe) zooms in, like any other non-positive delta.
pub fn wheel_sign(delta_y: f64) -> f64 {
	if delta_y > 0.0 { 1.0 } else { -1.0 }
}

fn zoom_factor(delta_sign: f64) -> f64 {
	if delta_sign > 0.0 {
		ZOOM_OUT_FACTOR
	} else {
		ZOOM_IN_FACTOR
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn identity() -> ViewportTransform {
		ViewportTransform {
			scale: 1.0,
			offset_x: 0.0,
			offset_y: 0.0,
		}
	}

	#[test]
	fn move_without_drag_is_ignored() {
		let mut ctl = InteractionController::default();
		let mut t = identity();
		assert!(!ctl.pointer_move(&mut t, 50.0, 50.0));
		assert_eq!(t, identity());
	}

	#[test]
	fn drag_pans_incrementally() {
		let mut ctl = InteractionController::default();
		let mut t = identity();
		ctl.pointer_down(10.0, 10.0);
		assert!(ctl.pointer_move(&mut t, 15.0, 12.0));
		assert!(ctl.pointer_move(&mut t, 20.0, 20.0));
		assert_eq!((t.offset_x, t.offset_y), (10.0, 10.0));

		ctl.pointer_up();
		assert!(!ctl.drag().active);
		assert!(!ctl.pointer_move(&mut t, 100.0, 100.0));
		assert_eq!((t.offset_x, t.offset_y), (10.0, 10.0));
	}

	#[test]
	fn scroll_sign_picks_direction() {
		let mut ctl = InteractionController::default();
		let mut t = identity();
		ctl.scroll(&mut t, 1.0);
		assert_eq!(t.scale, ZOOM_OUT_FACTOR);
		ctl.scroll(&mut t, -1.0);
		assert!((t.scale - ZOOM_OUT_FACTOR * ZOOM_IN_FACTOR).abs() < 1e-12);
		ctl.scroll(&mut t, 0.0);
		assert!((t.scale - ZOOM_OUT_FACTOR * ZOOM_IN_FACTOR * ZOOM_IN_FACTOR).abs() < 1e-12);
	}

	#[test]
	fn horizontal_wheel_zooms_in() {
		assert_eq!(wheel_sign(120.0), 1.0);
		assert_eq!(wheel_sign(-3.0), -1.0);
		assert_eq!(wheel_sign(0.0), -1.0);
		assert_eq!(wheel_sign(f64::NAN), -1.0);

		let mut ctl = InteractionController::default();
		let mut t = identity();
		ctl.scroll_at(&mut t, wheel_sign(0.0), 40.0, 40.0);
		assert_eq!(t.scale, ZOOM_IN_FACTOR);
	}

	#[test]
	fn scroll_at_only_anchors_when_enabled() {
		let mut plain = InteractionController::default();
		let mut t = identity();
		plain.scroll_at(&mut t, -1.0, 100.0, 100.0);
		assert_eq!((t.offset_x, t.offset_y), (0.0, 0.0));

		let mut anchored = InteractionController::new(true);
		let mut t = identity();
		anchored.scroll_at(&mut t, -1.0, 100.0, 100.0);
		let (gx, gy) = t.surface_to_graph(100.0, 100.0);
		assert!((gx - 100.0).abs() < 1e-9 && (gy - 100.0).abs() < 1e-9);
	}
}
