//! [`DrawingSurface`] backed by an HTML canvas 2D context.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::surface::{DrawingSurface, Style};

/// Draws onto a `<canvas>` through its 2D rendering context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
		Self { ctx, width, height }
	}

	/// Records the canvas' new pixel size. The canvas element itself is
	/// resized by the host.
	pub fn set_size(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

impl DrawingSurface for CanvasSurface {
	fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
	}

	fn set_style(&mut self, style: &Style) {
		let ctx = &self.ctx;
		ctx.set_stroke_style_str(&style.stroke.to_css());
		ctx.set_fill_style_str(&style.fill.to_css());
		ctx.set_line_width(style.line_width);
		ctx.set_font(&style.font.to_css());
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		match style.glow {
			Some(glow) => {
				ctx.set_shadow_color(&glow.color.to_css());
				ctx.set_shadow_blur(glow.blur);
			}
			None => {
				ctx.set_shadow_color("transparent");
				ctx.set_shadow_blur(0.0);
			}
		}
	}

	fn draw_line(&mut self, from: (f64, f64), to: (f64, f64)) {
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}

	fn draw_circle(&mut self, center: (f64, f64), radius: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.ctx.fill();
		self.ctx.stroke();
	}

	fn draw_text(&mut self, text: &str, at: (f64, f64)) {
		let _ = self.ctx.fill_text(text, at.0, at.1);
	}
}
