//! Drawing capability injected into the render pipeline.
//!
//! The renderer never touches a concrete backend. Hosts implement
//! [`DrawingSurface`] for whatever they draw on (an HTML canvas via
//! [`CanvasSurface`](super::canvas::CanvasSurface), SVG, a terminal grid) and
//! hand it to the visualizer. [`RecordingSurface`] keeps the command stream
//! in memory, which is what the tests assert against.

use super::theme::Color;

/// Font used by [`DrawingSurface::draw_text`].
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
	/// Size in surface units.
	pub size: f64,
	pub bold: bool,
	pub family: String,
}

impl Font {
	/// CSS shorthand, e.g. `bold 14px Lexend`.
	pub fn to_css(&self) -> String {
		let weight = if self.bold { "bold " } else { "" };
		format!("{weight}{}px {}", self.size, self.family)
	}
}

impl Default for Font {
	fn default() -> Self {
		Self {
			size: 12.0,
			bold: false,
			family: "sans-serif".to_string(),
		}
	}
}

/// Soft shadow drawn behind filled shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	pub color: Color,
	pub blur: f64,
}

/// Complete drawing state. [`DrawingSurface::set_style`] replaces the whole
/// state, so nothing leaks from one shape to the next.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
	pub stroke: Color,
	pub fill: Color,
	pub line_width: f64,
	pub font: Font,
	pub glow: Option<Glow>,
}

impl Default for Style {
	fn default() -> Self {
		Self {
			stroke: Color::rgb(0, 0, 0),
			fill: Color::rgb(0, 0, 0),
			line_width: 1.0,
			font: Font::default(),
			glow: None,
		}
	}
}

/// Minimal immediate-mode drawing backend. Coordinates are surface space.
pub trait DrawingSurface {
	/// Current drawable `(width, height)`.
	fn size(&self) -> (f64, f64);

	/// Erases everything previously drawn.
	fn clear(&mut self);

	fn set_style(&mut self, style: &Style);

	/// Strokes a straight segment.
	fn draw_line(&mut self, from: (f64, f64), to: (f64, f64));

	/// Fills then strokes a circle.
	fn draw_circle(&mut self, center: (f64, f64), radius: f64);

	/// Fills `text` centered horizontally and vertically on `at`.
	fn draw_text(&mut self, text: &str, at: (f64, f64));
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear,
	SetStyle(Style),
	Line { from: (f64, f64), to: (f64, f64) },
	Circle { center: (f64, f64), radius: f64 },
	Text { text: String, at: (f64, f64) },
}

/// In-memory surface that records the most recent frame.
///
/// `clear` starts a new frame: earlier commands are dropped and
/// [`RecordingSurface::frames`] is incremented, so it doubles as a redraw
/// counter.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
	width: f64,
	height: f64,
	frames: usize,
	commands: Vec<DrawCommand>,
}

impl RecordingSurface {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	pub fn set_size(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Number of frames started so far.
	pub fn frames(&self) -> usize {
		self.frames
	}

	/// Commands of the current frame, starting with [`DrawCommand::Clear`].
	pub fn commands(&self) -> &[DrawCommand] {
		&self.commands
	}

	/// Shape commands of the current frame paired with the style in effect.
	pub fn styled(&self) -> Vec<(Style, &DrawCommand)> {
		let mut current = Style::default();
		let mut out = Vec::new();
		for cmd in &self.commands {
			match cmd {
				DrawCommand::SetStyle(style) => current = style.clone(),
				DrawCommand::Clear => {}
				shape => out.push((current.clone(), shape)),
			}
		}
		out
	}

	/// Text commands of the current frame, in draw order.
	pub fn texts(&self) -> Vec<&str> {
		self.commands
			.iter()
			.filter_map(|cmd| match cmd {
				DrawCommand::Text { text, .. } => Some(text.as_str()),
				_ => None,
			})
			.collect()
	}
}

impl DrawingSurface for RecordingSurface {
	fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	fn clear(&mut self) {
		self.frames += 1;
		self.commands.clear();
		self.commands.push(DrawCommand::Clear);
	}

	fn set_style(&mut self, style: &Style) {
		self.commands.push(DrawCommand::SetStyle(style.clone()));
	}

	fn draw_line(&mut self, from: (f64, f64), to: (f64, f64)) {
		self.commands.push(DrawCommand::Line { from, to });
	}

	fn draw_circle(&mut self, center: (f64, f64), radius: f64) {
		self.commands.push(DrawCommand::Circle { center, radius });
	}

	fn draw_text(&mut self, text: &str, at: (f64, f64)) {
		self.commands.push(DrawCommand::Text {
			text: text.to_string(),
			at,
		});
	}
}
