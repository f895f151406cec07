//! Visual theming for the path graph.
//!
//! Provides colors and stroke widths for every render layer.

use log::warn;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background grid lines.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
	pub color: Color,
	pub line_width: f64,
}

/// Edge lines and their cost labels.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStyle {
	/// Edges not on the highlighted path
	pub color: Color,
	pub line_width: f64,
	/// Edges between consecutive highlighted-path nodes
	pub highlight_color: Color,
	pub highlight_width: f64,
	/// Cost label text
	pub cost_color: Color,
}

/// Node fills by traversal role, plus the shared border.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	pub fill: Color,
	pub current_fill: Color,
	pub visited_fill: Color,
	pub path_fill: Color,
	pub border_color: Color,
	pub border_width: f64,
	pub current_border_width: f64,
	/// Glow drawn around the current node
	pub glow_color: Color,
	pub glow_blur: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	pub name: &'static str,
	pub font_family: &'static str,
	pub grid: GridStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
	pub label_color: Color,
}

impl Theme {
	/// Indigo accents on a near-black surface (default)
	pub fn default_theme() -> Self {
		let accent = Color::rgb(99, 102, 241);
		Self {
			name: "default",
			font_family: "Lexend, sans-serif",
			grid: GridStyle {
				color: Color::rgb(26, 26, 26),
				line_width: 1.0,
			},
			edge: EdgeStyle {
				color: Color::rgb(45, 45, 45),
				line_width: 2.0,
				highlight_color: accent,
				highlight_width: 4.0,
				cost_color: Color::rgb(128, 128, 128),
			},
			node: NodeStyle {
				fill: Color::rgb(36, 36, 36),
				current_fill: accent,
				visited_fill: Color::rgb(16, 185, 129),
				path_fill: Color::rgb(129, 140, 248),
				border_color: accent,
				border_width: 2.0,
				current_border_width: 3.0,
				glow_color: accent.with_alpha(0.5),
				glow_blur: 15.0,
			},
			label_color: Color::rgb(255, 255, 255),
		}
	}

	/// Cooler blues with a teal path
	pub fn midnight() -> Self {
		let accent = Color::rgb(96, 165, 250);
		Self {
			name: "midnight",
			font_family: "sans-serif",
			grid: GridStyle {
				color: Color::rgb(24, 28, 40),
				line_width: 1.0,
			},
			edge: EdgeStyle {
				color: Color::rgba(100, 120, 150, 0.45),
				line_width: 2.0,
				highlight_color: accent,
				highlight_width: 4.0,
				cost_color: Color::rgb(120, 135, 160),
			},
			node: NodeStyle {
				fill: Color::rgb(25, 28, 38),
				current_fill: accent,
				visited_fill: Color::rgb(45, 212, 191),
				path_fill: Color::rgb(147, 197, 253),
				border_color: accent,
				border_width: 2.0,
				current_border_width: 3.0,
				glow_color: accent.with_alpha(0.45),
				glow_blur: 18.0,
			},
			label_color: Color::rgb(230, 236, 245),
		}
	}

	/// Flat, glow-free variant
	pub fn minimal() -> Self {
		let accent = Color::rgb(130, 145, 165);
		Self {
			name: "minimal",
			font_family: "sans-serif",
			grid: GridStyle {
				color: Color::rgba(255, 255, 255, 0.04),
				line_width: 1.0,
			},
			edge: EdgeStyle {
				color: Color::rgba(130, 145, 165, 0.4),
				line_width: 1.5,
				highlight_color: Color::rgb(220, 225, 235),
				highlight_width: 3.0,
				cost_color: Color::rgba(130, 145, 165, 0.8),
			},
			node: NodeStyle {
				fill: Color::rgb(25, 28, 35),
				current_fill: Color::rgb(220, 225, 235),
				visited_fill: Color::rgb(100, 148, 160),
				path_fill: Color::rgb(180, 195, 205),
				border_color: accent,
				border_width: 1.5,
				current_border_width: 2.0,
				glow_color: Color::rgba(0, 0, 0, 0.0),
				glow_blur: 0.0,
			},
			label_color: Color::rgb(240, 240, 240),
		}
	}

	/// Looks up a preset by name, falling back to the default theme.
	pub fn by_name(name: &str) -> Self {
		match name {
			"default" => Self::default_theme(),
			"midnight" => Self::midnight(),
			"minimal" => Self::minimal(),
			other => {
				warn!("path-graph: unknown theme {other:?}, using default");
				Self::default_theme()
			}
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_drops_opaque_alpha() {
		assert_eq!(Color::rgb(99, 102, 241).to_css(), "#6366f1");
		assert_eq!(
			Color::rgb(99, 102, 241).with_alpha(0.5).to_css(),
			"rgba(99, 102, 241, 0.5)"
		);
	}

	#[test]
	fn presets_resolve_by_name() {
		assert_eq!(Theme::by_name("midnight").name, "midnight");
		assert_eq!(Theme::by_name("minimal").name, "minimal");
		assert_eq!(Theme::by_name("no-such-theme"), Theme::default());
	}
}
