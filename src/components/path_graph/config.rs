//! Host-facing configuration and scene loading.

use serde::Deserialize;

use super::error::{GraphError, Result};
use super::theme::Theme;
use super::types::{Graph, GraphSource};

/// Visualizer options. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
	/// Theme preset name, resolved with [`Theme::by_name`].
	pub theme: String,
	/// Zoom around the pointer instead of the surface origin.
	pub anchored_zoom: bool,
	/// Playback duration used when a scene carries a path.
	pub duration_ms: f64,
}

impl Default for VisualizerConfig {
	fn default() -> Self {
		Self {
			theme: "default".to_string(),
			anchored_zoom: false,
			duration_ms: 2000.0,
		}
	}
}

impl VisualizerConfig {
	pub fn resolve_theme(&self) -> Theme {
		Theme::by_name(&self.theme)
	}
}

/// Everything a host hands over in one JSON document: the graph, an optional
/// traversal to play back, and options.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(try_from = "SceneSource")]
pub struct SceneData {
	pub graph: Graph,
	pub path: Vec<String>,
	pub config: VisualizerConfig,
}

impl SceneData {
	/// Graph validation errors keep their variant; only malformed JSON is
	/// reported as [`GraphError::Parse`].
	pub fn from_json(json: &str) -> Result<Self> {
		let source: SceneSource = serde_json::from_str(json)?;
		SceneData::try_from(source)
	}
}

#[derive(Deserialize)]
struct SceneSource {
	graph: GraphSource,
	#[serde(default)]
	path: Vec<String>,
	#[serde(default)]
	config: VisualizerConfig,
}

impl TryFrom<SceneSource> for SceneData {
	type Error = GraphError;

	fn try_from(source: SceneSource) -> Result<Self> {
		Ok(Self {
			graph: Graph::try_from(source.graph)?,
			path: source.path,
			config: source.config,
		})
	}
}
