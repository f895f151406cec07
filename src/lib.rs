//! path-graph: interactive weighted-graph visualization.
//!
//! This crate provides a WASM-based visualization component that renders a
//! weighted graph with pan/zoom and animates the discovery of a path through
//! it. The rendering core is backend-agnostic and runs anywhere a
//! [`DrawingSurface`] is available.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::path_graph::{
	CanvasSurface, DrawCommand, DrawingSurface, FrameStats, Graph, GraphBuilder, GraphError,
	GraphNode, GraphVisualizer, NodeRole, PathGraphCanvas, PlaybackHandle, PlaybackStatus,
	RecordingSurface, Result, SceneData, Style, Theme, ViewportTransform, VisualState,
	VisualizerConfig, canonical_edge,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("path-graph: logging initialized");
}

/// Load the scene from a script element with id="graph-data".
/// Expected format: JSON with { graph: {...}, path: [...], config: {...} }
fn load_scene_data() -> Option<SceneData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SceneData::from_json(&json_text) {
		Ok(scene) => {
			info!(
				"path-graph: loaded {} nodes, path of {}",
				scene.graph.len(),
				scene.path.len()
			);
			Some(scene)
		}
		Err(e) => {
			warn!("path-graph: failed to load scene: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the scene from the DOM and renders the path visualization.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let scene = load_scene_data().unwrap_or_default();
	let scene_signal = Signal::derive(move || scene.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Path Visualization" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<PathGraphCanvas scene=scene_signal fullscreen=true />
			<div class="graph-overlay">
				<h1>"Path Search"</h1>
				<p class="subtitle">"Drag to pan. Scroll to zoom."</p>
			</div>
		</div>
	}
}
