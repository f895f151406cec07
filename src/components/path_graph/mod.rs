//! Weighted graph visualization with animated path discovery.
//!
//! Renders a weighted, undirected graph through an injected
//! [`DrawingSurface`] and animates a caller-supplied traversal:
//! - Viewport fit, pan and zoom via [`ViewportTransform`]
//! - Layered clear-and-redraw (grid, edges, nodes, labels) on every mutation
//! - Current node, explored set and highlighted path overlay
//! - Host-scheduled, cancellable playback of a path
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use path_graph::{Graph, GraphVisualizer, RecordingSurface};
//!
//! let graph = Graph::builder()
//!     .node("A", 0.0, 0.0)
//!     .node("B", 100.0, 50.0)
//!     .edge("A", "B", 1.0)
//!     .build()
//!     .unwrap();
//! let mut vis = GraphVisualizer::new(Rc::new(graph), RecordingSurface::new(800.0, 600.0)).unwrap();
//!
//! let playback = vis.animate_path(vec!["A".into(), "B".into()], 1000.0);
//! vis.advance(500.0);
//! vis.advance(500.0);
//! assert!(playback.is_finished());
//! assert_eq!(vis.state().highlighted_path(), ["A", "B"]);
//! ```

mod animation;
mod canvas;
mod component;
mod config;
mod error;
mod interaction;
mod render;
pub mod scale;
mod state;
mod surface;
pub mod theme;
mod transform;
mod types;
mod visualizer;

pub use animation::{AnimationSequencer, PlaybackHandle, PlaybackStatus, PlaybackStep};
pub use canvas::CanvasSurface;
pub use component::PathGraphCanvas;
pub use config::{SceneData, VisualizerConfig};
pub use error::{GraphError, Result};
pub use interaction::{DragState, InteractionController, wheel_sign};
pub use render::{FrameStats, Scene, canonical_edge, render};
pub use state::{NodeRole, VisualState};
pub use surface::{DrawCommand, DrawingSurface, Font, Glow, RecordingSurface, Style};
pub use theme::Theme;
pub use transform::ViewportTransform;
pub use types::{Bounds, Graph, GraphBuilder, GraphNode};
pub use visualizer::GraphVisualizer;
