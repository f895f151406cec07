//! UI components.

pub mod path_graph;
