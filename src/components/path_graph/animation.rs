//! Timed playback of a traversal path.
//!
//! The sequencer never schedules itself. The host owns the clock and calls
//! [`AnimationSequencer::advance`] with elapsed milliseconds (from a
//! `requestAnimationFrame` loop, a timer, or a test); every step that has
//! come due is returned in order.
//!
//! For a path of `n` nodes and interval `d / n`, node `k` is visited at
//! `k * interval` and the whole path is highlighted at `n * interval`.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

/// Lifecycle of one playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
	/// Started, no node visited yet.
	Idle,
	/// Playing; `step` is the index of the most recently visited node.
	Running { step: usize },
	Cancelled,
	Done,
}

/// Caller-side handle to a playback started by
/// [`GraphVisualizer::animate_path`](super::visualizer::GraphVisualizer::animate_path).
#[derive(Clone, Debug)]
pub struct PlaybackHandle {
	status: Rc<Cell<PlaybackStatus>>,
}

impl PlaybackHandle {
	fn new(status: PlaybackStatus) -> Self {
		Self {
			status: Rc::new(Cell::new(status)),
		}
	}

	pub fn status(&self) -> PlaybackStatus {
		self.status.get()
	}

	/// Done or cancelled. An idle playback is pending, not finished.
	pub fn is_finished(&self) -> bool {
		matches!(
			self.status.get(),
			PlaybackStatus::Done | PlaybackStatus::Cancelled
		)
	}

	/// Stops the playback before its next step. Returns `false` if it had
	/// already finished. Overlay state is left as last drawn.
	pub fn cancel(&self) -> bool {
		if self.is_finished() {
			return false;
		}
		self.status.set(PlaybackStatus::Cancelled);
		true
	}
}

/// A visual mutation the visualizer applies for one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackStep {
	/// Make the node current and add it to the explored set.
	Visit(String),
	/// Highlight the complete path.
	Highlight(Vec<String>),
}

#[derive(Debug)]
struct Run {
	path: Vec<String>,
	next_step: usize,
	interval_ms: f64,
	elapsed_ms: f64,
	handle: PlaybackHandle,
}

/// Drives at most one playback at a time.
#[derive(Debug, Default)]
pub struct AnimationSequencer {
	run: Option<Run>,
}

impl AnimationSequencer {
	/// Starts playing `path` over `duration_ms`, cancelling any playback
	/// still in progress. Nothing fires until the next [`Self::advance`].
	///
	/// An empty path finishes immediately. Negative or non-finite durations
	/// play every step at once.
	pub fn start(&mut self, path: Vec<String>, duration_ms: f64) -> PlaybackHandle {
		if self.cancel() {
			debug!("path-graph: playback restarted, previous run cancelled");
		}
		if path.is_empty() {
			return PlaybackHandle::new(PlaybackStatus::Done);
		}

		let duration_ms = if duration_ms.is_finite() {
			duration_ms.max(0.0)
		} else {
			0.0
		};
		let interval_ms = duration_ms / path.len() as f64;
		debug!(
			"path-graph: playing {} nodes every {interval_ms:.1}ms",
			path.len()
		);

		let handle = PlaybackHandle::new(PlaybackStatus::Idle);
		self.run = Some(Run {
			path,
			next_step: 0,
			interval_ms,
			elapsed_ms: 0.0,
			handle: handle.clone(),
		});
		handle
	}

	/// Cancels the current playback, if any. Returns whether one was running.
	pub fn cancel(&mut self) -> bool {
		match self.run.take() {
			Some(run) => run.handle.cancel(),
			None => false,
		}
	}

	pub fn is_running(&self) -> bool {
		self.run
			.as_ref()
			.is_some_and(|run| !run.handle.is_finished())
	}

	/// Advances the clock by `dt_ms` and returns every step now due, in order.
	pub fn advance(&mut self, dt_ms: f64) -> Vec<PlaybackStep> {
		let Some(run) = self.run.as_mut() else {
			return Vec::new();
		};
		if run.handle.is_finished() {
			debug!("path-graph: playback cancelled at step {}", run.next_step);
			self.run = None;
			return Vec::new();
		}

		if dt_ms.is_finite() && dt_ms > 0.0 {
			run.elapsed_ms += dt_ms;
		}

		let mut steps = Vec::new();
		while run.next_step as f64 * run.interval_ms <= run.elapsed_ms {
			if run.next_step < run.path.len() {
				steps.push(PlaybackStep::Visit(run.path[run.next_step].clone()));
				run.handle.status.set(PlaybackStatus::Running {
					step: run.next_step,
				});
				run.next_step += 1;
			} else {
				steps.push(PlaybackStep::Highlight(run.path.clone()));
				run.handle.status.set(PlaybackStatus::Done);
				debug!("path-graph: playback done");
				self.run = None;
				break;
			}
		}
		steps
	}
}
