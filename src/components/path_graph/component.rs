//! Leptos component wrapping the path graph canvas.
//!
//! The component creates an HTML canvas element, binds a [`CanvasSurface`] to
//! it and forwards mouse/wheel events to the visualizer as normalized input.
//! A `requestAnimationFrame` loop acts as the playback scheduler, feeding
//! elapsed wall-clock time into [`GraphVisualizer::advance`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::canvas::CanvasSurface;
use super::config::SceneData;
use super::interaction::wheel_sign;
use super::visualizer::GraphVisualizer;

type SharedVisualizer = Rc<RefCell<Option<GraphVisualizer<CanvasSurface>>>>;

/// Renders a weighted graph on a canvas and plays back the scene's path.
///
/// Pass the scene via the reactive `scene` signal. The component sizes itself
/// to its parent container by default; set `fullscreen = true` to fill the
/// viewport and refit automatically with the window. Explicit `width`/`height`
/// override automatic sizing.
#[component]
pub fn PathGraphCanvas(
	#[prop(into)] scene: Signal<SceneData>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let visualizer: SharedVisualizer = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (visualizer_init, animate_init, resize_cb_init) =
		(visualizer.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("path-graph: canvas has no 2d context");
				return;
			}
		};

		let scene = scene.get();
		let surface = CanvasSurface::new(ctx, w, h);
		let mut vis =
			match GraphVisualizer::with_config(Rc::new(scene.graph), surface, &scene.config) {
				Ok(vis) => vis,
				Err(e) => {
					warn!("path-graph: cannot display graph: {e}");
					return;
				}
			};
		vis.draw();
		if !scene.path.is_empty() {
			vis.animate_path(scene.path, scene.config.duration_ms);
		}
		*visualizer_init.borrow_mut() = Some(vis);

		if fullscreen {
			let (visualizer_resize, canvas_resize) = (visualizer_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut vis) = *visualizer_resize.borrow_mut() {
					vis.surface_mut().set_size(nw, nh);
					if let Err(e) = vis.resize() {
						warn!("path-graph: resize skipped: {e}");
					}
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (visualizer_anim, animate_inner) = (visualizer_init.clone(), animate_init.clone());
		let mut last_tick = js_sys::Date::now();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = now - last_tick;
			last_tick = now;
			if let Some(ref mut vis) = *visualizer_anim.borrow_mut() {
				if vis.is_animating() {
					vis.advance(dt);
				}
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let visualizer_md = visualizer.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = surface_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut vis) = *visualizer_md.borrow_mut() {
			vis.pointer_down(x, y);
		}
	};

	let visualizer_mm = visualizer.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = surface_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut vis) = *visualizer_mm.borrow_mut() {
			vis.pointer_move(x, y);
		}
	};

	let visualizer_mu = visualizer.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut vis) = *visualizer_mu.borrow_mut() {
			vis.pointer_up();
		}
	};

	let visualizer_ml = visualizer.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut vis) = *visualizer_ml.borrow_mut() {
			vis.pointer_up();
		}
	};

	let visualizer_wh = visualizer.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = surface_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut vis) = *visualizer_wh.borrow_mut() {
			vis.scroll_at(wheel_sign(ev.delta_y()), x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="path-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}

fn window_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>, fallback: f64| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
	};
	(dim(window.inner_width(), 800.0), dim(window.inner_height(), 600.0))
}

/// Mouse position relative to the canvas' top-left corner.
fn surface_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
