use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

use super::config::{
	DEFAULT_COLOR, DEFAULT_COLUMNS, DEFAULT_GLOW_INTENSITY, DEFAULT_HOVER_RADIUS, DEFAULT_LINE_WIDTH,
	DEFAULT_MOBILE_BREAKPOINT, DEFAULT_MOBILE_COLUMNS, DEFAULT_MOBILE_ROWS, DEFAULT_NODE_SIZE,
	DEFAULT_ROWS, GridConfig, GridProps,
};
use super::error::SurfaceError;
use super::render::Surface;
use super::sizing::Viewport;
use super::state::GridParticlesState;

/// Full-viewport background lattice that brightens around the pointer.
#[component]
pub fn GridParticles(
	/// Extra classes for the fixed wrapper element.
	#[prop(into, default = String::new())]
	class: String,
	#[prop(default = DEFAULT_COLUMNS)] columns: usize,
	#[prop(default = DEFAULT_ROWS)] rows: usize,
	#[prop(default = DEFAULT_MOBILE_COLUMNS)] mobile_columns: usize,
	#[prop(default = DEFAULT_MOBILE_ROWS)] mobile_rows: usize,
	/// Viewport widths below this use the mobile lattice.
	#[prop(default = DEFAULT_MOBILE_BREAKPOINT)]
	mobile_breakpoint: f64,
	#[prop(default = DEFAULT_NODE_SIZE)] node_size: f64,
	#[prop(default = DEFAULT_LINE_WIDTH)] line_width: f64,
	#[prop(default = DEFAULT_HOVER_RADIUS)] hover_radius: f64,
	/// Hex color, `#rrggbb` or `#rgb`. `None` or anything unparseable
	/// draws in the fallback lavender.
	#[prop(into, default = Some(DEFAULT_COLOR.into()))]
	color: Option<String>,
	#[prop(default = DEFAULT_GLOW_INTENSITY)] glow_intensity: f64,
) -> impl IntoView {
	let config = GridConfig::new(GridProps {
		columns,
		rows,
		mobile_columns,
		mobile_rows,
		mobile_breakpoint,
		node_size,
		line_width,
		hover_radius,
		color,
		glow_intensity,
	});

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);

	Effect::new(move |_| {
		if frame_loop.with_value(Option::is_some) {
			return;
		}
		let surface = Surface::new(move || canvas_ref.get_untracked());
		match FrameLoop::start(surface, config.clone()) {
			Ok(running) => {
				info!("grid particles mounted");
				frame_loop.set_value(Some(running));
			}
			// without a window there is nothing to listen to or retry from
			Err(err) => error!("grid particles failed to start: {err}"),
		}
	});

	on_cleanup(move || {
		let _ = frame_loop.try_update_value(|running| {
			if running.take().is_some() {
				info!("grid particles unmounted");
			}
		});
	});

	view! {
		<div
			class=format!("grid-particles {class}")
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -100; pointer-events: none;"
		>
			<canvas node_ref=canvas_ref style="display: block; width: 100vw; height: 100vh;" />
		</div>
	}
}

fn window_viewport(window: &Window) -> Result<Viewport, SurfaceError> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok(Viewport::new(width, height, window.device_pixel_ratio()))
}

/// Lattice state plus the canvas it is drawn on, shared by every callback.
struct Scene {
	state: GridParticlesState,
	surface: Surface,
}

impl Scene {
	fn resize(&mut self, window: &Window) -> Result<(), SurfaceError> {
		let viewport = window_viewport(window)?;
		self.state.resize(viewport);
		self.surface.invalidate();
		Ok(())
	}

	fn frame(&mut self) -> Result<(), SurfaceError> {
		self.state.tick();
		self.surface.draw(&self.state)
	}
}

/// Window listeners and the self-rescheduling animation frame that drive one
/// effect instance. Dropping it removes the listeners and cancels the
/// pending frame.
pub struct FrameLoop {
	window: Window,
	on_resize: Closure<dyn FnMut()>,
	on_pointer_move: Closure<dyn FnMut(MouseEvent)>,
	on_pointer_out: Closure<dyn FnMut(MouseEvent)>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	frame_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	/// Size the lattice to the window, subscribe to `resize`, `pointermove`
	/// and `pointerout`, and request the first frame.
	///
	/// Only a missing window or a rejected registration is an error. Frames
	/// that cannot draw are logged and the loop keeps going, so a canvas that
	/// shows up late is picked up by a later frame.
	pub fn start(surface: Surface, config: GridConfig) -> Result<Self, SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;

		// an unreadable size leaves the grid empty until the next resize
		let viewport = window_viewport(&window).unwrap_or_else(|err| {
			error!("initial sizing skipped: {err}");
			Viewport::new(0.0, 0.0, 1.0)
		});
		let scene = Rc::new(RefCell::new(Scene {
			state: GridParticlesState::new(config, viewport),
			surface,
		}));

		let (win_resize, scene_resize) = (window.clone(), scene.clone());
		let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
			if let Err(err) = scene_resize.borrow_mut().resize(&win_resize) {
				error!("resize skipped: {err}");
			}
		});

		let scene_pm = scene.clone();
		let on_pointer_move: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			let mut scene = scene_pm.borrow_mut();
			let origin = scene.surface.origin();
			scene
				.state
				.pointer_moved((ev.client_x() as f64, ev.client_y() as f64), origin);
		});

		// leaving the browser window reports no related target
		let scene_po = scene.clone();
		let on_pointer_out: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			if ev.related_target().is_none() {
				scene_po.borrow_mut().state.pointer_left();
			}
		});

		let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let frame_id = Rc::new(Cell::new(None));
		let (win_anim, animate_inner, frame_id_inner) =
			(window.clone(), animate.clone(), frame_id.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Err(err) = scene.borrow_mut().frame() {
				error!("frame skipped: {err}");
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				match win_anim.request_animation_frame(cb.as_ref().unchecked_ref()) {
					Ok(id) => frame_id_inner.set(Some(id)),
					Err(err) => error!("could not schedule frame: {}", SurfaceError::from(err)),
				}
			}
		}));

		let running = Self {
			window,
			on_resize,
			on_pointer_move,
			on_pointer_out,
			animate,
			frame_id,
		};
		running.subscribe()?;
		Ok(running)
	}

	fn subscribe(&self) -> Result<(), SurfaceError> {
		let w = &self.window;
		w.add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())?;
		w.add_event_listener_with_callback(
			"pointermove",
			self.on_pointer_move.as_ref().unchecked_ref(),
		)?;
		w.add_event_listener_with_callback("pointerout", self.on_pointer_out.as_ref().unchecked_ref())?;
		if let Some(ref cb) = *self.animate.borrow() {
			let id = w.request_animation_frame(cb.as_ref().unchecked_ref())?;
			self.frame_id.set(Some(id));
		}
		Ok(())
	}

	fn stop(&mut self) {
		let w = &self.window;
		let _ = w.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		let _ = w.remove_event_listener_with_callback(
			"pointermove",
			self.on_pointer_move.as_ref().unchecked_ref(),
		);
		let _ = w.remove_event_listener_with_callback(
			"pointerout",
			self.on_pointer_out.as_ref().unchecked_ref(),
		);
		if let Some(id) = self.frame_id.take() {
			let _ = w.cancel_animation_frame(id);
		}
		// the frame closure holds a handle to its own slot
		self.animate.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
