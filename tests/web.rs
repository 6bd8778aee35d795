#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use grid_particles_canvas::grid_particles::{
	GridConfig, GridParticlesState, Surface, SurfaceError, Viewport, render,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn surface() -> (HtmlCanvasElement, CanvasRenderingContext2d) {
	let canvas = detached_canvas();
	let ctx = canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into::<CanvasRenderingContext2d>()
		.unwrap();
	(canvas, ctx)
}

fn detached_canvas() -> HtmlCanvasElement {
	let document = web_sys::window().unwrap().document().unwrap();
	document.create_element("canvas").unwrap().dyn_into().unwrap()
}

fn alpha_at(ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> u8 {
	ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data().0[3]
}

#[wasm_bindgen_test]
fn fit_surface_sizes_backing_buffer() {
	let (canvas, ctx) = surface();
	let viewport = Viewport::new(300.0, 200.0, 2.0);
	render::fit_surface(&canvas, &ctx, &viewport).unwrap();
	assert_eq!((canvas.width(), canvas.height()), (600, 400));

	// a second call must not compound the scale
	render::fit_surface(&canvas, &ctx, &viewport).unwrap();
	let m = ctx.get_transform().unwrap();
	assert_eq!((m.a(), m.d()), (2.0, 2.0));
}

#[wasm_bindgen_test]
fn frame_brightens_nodes_near_the_pointer() {
	let (canvas, ctx) = surface();
	let viewport = Viewport::new(1500.0, 800.0, 1.0);
	render::fit_surface(&canvas, &ctx, &viewport).unwrap();

	let mut state = GridParticlesState::new(GridConfig::default(), viewport);
	state.pointer_moved((300.0, 200.0), (0.0, 0.0));
	state.tick();
	render::render(&state, &ctx).unwrap();

	let lit = alpha_at(&ctx, 300.0, 200.0);
	let resting = alpha_at(&ctx, 1200.0, 600.0);
	let blank = alpha_at(&ctx, 350.0, 250.0);
	assert!(lit > 180, "lit node alpha {lit}");
	assert!(resting > 10 && resting < 100, "resting node alpha {resting}");
	assert_eq!(blank, 0);
}

#[wasm_bindgen_test]
fn each_frame_starts_from_a_clear_surface() {
	let (canvas, ctx) = surface();
	let viewport = Viewport::new(1500.0, 800.0, 1.0);
	render::fit_surface(&canvas, &ctx, &viewport).unwrap();

	let mut state = GridParticlesState::new(GridConfig::default(), viewport);
	state.pointer_moved((300.0, 200.0), (0.0, 0.0));
	state.tick();
	render::render(&state, &ctx).unwrap();

	state.pointer_left();
	state.tick();
	render::render(&state, &ctx).unwrap();
	assert!(alpha_at(&ctx, 300.0, 200.0) < 100);
}

#[wasm_bindgen_test]
fn surface_attaches_once_the_canvas_exists() {
	let slot: Rc<RefCell<Option<HtmlCanvasElement>>> = Rc::default();
	let lookup = slot.clone();
	let mut surface = Surface::new(move || lookup.borrow().clone());
	let state = GridParticlesState::new(GridConfig::default(), Viewport::new(300.0, 200.0, 2.0));

	assert!(matches!(surface.draw(&state), Err(SurfaceError::NotMounted)));
	assert!(matches!(surface.draw(&state), Err(SurfaceError::NotMounted)));
	assert!(!surface.is_attached());

	let canvas = detached_canvas();
	*slot.borrow_mut() = Some(canvas.clone());
	surface.draw(&state).unwrap();
	assert!(surface.is_attached());
	assert_eq!((canvas.width(), canvas.height()), (600, 400));
}

#[wasm_bindgen_test]
fn surface_retries_a_canvas_without_2d_context() {
	let taken = detached_canvas();
	// a canvas holds at most one kind of context
	taken.get_context("bitmaprenderer").unwrap().unwrap();
	let fresh = detached_canvas();

	let slot = Rc::new(RefCell::new(taken));
	let lookup = slot.clone();
	let mut surface = Surface::new(move || Some(lookup.borrow().clone()));
	let state = GridParticlesState::new(GridConfig::default(), Viewport::new(300.0, 200.0, 1.0));

	assert!(matches!(surface.draw(&state), Err(SurfaceError::NoContext)));
	assert!(matches!(surface.draw(&state), Err(SurfaceError::NoContext)));
	assert!(!surface.is_attached());

	*slot.borrow_mut() = fresh.clone();
	surface.draw(&state).unwrap();
	assert!(surface.is_attached());
	assert_eq!(fresh.width(), 300);
}

#[wasm_bindgen_test]
fn surface_refits_only_after_invalidate() {
	let canvas = detached_canvas();
	let lookup = canvas.clone();
	let mut surface = Surface::new(move || Some(lookup.clone()));
	let state = GridParticlesState::new(GridConfig::default(), Viewport::new(300.0, 200.0, 1.0));
	surface.draw(&state).unwrap();

	canvas.set_width(1);
	surface.draw(&state).unwrap();
	assert_eq!(canvas.width(), 1);

	surface.invalidate();
	surface.draw(&state).unwrap();
	assert_eq!(canvas.width(), 300);
}

#[wasm_bindgen_test]
fn surface_draws_an_empty_grid_without_error() {
	let canvas = detached_canvas();
	let lookup = canvas.clone();
	let mut surface = Surface::new(move || Some(lookup.clone()));
	let state = GridParticlesState::new(GridConfig::default(), Viewport::new(0.0, 0.0, 1.0));
	assert!(state.grid.is_empty());

	surface.draw(&state).unwrap();
	surface.draw(&state).unwrap();
	assert_eq!((canvas.width(), canvas.height()), (0, 0));
}
