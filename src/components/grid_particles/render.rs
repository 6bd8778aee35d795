//! Canvas drawing for [`GridParticlesState`].

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::SurfaceError;
use super::sizing::Viewport;
use super::state::GridParticlesState;

/// Size the backing buffer to device pixels and scale the context so that
/// drawing happens in logical pixels. Safe to call repeatedly.
pub fn fit_surface(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	viewport: &Viewport,
) -> Result<(), SurfaceError> {
	let (w, h) = viewport.backing_size();
	canvas.set_width(w);
	canvas.set_height(h);
	ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
	Ok(())
}

/// Clear the surface, then draw every edge and every node on top.
pub fn render(state: &GridParticlesState, ctx: &CanvasRenderingContext2d) -> Result<(), SurfaceError> {
	ctx.clear_rect(0.0, 0.0, state.viewport.width, state.viewport.height);
	// nodes must sit on top of their edges
	draw_edges(state, ctx);
	draw_nodes(state, ctx)
}

fn draw_edges(state: &GridParticlesState, ctx: &CanvasRenderingContext2d) {
	let rgb = state.config.rgb;
	ctx.set_line_cap("round");
	ctx.set_line_width(state.config.line_width);

	state.grid.visit_edges(|from, to, conn| {
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.set_stroke_style_str(&rgb.rgba(conn.opacity));
		ctx.stroke();
	});
}

fn draw_nodes(state: &GridParticlesState, ctx: &CanvasRenderingContext2d) -> Result<(), SurfaceError> {
	let (rgb, radius) = (state.config.rgb, state.config.node_size);
	for node in state.grid.nodes() {
		ctx.begin_path();
		ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI)?;
		ctx.set_fill_style_str(&rgb.rgba(node.opacity));
		ctx.fill();
	}
	Ok(())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into()
		.map_err(|_| SurfaceError::NoContext)
}

/// Canvas and 2d context, looked up on first draw and again after any
/// failed lookup. The backing buffer is refitted whenever the viewport
/// differs from the one it was last sized for.
pub struct Surface {
	find_canvas: Box<dyn Fn() -> Option<HtmlCanvasElement>>,
	attached: Option<(HtmlCanvasElement, CanvasRenderingContext2d)>,
	fitted: Option<Viewport>,
}

impl Surface {
	/// `find_canvas` is asked for the element on every draw until one is
	/// attached.
	pub fn new(find_canvas: impl Fn() -> Option<HtmlCanvasElement> + 'static) -> Self {
		Self {
			find_canvas: Box::new(find_canvas),
			attached: None,
			fitted: None,
		}
	}

	/// Drop the recorded fit so the next draw resizes the backing buffer.
	pub fn invalidate(&mut self) {
		self.fitted = None;
	}

	/// Whether a canvas and its 2d context are in hand.
	pub fn is_attached(&self) -> bool {
		self.attached.is_some()
	}

	/// Top-left corner of the canvas in client coordinates.
	pub fn origin(&self) -> (f64, f64) {
		match &self.attached {
			Some((canvas, _)) => {
				let rect = canvas.get_bounding_client_rect();
				(rect.left(), rect.top())
			}
			None => (0.0, 0.0),
		}
	}

	/// Attach if needed, refit if the viewport moved, then render the state.
	///
	/// Fails with [`SurfaceError::NotMounted`] while there is no canvas and
	/// [`SurfaceError::NoContext`] when it refuses a 2d context; both are
	/// retried on the next call.
	pub fn draw(&mut self, state: &GridParticlesState) -> Result<(), SurfaceError> {
		if self.attached.is_none() {
			let canvas = (self.find_canvas)().ok_or(SurfaceError::NotMounted)?;
			let ctx = context_2d(&canvas)?;
			self.attached = Some((canvas, ctx));
			self.fitted = None;
		}
		let Some((canvas, ctx)) = &self.attached else {
			return Err(SurfaceError::NotMounted);
		};
		if self.fitted != Some(state.viewport) {
			fit_surface(canvas, ctx, &state.viewport)?;
			self.fitted = Some(state.viewport);
		}
		render(state, ctx)
	}
}
