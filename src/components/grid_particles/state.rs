use log::debug;

use super::config::GridConfig;
use super::grid::{EDGE_REST_OPACITY, Grid, NODE_REST_OPACITY};
use super::pointer::{OFF_SURFACE, PointerState};
use super::sizing::{GridDimensions, Viewport};

/// Share of the glow that goes to nodes and edges respectively.
const NODE_GLOW_SPAN: f64 = 0.9;
const EDGE_GLOW_SPAN: f64 = 0.4;

fn proximity(distance: f64, hover_radius: f64) -> Option<f64> {
	(distance < hover_radius).then(|| 1.0 - distance / hover_radius)
}

/// Node brightness for a pointer `distance` away.
pub fn node_opacity(distance: f64, hover_radius: f64, glow: f64) -> f64 {
	match proximity(distance, hover_radius) {
		Some(p) => NODE_REST_OPACITY + p * glow * NODE_GLOW_SPAN,
		None => NODE_REST_OPACITY,
	}
}

/// Edge brightness for the nearer endpoint being `distance` away.
pub fn edge_opacity(distance: f64, hover_radius: f64, glow: f64) -> f64 {
	match proximity(distance, hover_radius) {
		Some(p) => EDGE_REST_OPACITY + p * glow * EDGE_GLOW_SPAN,
		None => EDGE_REST_OPACITY,
	}
}

/// Everything the effect mutates between frames: sizing, lattice, pointer.
pub struct GridParticlesState {
	/// Sanitized settings, fixed for the lifetime of the effect.
	pub config: GridConfig,
	/// Logical size and pixel ratio the lattice was built for.
	pub viewport: Viewport,
	/// Cell counts picked for the current width.
	pub dimensions: GridDimensions,
	/// Current lattice; replaced whole on every resize.
	pub grid: Grid,
	/// Pointer in surface-local coordinates, or [`OFF_SURFACE`].
	pub pointer: PointerState,
	distances: Vec<f64>,
}

impl GridParticlesState {
	/// Build the lattice for `viewport` with the pointer off the surface.
	pub fn new(config: GridConfig, viewport: Viewport) -> Self {
		let dimensions = GridDimensions::for_width(&config, viewport.width);
		let mut state = Self {
			config,
			viewport,
			dimensions,
			grid: Grid::default(),
			pointer: OFF_SURFACE,
			distances: Vec::new(),
		};
		state.resize(viewport);
		state
	}

	/// Recompute dimensions for the viewport and replace the lattice.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.dimensions = GridDimensions::for_width(&self.config, viewport.width);
		self.grid = Grid::build(self.dimensions, &viewport);
		debug!(
			"grid rebuilt: {}x{} cells, {} nodes, {} edges for {}x{} @{}x",
			self.dimensions.columns,
			self.dimensions.rows,
			self.grid.len(),
			self.grid.edge_count(),
			viewport.width,
			viewport.height,
			viewport.dpr
		);
	}

	/// Track a pointer reported in client coordinates against the surface's
	/// on-screen origin.
	pub fn pointer_moved(&mut self, client: (f64, f64), origin: (f64, f64)) {
		self.pointer = PointerState::from_client(
			client,
			origin,
			(self.viewport.width, self.viewport.height),
		);
	}

	/// Park the pointer at [`OFF_SURFACE`].
	pub fn pointer_left(&mut self) {
		self.pointer = OFF_SURFACE;
	}

	/// Update every node and edge brightness for the current pointer.
	pub fn tick(&mut self) {
		let (radius, glow) = (self.config.hover_radius, self.config.glow_intensity);
		let pointer = self.pointer;

		self.distances.clear();
		self.distances
			.extend(self.grid.nodes().iter().map(|n| pointer.distance_to(n.x, n.y)));

		let stride = self.grid.dimensions().columns + 1;
		let distances = &self.distances;
		for (node, &d) in self.grid.nodes_mut().iter_mut().zip(distances) {
			node.opacity = node_opacity(d, radius, glow);
			for conn in &mut node.connections {
				let (row, col) = conn.target;
				let target_d = distances
					.get(row * stride + col)
					.copied()
					.unwrap_or(f64::INFINITY);
				conn.opacity = edge_opacity(d.min(target_d), radius, glow);
			}
		}
	}
}
