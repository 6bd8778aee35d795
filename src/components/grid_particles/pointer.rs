/// Position used while the pointer is off the surface; far enough away that
/// nothing lights up.
pub const OFF_SURFACE: PointerState = PointerState { x: -1000.0, y: -1000.0 };

/// Last known pointer position in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
	/// Horizontal offset from the surface's left edge.
	pub x: f64,
	/// Vertical offset from the surface's top edge.
	pub y: f64,
}

impl Default for PointerState {
	fn default() -> Self {
		OFF_SURFACE
	}
}

impl PointerState {
	/// Map a viewport (client) position onto a surface whose top-left corner
	/// sits at `origin` and whose logical size is `size`. Positions outside
	/// the surface, edges included as inside, map to [`OFF_SURFACE`].
	pub fn from_client(client: (f64, f64), origin: (f64, f64), size: (f64, f64)) -> Self {
		let (x, y) = (client.0 - origin.0, client.1 - origin.1);
		let (w, h) = size;
		if x >= 0.0 && x <= w && y >= 0.0 && y <= h {
			Self { x, y }
		} else {
			OFF_SURFACE
		}
	}

	/// Euclidean distance from the pointer to `(x, y)`.
	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		(x - self.x).hypot(y - self.y)
	}
}
