use super::sizing::{GridDimensions, Viewport};

/// Brightness of a node with no pointer nearby.
pub const NODE_REST_OPACITY: f64 = 0.1;
/// Brightness of an edge with no pointer nearby.
pub const EDGE_REST_OPACITY: f64 = 0.05;

/// Edge from its owning node to a right or down neighbour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	/// `(row, col)` of the target node.
	pub target: (usize, usize),
	/// Edge brightness, `0.05` at rest.
	pub opacity: f64,
}

/// Lattice point, positioned in logical surface pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct GridNode {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Right neighbour first, then down; either may be absent on the border.
	pub connections: Vec<Connection>,
	/// Node brightness, `0.1` at rest.
	pub opacity: f64,
}

/// Row-major lattice of `(rows + 1) * (columns + 1)` nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
	columns: usize,
	rows: usize,
	nodes: Vec<GridNode>,
}

impl Grid {
	/// Build a fresh lattice covering the viewport. Degenerate dimensions or
	/// an unknown surface size give an empty grid.
	pub fn build(dims: GridDimensions, viewport: &Viewport) -> Self {
		let GridDimensions { columns, rows } = dims;
		if columns == 0 || rows == 0 || !viewport.is_known() {
			return Self::default();
		}
		let cell_width = viewport.width / columns as f64;
		let cell_height = viewport.height / rows as f64;

		let mut nodes = Vec::with_capacity((rows + 1) * (columns + 1));
		for y in 0..=rows {
			for x in 0..=columns {
				nodes.push(GridNode {
					x: x as f64 * cell_width,
					y: y as f64 * cell_height,
					connections: Vec::with_capacity(2),
					opacity: NODE_REST_OPACITY,
				});
			}
		}

		let mut grid = Self { columns, rows, nodes };
		for y in 0..=rows {
			for x in 0..=columns {
				let i = grid.index(y, x);
				let node = &mut grid.nodes[i];
				if x < columns {
					node.connections.push(Connection {
						target: (y, x + 1),
						opacity: EDGE_REST_OPACITY,
					});
				}
				if y < rows {
					node.connections.push(Connection {
						target: (y + 1, x),
						opacity: EDGE_REST_OPACITY,
					});
				}
			}
		}
		grid
	}

	fn index(&self, row: usize, col: usize) -> usize {
		row * (self.columns + 1) + col
	}

	/// Cell counts this lattice was built for; zero when empty.
	pub fn dimensions(&self) -> GridDimensions {
		GridDimensions {
			columns: self.columns,
			rows: self.rows,
		}
	}

	/// True before the surface has a usable size.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Number of nodes, `(rows + 1) * (columns + 1)` unless empty.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Node at `(row, col)`, if that lies inside the lattice.
	pub fn node(&self, row: usize, col: usize) -> Option<&GridNode> {
		if row > self.rows || col > self.columns {
			return None;
		}
		self.nodes.get(self.index(row, col))
	}

	/// All nodes in row-major order.
	pub fn nodes(&self) -> &[GridNode] {
		&self.nodes
	}

	pub(super) fn nodes_mut(&mut self) -> &mut [GridNode] {
		&mut self.nodes
	}

	/// Stored connections, each edge counted once.
	pub fn edge_count(&self) -> usize {
		self.nodes.iter().map(|n| n.connections.len()).sum()
	}

	/// Visit every stored edge with both endpoints resolved.
	pub fn visit_edges(&self, mut f: impl FnMut(&GridNode, &GridNode, &Connection)) {
		for node in &self.nodes {
			for conn in &node.connections {
				if let Some(target) = self.node(conn.target.0, conn.target.1) {
					f(node, target, conn);
				}
			}
		}
	}
}
