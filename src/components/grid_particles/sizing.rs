use super::config::GridConfig;

/// Cell counts of the lattice; there is one more node than cells per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDimensions {
	/// Cells across.
	pub columns: usize,
	/// Cells down.
	pub rows: usize,
}

/// Logical (CSS pixel) size of the drawing surface and its device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Width in CSS pixels.
	pub width: f64,
	/// Height in CSS pixels.
	pub height: f64,
	/// Device pixels per CSS pixel, always positive.
	pub dpr: f64,
}

impl Viewport {
	/// A missing or nonsensical `dpr` is taken as 1.
	pub fn new(width: f64, height: f64, dpr: f64) -> Self {
		let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
		Self { width, height, dpr }
	}

	/// Whether the surface has a usable, non-empty size.
	pub fn is_known(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}

	/// Backing buffer size in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.dpr).round().max(0.0) as u32,
			(self.height * self.dpr).round().max(0.0) as u32,
		)
	}
}

impl GridDimensions {
	/// Pick the mobile or desktop lattice for the given viewport width. Counts
	/// come from a sanitized config and are therefore at least 1.
	pub fn for_width(config: &GridConfig, viewport_width: f64) -> Self {
		if viewport_width < config.mobile_breakpoint {
			Self {
				columns: config.mobile_columns,
				rows: config.mobile_rows,
			}
		} else {
			Self {
				columns: config.columns,
				rows: config.rows,
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn breakpoint_switches_layouts() {
		let cfg = GridConfig::default();
		assert_eq!(
			GridDimensions::for_width(&cfg, 1024.0),
			GridDimensions { columns: 15, rows: 8 }
		);
		assert_eq!(
			GridDimensions::for_width(&cfg, 500.0),
			GridDimensions { columns: 8, rows: 5 }
		);
		// the breakpoint itself is desktop
		assert_eq!(
			GridDimensions::for_width(&cfg, 768.0),
			GridDimensions { columns: 15, rows: 8 }
		);
		assert_eq!(
			GridDimensions::for_width(&cfg, 767.9),
			GridDimensions { columns: 8, rows: 5 }
		);
	}

	#[test]
	fn backing_buffer_scales_with_dpr() {
		assert_eq!(Viewport::new(800.0, 600.0, 2.0).backing_size(), (1600, 1200));
		assert_eq!(Viewport::new(333.0, 100.0, 1.5).backing_size(), (500, 150));
	}

	#[test]
	fn invalid_dpr_defaults_to_one() {
		assert_eq!(Viewport::new(10.0, 10.0, 0.0).dpr, 1.0);
		assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).dpr, 1.0);
	}

	#[test]
	fn unknown_sizes() {
		assert!(Viewport::new(800.0, 600.0, 1.0).is_known());
		assert!(!Viewport::new(0.0, 600.0, 1.0).is_known());
		assert!(!Viewport::new(800.0, f64::NAN, 1.0).is_known());
	}
}
