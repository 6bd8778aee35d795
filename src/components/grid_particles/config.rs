use super::color::{Rgb, resolve_color};

pub const DEFAULT_COLUMNS: usize = 15;
pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_MOBILE_COLUMNS: usize = 8;
pub const DEFAULT_MOBILE_ROWS: usize = 5;
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_NODE_SIZE: f64 = 2.0;
pub const DEFAULT_LINE_WIDTH: f64 = 0.5;
pub const DEFAULT_HOVER_RADIUS: f64 = 150.0;
pub const DEFAULT_COLOR: &str = "#b39ddb";
pub const DEFAULT_GLOW_INTENSITY: f64 = 0.8;

/// Effect settings after sanitizing the raw component props.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
	/// Desktop cells across, at least 1.
	pub columns: usize,
	/// Desktop cells down, at least 1.
	pub rows: usize,
	/// Cells across below the breakpoint.
	pub mobile_columns: usize,
	/// Cells down below the breakpoint.
	pub mobile_rows: usize,
	/// Viewport width, in CSS pixels, under which the mobile counts apply.
	pub mobile_breakpoint: f64,
	/// Node radius in CSS pixels.
	pub node_size: f64,
	/// Edge stroke width in CSS pixels.
	pub line_width: f64,
	/// Distance within which nodes and edges brighten.
	pub hover_radius: f64,
	/// Resolved draw color.
	pub rgb: Rgb,
	/// Multiplier on pointer-proximity brightening, within `[0, 1]`.
	pub glow_intensity: f64,
}

impl Default for GridConfig {
	fn default() -> Self {
		Self::new(GridProps::default())
	}
}

/// Raw, unchecked settings as handed over by the component.
///
/// Fields mirror [`GridConfig`]; zero counts, non-positive lengths and a
/// non-finite glow are corrected by [`GridConfig::new`].
#[derive(Clone, Debug)]
pub struct GridProps {
	/// Desktop cells across.
	pub columns: usize,
	/// Desktop cells down.
	pub rows: usize,
	/// Mobile cells across.
	pub mobile_columns: usize,
	/// Mobile cells down.
	pub mobile_rows: usize,
	/// Mobile breakpoint in CSS pixels.
	pub mobile_breakpoint: f64,
	/// Node radius.
	pub node_size: f64,
	/// Edge stroke width.
	pub line_width: f64,
	/// Brightening radius.
	pub hover_radius: f64,
	/// Hex color; `None` selects the fallback.
	pub color: Option<String>,
	/// Unclamped glow multiplier.
	pub glow_intensity: f64,
}

impl Default for GridProps {
	fn default() -> Self {
		Self {
			columns: DEFAULT_COLUMNS,
			rows: DEFAULT_ROWS,
			mobile_columns: DEFAULT_MOBILE_COLUMNS,
			mobile_rows: DEFAULT_MOBILE_ROWS,
			mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
			node_size: DEFAULT_NODE_SIZE,
			line_width: DEFAULT_LINE_WIDTH,
			hover_radius: DEFAULT_HOVER_RADIUS,
			color: Some(DEFAULT_COLOR.into()),
			glow_intensity: DEFAULT_GLOW_INTENSITY,
		}
	}
}

fn positive_or(value: f64, default: f64) -> f64 {
	if value.is_finite() && value > 0.0 {
		value
	} else {
		default
	}
}

impl GridConfig {
	/// Sanitize raw props and resolve the color once.
	pub fn new(props: GridProps) -> Self {
		let glow_intensity = if props.glow_intensity.is_finite() {
			props.glow_intensity.clamp(0.0, 1.0)
		} else {
			DEFAULT_GLOW_INTENSITY
		};
		Self {
			columns: props.columns.max(1),
			rows: props.rows.max(1),
			mobile_columns: props.mobile_columns.max(1),
			mobile_rows: props.mobile_rows.max(1),
			mobile_breakpoint: positive_or(props.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT),
			node_size: positive_or(props.node_size, DEFAULT_NODE_SIZE),
			line_width: positive_or(props.line_width, DEFAULT_LINE_WIDTH),
			hover_radius: positive_or(props.hover_radius, DEFAULT_HOVER_RADIUS),
			rgb: resolve_color(props.color.as_deref()),
			glow_intensity,
		}
	}
}
