/// Lavender, used whenever the configured color cannot be parsed.
pub const FALLBACK_RGB: Rgb = Rgb(177, 157, 219);

/// 8-bit red, green, blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	/// CSS color string with the given alpha channel.
	pub fn rgba(&self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
	}
}

/// Resolve a `#rrggbb` / `#rgb` string (leading `#` optional) into RGB.
///
/// Short forms are read as one 12-bit value and split with the same shifts
/// as the long form, so `"fff"` resolves to `(0, 15, 255)`.
pub fn resolve_color(hex: Option<&str>) -> Rgb {
	let Some(hex) = hex else {
		return FALLBACK_RGB;
	};
	let digits = hex.replacen('#', "", 1);
	if !matches!(digits.len(), 3 | 6) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
		return FALLBACK_RGB;
	}
	match u32::from_str_radix(&digits, 16) {
		Ok(v) => Rgb(
			((v >> 16) & 255) as u8,
			((v >> 8) & 255) as u8,
			(v & 255) as u8,
		),
		Err(_) => FALLBACK_RGB,
	}
}
