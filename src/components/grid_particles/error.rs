use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure of a single resize, build or draw step. Never fatal: the caller
/// logs it and tries again on the next trigger.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// `web_sys::window()` returned nothing.
	#[error("no browser window available")]
	NoWindow,
	/// The canvas element is not in the document yet.
	#[error("canvas is not mounted yet")]
	NotMounted,
	/// `getContext("2d")` came back empty.
	#[error("canvas has no 2d context")]
	NoContext,
	/// A host call threw; carries the JS message.
	#[error("{0}")]
	Js(String),
}

impl From<JsValue> for SurfaceError {
	fn from(value: JsValue) -> Self {
		let message = value
			.dyn_ref::<js_sys::Error>()
			.map(|e| String::from(e.message()))
			.or_else(|| value.as_string())
			.unwrap_or_else(|| format!("{value:?}"));
		Self::Js(message)
	}
}
