//! Port anchor resolution.
//!
//! An anchor is the screen-space centre of a rendered port. It is measured
//! from the element's live layout box on every call and never cached, since
//! pan, zoom and node drags move ports between frames.

use log::debug;
use web_sys::Element;

use super::types::Point;

/// An axis-aligned layout box in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutRect {
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
}

impl LayoutRect {
	pub fn width(&self) -> f64 {
		(self.right - self.left).abs()
	}

	pub fn height(&self) -> f64 {
		(self.bottom - self.top).abs()
	}

	pub fn center(&self) -> Point {
		Point::new(
			self.left + self.width() / 2.0,
			self.top + self.height() / 2.0,
		)
	}

	/// Zero-area boxes belong to elements that are not laid out yet.
	pub fn is_degenerate(&self) -> bool {
		self.width() == 0.0 || self.height() == 0.0
	}
}

/// Anything that can report its current layout box.
pub trait LayoutBox {
	fn layout_rect(&self) -> LayoutRect;
}

impl LayoutBox for LayoutRect {
	fn layout_rect(&self) -> LayoutRect {
		*self
	}
}

impl LayoutBox for Element {
	fn layout_rect(&self) -> LayoutRect {
		let rect = self.get_bounding_client_rect();
		LayoutRect {
			left: rect.left(),
			top: rect.top(),
			right: rect.right(),
			bottom: rect.bottom(),
		}
	}
}

/// Resolve the anchor of a mounted port element.
pub fn resolve_anchor<B: LayoutBox + ?Sized>(port: &B) -> Point {
	let rect = port.layout_rect();
	if rect.is_degenerate() {
		debug!("port anchor measured from a zero-area box {rect:?}");
	}
	rect.center()
}
