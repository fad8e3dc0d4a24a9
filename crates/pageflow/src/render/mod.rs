//! Rendering primitives for pageflow widgets.
//!
//! Widgets draw through the [`Renderer`] trait so the toolkit stays
//! backend-agnostic: a host shell supplies a real implementation, and
//! tests use [`RecordingRenderer`].

mod font;
mod renderer;
mod types;

pub use font::Font;
pub use renderer::{DrawCommand, RecordingRenderer, Renderer};
pub use types::{Color, Point, Rect, Size};
