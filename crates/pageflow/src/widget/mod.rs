//! Widget system for pageflow.
//!
//! This module provides the widget substrate ([`WidgetBase`], [`Widget`],
//! events, size hints) and the concrete widgets under [`widgets`].

mod base;
mod events;
mod geometry;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EventBase, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, ResizeEvent,
    WidgetEvent,
};
pub use geometry::{SizeHint, SizePolicy, SizePolicyPair};
pub use traits::{PaintContext, Widget};
