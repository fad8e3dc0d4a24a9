//! Concrete widget implementations.
//!
//! The [`Walkthrough`] container is the main entry point; [`PushButton`]
//! and [`PageIndicator`] are the building blocks it composes.

mod page_indicator;
mod push_button;
mod walkthrough;

pub use page_indicator::PageIndicator;
pub use push_button::PushButton;
pub use walkthrough::{FnScreenFactory, ScreenFactory, Walkthrough, WalkthroughBuilder};
