//! Pageflow - a paging onboarding walkthrough widget toolkit.
//!
//! The centerpiece is [`widget::widgets::Walkthrough`], a container that
//! stitches externally supplied screens into a horizontally paging strip
//! with a dot page indicator and a combined skip/done action button.
//!
//! # Example
//!
//! ```no_run
//! use pageflow::render::Size;
//! use pageflow::widget::widgets::{ScreenFactory, Walkthrough};
//!
//! # fn factory() -> impl ScreenFactory { pageflow::widget::widgets::FnScreenFactory::new(|_| None) }
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut walkthrough = Walkthrough::builder()
//!         .screens(["intro", "features", "pricing"])
//!         .done_title("Get Started")
//!         .skip_title("Skip")
//!         .on_dismiss(|| println!("dismiss requested"))
//!         .build(&mut factory())?;
//!
//!     walkthrough.set_viewport(Size::new(390.0, 844.0));
//!     Ok(())
//! }
//! ```

pub use pageflow_core as core;

pub mod error;
pub mod render;
pub mod widget;

pub use error::{WalkthroughError, WalkthroughResult};
