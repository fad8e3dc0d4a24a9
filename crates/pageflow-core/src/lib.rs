//! Core primitives for the pageflow widget toolkit.
//!
//! This crate provides the two building blocks every widget relies on:
//!
//! - [`Object`] / [`ObjectId`] — stable identity for widgets and other
//!   long-lived UI objects.
//! - [`Signal`] — a type-safe signal/slot mechanism for change
//!   notification between objects.
//!
//! Widgets live in the `pageflow` crate; this crate is deliberately free
//! of any rendering or layout concerns.

pub mod logging;
mod object;
mod signal;

pub use object::{Object, ObjectId};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
