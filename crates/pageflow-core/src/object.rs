//! Object identity for pageflow.
//!
//! Every widget owns an [`ObjectId`], a process-unique handle that stays
//! stable for the object's lifetime. Identity is the only service this
//! module provides; ownership between widgets is expressed directly with
//! Rust ownership rather than a runtime object tree.
//!
//! # Related Modules
//!
//! - [`crate::Signal`] - Objects typically contain signals

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique, stable identifier for a UI object.
///
/// Ids are allocated from a process-wide counter and are never reused.
///
/// # Related Types
///
/// - [`Object`] - Trait that provides [`object_id()`](Object::object_id)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Convert the id to its raw u64 value.
    ///
    /// Useful for interop with external systems that need a numeric ID.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

/// The base trait for all identifiable UI objects.
///
/// Widgets implement this by delegating to their widget base:
///
/// ```ignore
/// impl Object for MyWidget {
///     fn object_id(&self) -> ObjectId {
///         self.base.object_id()
///     }
/// }
/// ```
pub trait Object {
    /// Get this object's unique identifier.
    fn object_id(&self) -> ObjectId;
}
