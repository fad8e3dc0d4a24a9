//! Logging facilities for pageflow.
//!
//! Pageflow uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pageflow_core::signal";
    /// Walkthrough container target.
    pub const WALKTHROUGH: &str = "pageflow::walkthrough";
}
