//! visual-rs: host-visual adapter scaffold.
//!
//! This crate binds a host application's columnar data view to a declarative
//! chart template and repaints the instantiated chart on every host-triggered
//! update. The template engine and the raster surface are collaborator seams,
//! so the adapter itself stays headless and testable.

pub mod api;
pub mod core;
pub mod engine;
pub mod error;
pub mod host;
pub mod render;
pub mod telemetry;

pub use api::{DEVICE_PIXEL_RATIO, HostVisual};
pub use error::{VisualError, VisualResult};
