//! Adapter pipeline: projection, resolution, caching, application, and the
//! per-update render sequence.

mod instance_cache;
mod projector;
mod property_applier;
mod property_resolver;
mod render_pipeline;
mod runtime;
mod visual;

pub use instance_cache::InstanceCache;
pub use projector::project;
pub use property_applier::apply_properties;
pub use property_resolver::{resolve_properties, ResolvedProperties};
pub use render_pipeline::{render, DEVICE_PIXEL_RATIO, PLACEHOLDER_MESSAGE};
pub use runtime::{InitGate, ReadyState};
pub use visual::{HostVisual, PROPERTY_GROUP};
