//! Boundary types for the embedding host: update options, data views, and
//! property-pane enumeration descriptors.

pub mod data_view;
pub mod enumeration;

pub use data_view::{
    CategoricalView, CategoryColumn, DataView, SeriesSource, UpdateOptions, ValueSeries,
    ViewMetadata, Viewport,
};
pub use enumeration::ObjectInstanceDescriptor;
