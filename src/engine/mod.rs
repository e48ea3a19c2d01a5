//! Template-engine collaborator seam.
//!
//! The adapter depends on exactly five engine operations: binding reset,
//! slot assignment, table assignment, instantiation, and object lookup by
//! id. Everything else about the templating runtime stays opaque.

mod null_engine;

pub use null_engine::{NullChartInstance, NullTemplateEngine};

use crate::core::{Dataset, GraphNode, ObjectGraph};
use crate::error::VisualResult;
use crate::render::RasterSurface;

/// Contract implemented by the chart templating runtime.
pub trait TemplateEngine {
    type Instance: ChartInstance;

    /// Clears all slot and table bindings accumulated since the last reset.
    fn reset(&mut self);

    /// Binds a declared slot's logical name to its external role name.
    fn assign_slot(&mut self, logical_name: &str, external_name: &str);

    /// Binds a declared table name to a dataset table name.
    fn assign_table(&mut self, logical_name: &str, external_name: &str);

    /// Instantiates a fresh chart from the current bindings and `dataset`.
    fn instantiate(&mut self, dataset: &Dataset) -> VisualResult<Self::Instance>;

    /// Typed lookup of an addressable node in an instantiated chart graph.
    /// "Not found" is reported to the caller, never treated as an unchecked
    /// access.
    fn find_object_by_id<'g>(
        &self,
        graph: &'g mut ObjectGraph,
        object_id: &str,
    ) -> Option<&'g mut GraphNode> {
        graph.find_mut(object_id)
    }
}

/// Contract implemented by one instantiated chart.
///
/// The adapter owns the instance exclusively and mutates it in place through
/// property application and the per-update layout pass.
pub trait ChartInstance {
    /// The instance's mutable object graph, addressable by object id.
    fn graph_mut(&mut self) -> &mut ObjectGraph;

    /// Recomputes internal layout for new logical dimensions.
    fn resize(&mut self, width: f64, height: f64);

    /// Recomputes derived state after data or property changes.
    fn update(&mut self) -> VisualResult<()>;

    /// Paints the chart onto `surface`.
    fn render(&mut self, surface: &mut dyn RasterSurface) -> VisualResult<()>;
}
