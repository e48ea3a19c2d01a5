use crate::core::{ChartTemplate, Dataset, GraphNode, ObjectGraph};
use crate::engine::{ChartInstance, TemplateEngine};
use crate::error::VisualResult;
use crate::render::RasterSurface;

/// No-op template engine used by tests and headless adapter usage.
///
/// Instantiation builds one graph node per declared template object so
/// property application can be observed without a real templating runtime.
#[derive(Debug, Default)]
pub struct NullTemplateEngine {
    object_ids: Vec<String>,
    pub reset_count: usize,
    pub slot_assignments: Vec<(String, String)>,
    pub table_assignments: Vec<(String, String)>,
    pub instantiate_count: usize,
}

impl NullTemplateEngine {
    #[must_use]
    pub fn from_template(template: &ChartTemplate) -> Self {
        Self {
            object_ids: template.object_ids().map(str::to_owned).collect(),
            ..Self::default()
        }
    }

    /// Engine whose instantiated graphs carry exactly `object_ids`,
    /// independent of any template. Lets tests provoke structural
    /// mismatches.
    #[must_use]
    pub fn with_object_ids(object_ids: Vec<String>) -> Self {
        Self {
            object_ids,
            ..Self::default()
        }
    }
}

impl TemplateEngine for NullTemplateEngine {
    type Instance = NullChartInstance;

    fn reset(&mut self) {
        self.reset_count += 1;
        self.slot_assignments.clear();
        self.table_assignments.clear();
    }

    fn assign_slot(&mut self, logical_name: &str, external_name: &str) {
        self.slot_assignments
            .push((logical_name.to_owned(), external_name.to_owned()));
    }

    fn assign_table(&mut self, logical_name: &str, external_name: &str) {
        self.table_assignments
            .push((logical_name.to_owned(), external_name.to_owned()));
    }

    fn instantiate(&mut self, dataset: &Dataset) -> VisualResult<NullChartInstance> {
        self.instantiate_count += 1;
        let mut graph = ObjectGraph::new();
        for object_id in &self.object_ids {
            graph.push(GraphNode::new(object_id.clone()));
        }
        Ok(NullChartInstance {
            serial: self.instantiate_count,
            graph,
            row_count: dataset.row_count(),
            last_resize: None,
            update_count: 0,
            render_count: 0,
        })
    }
}

/// Recording chart instance produced by [`NullTemplateEngine`].
#[derive(Debug)]
pub struct NullChartInstance {
    /// Build ordinal, distinct per instantiation. Lets tests tell reuse from
    /// rebuild without comparing addresses.
    pub serial: usize,
    pub graph: ObjectGraph,
    pub row_count: usize,
    pub last_resize: Option<(f64, f64)>,
    pub update_count: usize,
    pub render_count: usize,
}

impl ChartInstance for NullChartInstance {
    fn graph_mut(&mut self) -> &mut ObjectGraph {
        &mut self.graph
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.last_resize = Some((width, height));
    }

    fn update(&mut self) -> VisualResult<()> {
        self.update_count += 1;
        Ok(())
    }

    fn render(&mut self, _surface: &mut dyn RasterSurface) -> VisualResult<()> {
        self.render_count += 1;
        Ok(())
    }
}
