//! Top-level host visual: the update boundary, the readiness gate, and the
//! outermost error boundary.

use tracing::{debug, error};

use crate::core::template::ChartTemplate;
use crate::core::DEFAULT_TABLE_NAME;
use crate::engine::{ChartInstance, TemplateEngine};
use crate::error::VisualResult;
use crate::host::{ObjectInstanceDescriptor, UpdateOptions};
use crate::render::RasterSurface;

use super::{
    apply_properties, project, render, resolve_properties, InitGate, InstanceCache,
    ResolvedProperties,
};

/// Host property-pane group that persisted overrides are read from and that
/// enumeration answers for.
pub const PROPERTY_GROUP: &str = "chartOptions";

/// Adapter binding one chart template to a host-driven update loop.
///
/// Owns the chart instance and the resolved properties exclusively. The
/// template is shared read-only across updates; the host's raw data view is
/// never mutated. No failure ever escapes toward the host: updates arriving
/// before runtime readiness are queued, and a failed update is logged while
/// the last successfully rendered frame stays up.
pub struct HostVisual<E: TemplateEngine, S: RasterSurface> {
    template: ChartTemplate,
    engine: E,
    surface: S,
    cache: InstanceCache<E::Instance>,
    properties: ResolvedProperties,
    gate: InitGate<UpdateOptions>,
}

impl<E: TemplateEngine, S: RasterSurface> HostVisual<E, S> {
    /// Creates the visual with its properties seeded to declared defaults.
    pub fn new(template: ChartTemplate, engine: E, surface: S) -> Self {
        let properties = resolve_properties(&template, None);
        Self {
            template,
            engine,
            surface,
            cache: InstanceCache::new(),
            properties,
            gate: InitGate::new(),
        }
    }

    /// Host update entry point.
    ///
    /// Queues the update until the one-time runtime initialization resolves;
    /// afterwards updates run synchronously and immediately.
    pub fn update(&mut self, options: UpdateOptions) {
        if let Some(options) = self.gate.submit(options) {
            self.run_update(&options);
        }
    }

    /// Signals that the one-time runtime initialization has resolved and
    /// runs every deferred update in submission order.
    pub fn notify_runtime_ready(&mut self) {
        for options in self.gate.mark_ready() {
            self.run_update(&options);
        }
    }

    fn run_update(&mut self, options: &UpdateOptions) {
        if let Err(err) = self.try_update(options) {
            // the host must never see a failure; the previous frame stays up
            error!(error = %err, "update failed");
        }
    }

    fn try_update(&mut self, options: &UpdateOptions) -> VisualResult<()> {
        let dataset = options
            .primary_view()
            .and_then(|view| project(&self.template, view));
        self.properties = resolve_properties(
            &self.template,
            options.persisted_overrides(PROPERTY_GROUP),
        );

        let engine = &mut self.engine;
        let template = &self.template;
        let instance = self.cache.get_or_build(dataset.as_ref(), |dataset| {
            // bindings never accumulate across rebuilds
            engine.reset();
            for slot in &template.data_slots {
                engine.assign_slot(&slot.name, &slot.role);
            }
            for table in &template.tables {
                engine.assign_table(&table.name, DEFAULT_TABLE_NAME);
            }
            engine.instantiate(dataset)
        })?;

        match instance {
            Some(instance) => {
                // property application runs before the surface is touched so
                // a structural mismatch leaves the previous frame intact
                apply_properties(template, &*engine, instance.graph_mut(), &self.properties)?;
                render(Some(instance), &mut self.surface, options.viewport)
            }
            None => {
                debug!("no dataset projected, rendering placeholder");
                render(None::<&mut E::Instance>, &mut self.surface, options.viewport)
            }
        }
    }

    /// Answers the host's property-pane enumeration for one object group.
    /// Unrecognized group names yield an empty list.
    #[must_use]
    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<ObjectInstanceDescriptor> {
        if object_name != PROPERTY_GROUP {
            return Vec::new();
        }
        vec![ObjectInstanceDescriptor {
            object_name: object_name.to_owned(),
            properties: self.properties.as_map().clone(),
            selector: None,
        }]
    }

    #[must_use]
    pub fn template(&self) -> &ChartTemplate {
        &self.template
    }

    #[must_use]
    pub fn properties(&self) -> &ResolvedProperties {
        &self.properties
    }

    #[must_use]
    pub fn has_instance(&self) -> bool {
        self.cache.has_instance()
    }

    #[must_use]
    pub fn instance(&self) -> Option<&E::Instance> {
        self.cache.instance()
    }

    pub fn instance_mut(&mut self) -> Option<&mut E::Instance> {
        self.cache.instance_mut()
    }

    #[must_use]
    pub fn pending_updates(&self) -> usize {
        self.gate.pending()
    }

    #[must_use]
    pub fn is_runtime_ready(&self) -> bool {
        self.gate.is_ready()
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
