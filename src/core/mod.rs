pub mod dataset;
pub mod graph;
pub mod template;
pub mod value;

pub use dataset::{ColumnSpec, DataTable, Dataset, Fingerprint, Row, DATASET_NAME, DEFAULT_TABLE_NAME};
pub use graph::{AttributeBinding, GraphNode, ObjectGraph};
pub use template::{
    ChartTemplate, DataSlot, PropertyDeclaration, PropertyTarget, SlotKind, TableRequirement,
};
pub use value::{PathKey, Value};
