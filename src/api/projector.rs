//! Projects the host's categorical data view into a canonical dataset.

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::template::{ChartTemplate, DataSlot, SlotKind};
use crate::core::{ColumnSpec, DataTable, Dataset, Row, Value, DATASET_NAME, DEFAULT_TABLE_NAME};
use crate::host::{CategoricalView, DataView, ValueSeries};

/// Projects `view` into a row-oriented dataset.
///
/// Returns `None` when the view lacks the primary category column or any
/// value series, or when any declared slot matches no value series by role
/// name. Rows missing a value for any slot are dropped whole; ids of the
/// surviving rows keep their original category indices.
#[must_use]
pub fn project(template: &ChartTemplate, view: &DataView) -> Option<Dataset> {
    let categorical = view.categorical.as_ref()?;
    let category = categorical.categories.first()?;
    if categorical.values.is_empty() {
        return None;
    }

    let matched = match_slots(template, categorical)?;

    let row_count = category.values.len();
    let rows = build_rows(template, &matched, row_count);

    let dropped = row_count - rows.len();
    if dropped > 0 {
        warn!(
            total = row_count,
            dropped,
            retained = rows.len(),
            "dropped rows with missing slot values"
        );
    }

    let columns = template
        .data_slots
        .iter()
        .map(|slot| ColumnSpec {
            name: slot.role.clone(),
            kind: slot.kind,
        })
        .collect();

    Some(Dataset {
        name: DATASET_NAME.to_owned(),
        tables: vec![DataTable {
            name: DEFAULT_TABLE_NAME.to_owned(),
            columns,
            rows,
        }],
    })
}

/// Matches every declared slot to a value series by role flag. The last
/// series claiming the role wins; the ambiguity is kept for template
/// compatibility and surfaced as a warning.
fn match_slots<'v>(
    template: &ChartTemplate,
    categorical: &'v CategoricalView,
) -> Option<SmallVec<[&'v ValueSeries; 4]>> {
    let mut matched = SmallVec::with_capacity(template.data_slots.len());
    for slot in &template.data_slots {
        let mut found: Option<(usize, &ValueSeries)> = None;
        let mut match_count = 0_usize;
        for (series_index, series) in categorical.values.iter().enumerate() {
            if series.has_role(&slot.role) {
                match_count += 1;
                found = Some((series_index, series));
            }
        }
        let Some((series_index, series)) = found else {
            debug!(
                slot = slot.name.as_str(),
                role = slot.role.as_str(),
                "no value series matches declared slot role"
            );
            return None;
        };
        if match_count > 1 {
            warn!(
                role = slot.role.as_str(),
                series_index,
                match_count,
                "multiple value series match role, binding the last"
            );
        }
        matched.push(series);
    }
    Some(matched)
}

#[cfg(not(feature = "parallel-projection"))]
fn build_rows(template: &ChartTemplate, matched: &[&ValueSeries], row_count: usize) -> Vec<Row> {
    (0..row_count)
        .filter_map(|index| build_row(template, matched, index))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn build_rows(template: &ChartTemplate, matched: &[&ValueSeries], row_count: usize) -> Vec<Row> {
    use rayon::prelude::*;

    (0..row_count)
        .into_par_iter()
        .filter_map(|index| build_row(template, matched, index))
        .collect()
}

/// Builds the row for one category index, or `None` when any slot's value is
/// missing at that index.
fn build_row(template: &ChartTemplate, matched: &[&ValueSeries], index: usize) -> Option<Row> {
    let mut values = IndexMap::with_capacity(template.data_slots.len());
    for (slot, series) in template.data_slots.iter().zip(matched) {
        let value = slot_value(slot, series.values.get(index))?;
        values.insert(slot.role.clone(), value);
    }
    Some(Row {
        id: format!("ID{index}"),
        values,
    })
}

fn slot_value(slot: &DataSlot, raw: Option<&Value>) -> Option<Value> {
    let raw = raw?;
    match slot.kind {
        SlotKind::Categorical => raw.to_text().map(Value::Text),
        SlotKind::Numeric => match raw {
            Value::Null => None,
            // a non-finite number has no deterministic serialized form
            Value::Number(number) if !number.is_finite() => None,
            value => Some(value.clone()),
        },
    }
}
