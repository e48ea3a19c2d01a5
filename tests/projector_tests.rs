use visual_rs::api::project;
use visual_rs::core::{ChartTemplate, DataSlot, Value};
use visual_rs::host::{CategoricalView, CategoryColumn, DataView, SeriesSource, ValueSeries};

fn single_slot_template() -> ChartTemplate {
    ChartTemplate::new()
        .with_slot(DataSlot::numeric("size", "Measure"))
        .with_table("main")
}

fn two_slot_template() -> ChartTemplate {
    ChartTemplate::new()
        .with_slot(DataSlot::categorical("label", "Category"))
        .with_slot(DataSlot::numeric("size", "Measure"))
        .with_table("main")
}

fn series(role: &str, values: Vec<Value>) -> ValueSeries {
    let mut source = SeriesSource::default();
    source.roles.insert(role.to_owned(), true);
    ValueSeries { source, values }
}

fn view(categories: Vec<Value>, value_series: Vec<ValueSeries>) -> DataView {
    DataView {
        categorical: Some(CategoricalView {
            categories: vec![CategoryColumn { values: categories }],
            values: value_series,
        }),
        metadata: None,
    }
}

fn text_categories(labels: &[&str]) -> Vec<Value> {
    labels.iter().map(|label| Value::from(*label)).collect()
}

#[test]
fn missing_categorical_shape_projects_to_none() {
    let template = single_slot_template();
    assert!(project(&template, &DataView::default()).is_none());
}

#[test]
fn missing_primary_category_column_projects_to_none() {
    let template = single_slot_template();
    let view = DataView {
        categorical: Some(CategoricalView {
            categories: Vec::new(),
            values: vec![series("Measure", vec![Value::from(1.0)])],
        }),
        metadata: None,
    };
    assert!(project(&template, &view).is_none());
}

#[test]
fn missing_value_series_projects_to_none() {
    let template = single_slot_template();
    let view = view(text_categories(&["A"]), Vec::new());
    assert!(project(&template, &view).is_none());
}

#[test]
fn unmatched_slot_role_projects_to_none() {
    let template = single_slot_template();
    let view = view(
        text_categories(&["A"]),
        vec![series("SomethingElse", vec![Value::from(1.0)])],
    );
    assert!(project(&template, &view).is_none());
}

#[test]
fn rows_with_null_slot_values_are_dropped_whole() {
    let template = single_slot_template();
    let view = view(
        text_categories(&["A", "B", "C"]),
        vec![series(
            "Measure",
            vec![Value::from(10.0), Value::Null, Value::from(30.0)],
        )],
    );

    let dataset = project(&template, &view).expect("dataset");
    let table = dataset.default_table().expect("default table");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].id, "ID0");
    assert_eq!(table.rows[1].id, "ID2");
    assert_eq!(table.rows[0].values.get("Measure"), Some(&Value::from(10.0)));
    assert_eq!(table.rows[1].values.get("Measure"), Some(&Value::from(30.0)));
}

#[test]
fn one_missing_value_in_any_slot_drops_the_row() {
    let template = two_slot_template();
    let view = view(
        text_categories(&["A", "B", "C"]),
        vec![
            series(
                "Category",
                vec![Value::from("A"), Value::from("B"), Value::from("C")],
            ),
            series(
                "Measure",
                vec![Value::from(1.0), Value::Null, Value::from(3.0)],
            ),
        ],
    );

    let dataset = project(&template, &view).expect("dataset");
    assert_eq!(dataset.row_count(), 2);
}

#[test]
fn categorical_slot_values_coerce_to_text() {
    let template = two_slot_template();
    let view = view(
        text_categories(&["x", "y"]),
        vec![
            series("Category", vec![Value::from(1.0), Value::from(2.0)]),
            series("Measure", vec![Value::from(10.0), Value::from(20.0)]),
        ],
    );

    let dataset = project(&template, &view).expect("dataset");
    let table = dataset.default_table().expect("default table");
    assert_eq!(table.rows[0].values.get("Category"), Some(&Value::from("1")));
    assert_eq!(table.rows[1].values.get("Category"), Some(&Value::from("2")));
}

#[test]
fn numeric_slot_values_keep_their_raw_form() {
    let template = single_slot_template();
    let view = view(
        text_categories(&["A"]),
        vec![series("Measure", vec![Value::from(2.5)])],
    );

    let dataset = project(&template, &view).expect("dataset");
    let table = dataset.default_table().expect("default table");
    assert_eq!(table.rows[0].values.get("Measure"), Some(&Value::from(2.5)));
}

#[test]
fn last_series_matching_a_role_wins() {
    let template = single_slot_template();
    let view = view(
        text_categories(&["A", "B"]),
        vec![
            series("Measure", vec![Value::from(1.0), Value::from(2.0)]),
            series("Measure", vec![Value::from(10.0), Value::from(20.0)]),
        ],
    );

    let dataset = project(&template, &view).expect("dataset");
    let table = dataset.default_table().expect("default table");
    assert_eq!(table.rows[0].values.get("Measure"), Some(&Value::from(10.0)));
    assert_eq!(table.rows[1].values.get("Measure"), Some(&Value::from(20.0)));
}

#[test]
fn non_finite_numeric_values_drop_the_row() {
    let template = single_slot_template();
    let view = view(
        text_categories(&["A", "B", "C"]),
        vec![series(
            "Measure",
            vec![
                Value::from(1.0),
                Value::from(f64::NAN),
                Value::from(f64::INFINITY),
            ],
        )],
    );

    let dataset = project(&template, &view).expect("dataset");
    assert_eq!(dataset.row_count(), 1);
    let table = dataset.default_table().expect("default table");
    assert_eq!(table.rows[0].id, "ID0");
}

#[test]
fn categories_beyond_series_length_are_dropped() {
    let template = single_slot_template();
    let view = view(
        text_categories(&["A", "B", "C"]),
        vec![series("Measure", vec![Value::from(1.0), Value::from(2.0)])],
    );

    let dataset = project(&template, &view).expect("dataset");
    assert_eq!(dataset.row_count(), 2);
}

#[test]
fn projected_columns_mirror_declared_slots() {
    let template = two_slot_template();
    let view = view(
        text_categories(&["A"]),
        vec![
            series("Category", vec![Value::from("A")]),
            series("Measure", vec![Value::from(1.0)]),
        ],
    );

    let dataset = project(&template, &view).expect("dataset");
    let table = dataset.default_table().expect("default table");
    let names: Vec<&str> = table
        .columns
        .iter()
        .map(|column| column.name.as_str())
        .collect();
    assert_eq!(names, vec!["Category", "Measure"]);
}
