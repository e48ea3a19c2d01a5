use proptest::prelude::*;
use visual_rs::api::project;
use visual_rs::core::{ChartTemplate, DataSlot, Value};
use visual_rs::host::{CategoricalView, CategoryColumn, DataView, SeriesSource, ValueSeries};

fn template() -> ChartTemplate {
    ChartTemplate::new()
        .with_slot(DataSlot::numeric("size", "Measure"))
        .with_table("main")
}

fn measure_view(samples: &[Option<f64>]) -> DataView {
    let mut source = SeriesSource::default();
    source.roles.insert("Measure".to_owned(), true);
    let values = samples
        .iter()
        .map(|sample| sample.map_or(Value::Null, Value::from))
        .collect();
    DataView {
        categorical: Some(CategoricalView {
            categories: vec![CategoryColumn {
                values: samples.iter().map(|_| Value::from("c")).collect(),
            }],
            values: vec![ValueSeries { source, values }],
        }),
        metadata: None,
    }
}

fn sample_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None::<f64>),
        (-10_000.0f64..10_000.0).prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn retained_rows_are_exactly_the_non_null_indices(
        samples in prop::collection::vec(sample_strategy(), 0..64)
    ) {
        let template = template();
        let dataset = project(&template, &measure_view(&samples)).expect("series is present");
        let table = dataset.default_table().expect("default table");

        let expected: Vec<String> = samples
            .iter()
            .enumerate()
            .filter_map(|(index, sample)| sample.map(|_| format!("ID{index}")))
            .collect();
        let actual: Vec<String> = table.rows.iter().map(|row| row.id.clone()).collect();
        prop_assert_eq!(actual, expected);

        for row in &table.rows {
            let value = row.values.get("Measure").expect("slot value present");
            prop_assert!(!value.is_null());
        }
    }

    #[test]
    fn identical_views_produce_equal_fingerprints(
        samples in prop::collection::vec(sample_strategy(), 1..32)
    ) {
        let template = template();
        let first = project(&template, &measure_view(&samples)).expect("dataset");
        let second = project(&template, &measure_view(&samples)).expect("dataset");
        prop_assert_eq!(
            first.fingerprint().expect("fingerprint"),
            second.fingerprint().expect("fingerprint")
        );
    }

    #[test]
    fn changing_one_retained_value_changes_the_fingerprint(
        samples in prop::collection::vec((-10_000.0f64..10_000.0).prop_map(Some), 1..32)
    ) {
        let template = template();
        let base = project(&template, &measure_view(&samples)).expect("dataset");

        let mut mutated = samples.clone();
        let first = mutated[0].expect("all samples retained");
        mutated[0] = Some(first + 1.0);
        let changed = project(&template, &measure_view(&mutated)).expect("dataset");

        prop_assert_ne!(
            base.fingerprint().expect("fingerprint"),
            changed.fingerprint().expect("fingerprint")
        );
    }
}
