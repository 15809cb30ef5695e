//! End-to-end extraction scenarios over series and table fixtures.

use fieldseq_core::prelude::*;
use fieldseq_extract::{Derivation, FieldRegistry, FieldSeq};

fn cpu_series() -> PointSeries {
    PointSeries::from_points(
        "A",
        "cpu",
        vec![
            Point::number(10.0, 1_000),
            Point::number(20.0, 2_000),
            Point::number(30.0, 3_000),
            Point::number(40.0, 4_000),
        ],
    )
}

fn host_table() -> Table {
    let mut table = Table::new("B", vec![Column::new("host"), Column::time("ts")]);
    table
        .push_row(vec![
            Some(Value::Text("h1".into())),
            Some(Value::Number(100.0)),
        ])
        .unwrap();
    table
        .push_row(vec![
            Some(Value::Text("h2".into())),
            Some(Value::Number(200.0)),
        ])
        .unwrap();
    table
}

fn numbers(cells: &[Cell]) -> Vec<f64> {
    cells
        .iter()
        .map(|c| c.as_ref().and_then(Value::as_number).unwrap())
        .collect()
}

fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{context}: expected {expected} but got {actual}"
    );
}

#[test]
fn cpu_series_value_derivation() {
    let series = cpu_series();
    let seq = FieldSeq::from_series(&series, Derivation::Value);

    assert_eq!(seq.name(), "cpu");
    assert_eq!(seq.field_type(), Some(FieldType::Number));
    assert_eq!(seq.first(), Some(&Value::Number(10.0)));
    assert_eq!(
        numbers(&seq.materialize().unwrap()),
        vec![10.0, 20.0, 30.0, 40.0]
    );
}

#[test]
fn cpu_series_index_derivation() {
    let series = cpu_series();
    let seq = FieldSeq::from_series(&series, Derivation::Index);

    assert_eq!(seq.name(), "cpu@index");
    assert_eq!(
        numbers(&seq.materialize().unwrap()),
        vec![0.0, 1.0, 2.0, 3.0]
    );
}

#[test]
fn cpu_series_time_derivation() {
    let series = cpu_series();
    let seq = FieldSeq::from_series(&series, Derivation::Time);

    assert_eq!(
        numbers(&seq.materialize().unwrap()),
        vec![1_000.0, 2_000.0, 3_000.0, 4_000.0]
    );
}

#[test]
fn cpu_series_frequency_derivation() {
    let series = cpu_series();
    let seq = FieldSeq::from_series(&series, Derivation::Frequency);

    // df = 1 / (1000 * 4 * 2) = 0.000125; centered axis.
    let axis = numbers(&seq.materialize().unwrap());
    assert_close(axis[0], -0.00025, "axis[0]");
    assert_close(axis[1], -0.000125, "axis[1]");
    assert_close(axis[2], 0.0, "axis[2]");
    assert_close(axis[3], 0.000125, "axis[3]");
}

#[test]
fn cpu_series_spectrum_derivation() {
    let series = cpu_series();
    let seq = FieldSeq::from_series(&series, Derivation::Spectrum);

    assert_eq!(seq.name(), "cpu@fft");
    assert_eq!(seq.field_type(), Some(FieldType::Number));
    assert_eq!(seq.first(), Some(&Value::Number(0.0)));

    // DFT of [10, 20, 30, 40]: |X|² = [10000, 800, 400, 800] in standard
    // order, centered so the DC bin lines up with the zero of the
    // frequency axis.
    let power = numbers(&seq.materialize().unwrap());
    assert_close(power[0], 400.0, "power[0]");
    assert_close(power[1], 800.0, "power[1]");
    assert_close(power[2], 10_000.0, "power[2]");
    assert_close(power[3], 800.0, "power[3]");
}

#[test]
fn host_table_scenario() {
    let table = host_table();

    let host = FieldSeq::from_table_column(&table, 0).unwrap();
    assert_eq!(host.field_type(), Some(FieldType::Text));
    assert_eq!(host.first(), Some(&Value::Text("h1".into())));
    assert_eq!(host.all_keys(), ["host", "B/host", "B[0]"]);

    let ts = FieldSeq::from_table_column(&table, 1).unwrap();
    assert_eq!(ts.field_type(), Some(FieldType::Epoch));
    assert_eq!(ts.first(), Some(&Value::Number(100.0)));

    let rows = FieldSeq::from_table_rows(&table);
    assert_eq!(rows.name(), "B@row");
    assert_eq!(numbers(&rows.materialize().unwrap()), vec![0.0, 1.0]);
}

#[test]
fn registry_over_mixed_sources() {
    let series = cpu_series();
    let table = host_table();

    let mut registry = FieldRegistry::new();
    registry
        .insert_series(&series, &[Derivation::Value, Derivation::Time, Derivation::Index])
        .unwrap();
    registry.insert_table(&table).unwrap();

    assert_eq!(registry.len(), 6);

    // Series sequences answer to short, qualified, and shorthand keys.
    for key in ["cpu", "A@value", "A/cpu", "@value"] {
        assert_eq!(registry.lookup(key).unwrap().name(), "cpu", "key {key}");
    }

    // Table sequences answer to label, qualified, and positional keys.
    let host = registry.lookup("B[0]").unwrap();
    assert_eq!(host.name(), "host");
    assert_eq!(
        host.materialize().unwrap(),
        vec![
            Some(Value::Text("h1".into())),
            Some(Value::Text("h2".into()))
        ]
    );
}

#[test]
fn wire_fixtures_deserialize_and_extract() {
    let series: PointSeries = serde_json::from_str(
        r#"{
            "ref_id": "A",
            "label": "cpu",
            "points": [[10, 1000], [null, 2000], [30, 3000]]
        }"#,
    )
    .unwrap();

    let seq = FieldSeq::from_series(&series, Derivation::Value);
    assert_eq!(seq.first(), Some(&Value::Number(10.0)));
    assert_eq!(
        seq.materialize().unwrap(),
        vec![Some(Value::Number(10.0)), None, Some(Value::Number(30.0))]
    );

    let table: Table = serde_json::from_str(
        r#"{
            "ref_id": "B",
            "columns": [{"label": "host"}, {"label": "ts", "column_type": "time"}],
            "rows": [["h1", 100], ["h2", 200]]
        }"#,
    )
    .unwrap();

    let ts = FieldSeq::from_table_column(&table, 1).unwrap();
    assert_eq!(ts.field_type(), Some(FieldType::Epoch));
    assert_eq!(numbers(&ts.materialize().unwrap()), vec![100.0, 200.0]);
}

#[test]
fn all_null_series_degrades_silently() {
    let series = PointSeries::from_points(
        "A",
        "gaps",
        vec![Point::null(1_000), Point::null(2_000), Point::null(3_000)],
    );
    let seq = FieldSeq::from_series(&series, Derivation::Value);

    assert_eq!(seq.field_type(), None);
    assert_eq!(seq.first(), None);
    assert_eq!(seq.materialize().unwrap(), vec![None, None, None]);
}

#[test]
fn empty_table_extracts_empty_sequences() {
    let table = Table::new("B", vec![Column::new("host"), Column::time("ts")]);

    for index in 0..table.column_count() {
        let seq = FieldSeq::from_table_column(&table, index).unwrap();
        assert_eq!(seq.len(), 0);
        assert!(seq.materialize().unwrap().is_empty());
    }

    let rows = FieldSeq::from_table_rows(&table);
    assert_eq!(rows.len(), 0);
    assert!(rows.materialize().unwrap().is_empty());
}
