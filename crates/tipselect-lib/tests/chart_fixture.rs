use std::path::PathBuf;

use tipselect_lib::{select_tip, FlowUnit, PressureUnit, SizingInput, TipChart};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/tip_chart.json")
}

#[test]
fn fixture_chart_loads_and_validates() {
    let chart = TipChart::from_path(&fixture_path()).expect("fixture should load");
    assert_eq!(chart.len(), 10);
    assert_eq!(chart.tips().first(), Some(&2.5));
    assert_eq!(chart.tips().last(), Some(&8.0));
    assert_eq!(chart.source_path(), Some(fixture_path().as_path()));
}

#[test]
fn reference_reading_matches_the_five_tip() {
    let chart = TipChart::from_path(&fixture_path()).expect("fixture should load");
    let sizing = select_tip(
        &chart,
        &SizingInput {
            pressure: 1600.0,
            pressure_unit: PressureUnit::Psi,
            flow: 12.0,
            flow_unit: FlowUnit::Lpm,
        },
    )
    .expect("valid sizing");

    assert_eq!(sizing.rounded_nozzle_number(), 5.01);
    assert_eq!(sizing.row.tip_size, 5.0);
    assert_eq!(sizing.row.injector_size, 2.5);
    assert_eq!(sizing.row.diffuser_size, 4.0);
    assert_eq!(sizing.row.air_nozzle_size, 2.0);
}

#[test]
fn metric_reading_matches_the_same_row() {
    let chart = TipChart::from_path(&fixture_path()).expect("fixture should load");
    // 110 bar ≈ 1595.4 psi, close enough to the 1600 psi reading that
    // the matched row must be identical.
    let sizing = select_tip(
        &chart,
        &SizingInput {
            pressure: 110.0,
            pressure_unit: PressureUnit::Bar,
            flow: 12.0,
            flow_unit: FlowUnit::Lpm,
        },
    )
    .expect("valid sizing");

    assert_eq!(sizing.row.tip_size, 5.0);
}
