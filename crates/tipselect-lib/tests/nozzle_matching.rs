use tipselect_lib::{nearest_tip, nozzle_number};

#[test]
fn nozzle_number_is_strictly_positive_for_valid_input() {
    for psi in [10.0, 1000.0, 1600.0, 4000.0] {
        for lpm in [1.0, 8.0, 12.0, 20.0] {
            let n = nozzle_number(psi, lpm).unwrap();
            assert!(n > 0.0, "N must be positive for psi={psi}, lpm={lpm}");
        }
    }
}

#[test]
fn nozzle_number_increases_with_flow() {
    let low = nozzle_number(1600.0, 10.0).unwrap();
    let high = nozzle_number(1600.0, 14.0).unwrap();
    assert!(high > low);
}

#[test]
fn nozzle_number_decreases_with_pressure() {
    let low_pressure = nozzle_number(1200.0, 12.0).unwrap();
    let high_pressure = nozzle_number(2400.0, 12.0).unwrap();
    assert!(high_pressure < low_pressure);
}

#[test]
fn nearest_tip_is_always_a_member_of_the_candidates() {
    let tips = [2.5, 3.0, 4.0, 5.5, 8.0];
    for n in [-3.0, 0.0, 2.4, 3.4, 5.0123, 7.2, 100.0] {
        let tip = nearest_tip(n, &tips).unwrap();
        assert!(tips.contains(&tip), "tip {tip} not in candidates for N={n}");
    }
}

#[test]
fn values_beyond_the_chart_clamp_to_the_extremes() {
    let tips = [2.5, 3.0, 4.0, 5.5, 8.0];
    assert_eq!(nearest_tip(0.1, &tips).unwrap(), 2.5);
    assert_eq!(nearest_tip(50.0, &tips).unwrap(), 8.0);
}

#[test]
fn equidistant_candidates_resolve_to_the_smaller_tip() {
    assert_eq!(nearest_tip(5.0, &[4.0, 6.0]).unwrap(), 4.0);
    // Also with neighbors beyond the tied pair.
    assert_eq!(nearest_tip(5.0, &[1.0, 4.0, 6.0, 9.0]).unwrap(), 4.0);
}
