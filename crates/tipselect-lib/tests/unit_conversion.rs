use tipselect_lib::{to_lpm, to_psi, FlowUnit, PressureUnit, LPM_PER_GPM, PSI_PER_BAR};

#[test]
fn primary_to_primary_is_the_identity() {
    for p in [0.5, 1.0, 110.0, 1600.0, 4000.0] {
        assert_eq!(to_psi(p, PressureUnit::Psi).unwrap(), p);
        assert_eq!(to_lpm(p, FlowUnit::Lpm).unwrap(), p);
    }
}

#[test]
fn pressure_round_trip_with_inverse_constant() {
    for bar in [1.0, 7.5, 110.0, 250.0] {
        let psi = to_psi(bar, PressureUnit::Bar).unwrap();
        let back = psi / PSI_PER_BAR;
        assert!((back - bar).abs() < 1e-9, "round trip drifted for {bar}");
    }
}

#[test]
fn flow_round_trip_with_inverse_constant() {
    for gpm in [0.5, 2.0, 3.17, 10.0] {
        let lpm = to_lpm(gpm, FlowUnit::Gpm).unwrap();
        let back = lpm / LPM_PER_GPM;
        assert!((back - gpm).abs() < 1e-9, "round trip drifted for {gpm}");
    }
}

#[test]
fn conversion_applies_no_rounding() {
    // 110 bar must feed the formula as exactly 110 * 14.5037738.
    let psi = to_psi(110.0, PressureUnit::Bar).unwrap();
    assert_eq!(psi, 110.0 * PSI_PER_BAR);
    assert!((psi - 1595.415118).abs() < 1e-6);
}
