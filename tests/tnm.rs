use proptest::prelude::*;
use prostate_navigator::{
    staging::tnm::{normalize, Axis, Basis, Tnm, TnmCategory},
    StagingError,
};

#[test]
fn prefixed_codes_round_trip_to_canonical() {
    for axis in [Axis::T, Axis::N, Axis::M] {
        for code in axis.codes() {
            for prefix in ["c", "p", "C", "P", ""] {
                let raw = format!("{prefix}{code}");
                assert_eq!(normalize(&raw, axis).unwrap(), *code, "input {raw}");
            }
        }
    }
}

#[test]
fn conventional_spelling_is_accepted() {
    assert_eq!(normalize(" cT2a ", Axis::T).unwrap(), "t2a");
    assert_eq!(normalize("pN1", Axis::N).unwrap(), "n1");
    assert_eq!(normalize("M1c", Axis::M).unwrap(), "m1c");
}

#[test]
fn wrong_axis_letter_is_rejected() {
    let err = normalize("cN0", Axis::T).unwrap_err();
    assert!(matches!(
        err,
        StagingError::InvalidStageFormat { axis: Axis::T, .. }
    ));
    assert!(normalize("", Axis::M).is_err());
    assert!(normalize("c", Axis::N).is_err());
    assert!(normalize("2a", Axis::T).is_err());
}

#[test]
fn basis_follows_prefix() {
    assert_eq!(TnmCategory::t("pT3a").unwrap().basis(), Basis::Pathologic);
    assert_eq!(TnmCategory::t("cT3a").unwrap().basis(), Basis::Clinical);
    assert_eq!(TnmCategory::t("T3a").unwrap().basis(), Basis::Clinical);
}

#[test]
fn predicates_use_prefix_matching() {
    let t2a = TnmCategory::t("cT2a").unwrap();
    assert!(t2a.is_t2());
    assert!(t2a.is_t2a());
    assert!(!t2a.is_t2b_to_t2c());

    let t2c = TnmCategory::t("cT2c").unwrap();
    assert!(t2c.is_t2() && t2c.is_t2b_to_t2c() && !t2c.is_t2a());

    assert!(TnmCategory::t("cT3b").unwrap().is_t3_to_t4());
    assert!(TnmCategory::t("cT4").unwrap().is_t3_to_t4());
    assert!(TnmCategory::t("cT1c").unwrap().is_t1());

    assert!(TnmCategory::n("cN1").unwrap().has_regional_nodes());
    assert!(!TnmCategory::n("cNX").unwrap().has_regional_nodes());
    for m in ["cM1", "cM1a", "cM1b", "cM1c"] {
        assert!(TnmCategory::m(m).unwrap().has_distant_metastasis(), "{m}");
    }
    assert!(!TnmCategory::m("cM0").unwrap().has_distant_metastasis());
}

#[test]
fn tx_and_t0_are_exact_matches() {
    assert!(TnmCategory::t("cTX").unwrap().is_tx_or_t0());
    assert!(TnmCategory::t("cT0").unwrap().is_tx_or_t0());
    assert!(!TnmCategory::t("cT1").unwrap().is_tx_or_t0());
}

#[test]
fn display_restores_conventional_spelling() {
    let tnm = Tnm::parse("ct1c", "cnx", "pm1b").unwrap();
    assert_eq!(tnm.to_string(), "cT1c, cNX, pM1b");
    assert!(!tnm.is_clinical());
}

proptest! {
    #[test]
    fn strings_without_axis_letter_never_normalize(raw in "[a-z0-9]{0,6}") {
        let stripped = raw
            .strip_prefix('p')
            .or_else(|| raw.strip_prefix('c'))
            .unwrap_or(&raw);
        prop_assume!(!stripped.starts_with('t'));
        prop_assert!(normalize(&raw, Axis::T).is_err());
    }

    #[test]
    fn normalized_codes_start_with_axis(suffix in "[0-4][a-c]?") {
        let code = normalize(&format!("cT{suffix}"), Axis::T).unwrap();
        prop_assert!(code.starts_with('t'));
        prop_assert_eq!(code, format!("t{suffix}"));
    }
}
