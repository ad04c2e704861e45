use crate::class::{StellarClass, StellarGrade, StellarType};
use crate::error::StellarError;

// ============================================================================
// StellarClass
// ============================================================================

#[test]
fn class_order_runs_hot_to_cool() {
    assert!(StellarClass::O < StellarClass::B);
    assert!(StellarClass::G < StellarClass::K);
    assert!(StellarClass::K < StellarClass::M);
    assert_eq!(StellarClass::ALL.len(), 7);
}

#[test]
fn next_cooler_stops_at_m() {
    assert_eq!(StellarClass::O.next_cooler(), Some(StellarClass::B));
    assert_eq!(StellarClass::K.next_cooler(), Some(StellarClass::M));
    assert_eq!(StellarClass::M.next_cooler(), None);
}

#[test]
fn this_and_cooler_includes_self() {
    assert_eq!(
        StellarClass::G.this_and_cooler(),
        &[StellarClass::G, StellarClass::K, StellarClass::M]
    );
    assert_eq!(StellarClass::M.this_and_cooler(), &[StellarClass::M]);
}

#[test]
fn class_display_and_parse() {
    for class in StellarClass::ALL {
        let text = format!("{}", class);
        assert_eq!(text.parse::<StellarClass>().unwrap(), class);
    }
    assert_eq!("g".parse::<StellarClass>().unwrap(), StellarClass::G);
    assert!(matches!(
        "L".parse::<StellarClass>(),
        Err(StellarError::UnknownClass(_))
    ));
}

// ============================================================================
// StellarGrade
// ============================================================================

#[test]
fn grade_rejects_values_above_nine() {
    assert!(StellarGrade::new(9).is_ok());
    assert_eq!(StellarGrade::new(10), Err(StellarError::GradeOutOfRange(10)));
}

#[test]
fn dimmer_grades_are_strictly_greater() {
    let grade = StellarGrade::new(6).unwrap();
    let dimmer: Vec<u8> = grade.dimmer().map(|g| g.value()).collect();

    assert_eq!(dimmer, vec![7, 8, 9]);
    assert_eq!(StellarGrade::MAX.dimmer().count(), 0);
}

#[test]
fn grade_deserialization_is_checked() {
    let ok: StellarGrade = serde_json::from_str("4").unwrap();
    assert_eq!(ok.value(), 4);
    assert!(serde_json::from_str::<StellarGrade>("12").is_err());
}

// ============================================================================
// StellarType
// ============================================================================

#[test]
fn stellar_type_orders_class_before_grade() {
    let g9: StellarType = "G9".parse().unwrap();
    let k0: StellarType = "K0".parse().unwrap();
    let g2: StellarType = "G2".parse().unwrap();

    assert!(g2 < g9);
    assert!(g9 < k0);
    assert_eq!(StellarType::dimmest().to_string(), "M9");
}

#[test]
fn stellar_type_parse_errors() {
    assert!("G10".parse::<StellarType>().is_err());
    assert!("X3".parse::<StellarType>().is_err());
    assert!("".parse::<StellarType>().is_err());
    assert!("G".parse::<StellarType>().is_err());
}

#[test]
fn all_types_are_sorted_brightest_first() {
    let all: Vec<StellarType> = StellarType::all().collect();

    assert_eq!(all.len(), 70);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}
