use pretty_assertions::assert_eq;
use proptest::prelude::*;
use romana::{
    error::RuntimeError,
    numeral::codec::{is_canonical, to_int64, to_roman},
    util::num::floor_div,
};

// Reference floor division: truncate, then step down when the remainder has
// the opposite sign of the divisor.
fn reference_floor_div(left: i64, right: i64) -> i64 {
    let quotient = left / right;
    if left % right != 0 && ((left < 0) != (right < 0)) {
        quotient - 1
    } else {
        quotient
    }
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
}

#[test]
fn zero_sentinel() {
    assert_eq!(to_roman(0).unwrap(), "Z");
    assert_eq!(to_int64("Z"), 0);
}

#[test]
fn known_values() {
    let cases = [(1, "I"),
                 (4, "IV"),
                 (9, "IX"),
                 (14, "XIV"),
                 (40, "XL"),
                 (90, "XC"),
                 (400, "CD"),
                 (900, "CM"),
                 (1994, "MCMXCIV"),
                 (2024, "MMXXIV"),
                 (3888, "MMMDCCCLXXXVIII"),
                 (3999, "MMMCMXCIX"),
                 (-7, "-VII")];

    for (value, numeral) in cases {
        assert_eq!(to_roman(value).unwrap(), numeral);
        assert_eq!(to_int64(numeral.trim_start_matches('-')), value.abs());
    }
}

#[test]
fn overflow_bounds() {
    assert_eq!(to_roman(4000).unwrap_err(), RuntimeError::RomanOverflow { value: 4000 });
    assert_eq!(to_roman(-4000).unwrap_err(), RuntimeError::RomanOverflow { value: -4000 });
    assert!(to_roman(i64::MIN).is_err());
    assert_eq!(to_roman(-3999).unwrap(), "-MMMCMXCIX");
}

#[test]
fn permissive_reading() {
    assert_eq!(to_int64("IIX"), 10);
    assert_eq!(to_int64("VX"), 5);
    assert_eq!(to_int64("IL"), 1);
    assert_eq!(to_int64("XZ"), 10);
    assert_eq!(to_int64("IIII"), 4);
    assert_eq!(to_int64(""), 0);
}

#[test]
fn canonical_check() {
    assert!(is_canonical("MCMXCIV"));
    assert!(!is_canonical("IIII"));
    assert!(!is_canonical("IL"));
    assert!(!is_canonical("ZZ"));
    assert!(!is_canonical(""));
}

proptest! {
    #[test]
    fn roman_round_trip(n in -3999i64..=3999i64) {
        let rendered = to_roman(n).unwrap();
        let (sign, digits) = match rendered.strip_prefix('-') {
            Some(digits) => (-1, digits),
            None => (1, rendered.as_str()),
        };
        prop_assert_eq!(sign * to_int64(digits), n);
        prop_assert!(is_canonical(digits));
    }

    #[test]
    fn out_of_range_overflows(n in 4000i64..=1_000_000i64) {
        prop_assert_eq!(to_roman(n), Err(RuntimeError::RomanOverflow { value: n }));
        prop_assert_eq!(to_roman(-n), Err(RuntimeError::RomanOverflow { value: -n }));
    }

    #[test]
    fn floor_div_matches_reference(a in -10_000i64..=10_000i64, b in non_zero_int()) {
        prop_assert_eq!(floor_div(a, b).unwrap(), reference_floor_div(a, b));
    }

    #[test]
    fn floor_div_by_zero(a in any::<i64>()) {
        prop_assert_eq!(floor_div(a, 0), Err(RuntimeError::DivisionByZero));
    }
}
