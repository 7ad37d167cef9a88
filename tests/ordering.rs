use std::cmp::Ordering;

use gover::{compare, compare_decimal, decrement_decimal, is_valid, max, parse, toolchain};

/// Versions in ascending order, with equivalent spellings grouped together.
const ASCENDING: &[&[&str]] = &[
    &["", "garbage", "01.2", "1.02", "1.21rc"],
    &["0"],
    &["1.0rc1"],
    &["1", "1.0", "1.0.0"],
    &["1.0.1"],
    &["1.8.5rc4"],
    &["1.8.5rc5"],
    &["1.8.5"],
    &["1.9", "1.9.0"],
    &["1.9.2rc2"],
    &["1.9.2"],
    &["1.18rc1"],
    &["1.18", "1.18.0"],
    &["1.20rc1"],
    &["1.20", "1.20.0"],
    &["1.21"],
    &["1.21alpha1"],
    &["1.21beta1"],
    &["1.21beta2"],
    &["1.21rc1"],
    &["1.21rc2"],
    &["1.21rc10"],
    &["1.21.0"],
    &["1.21.1"],
    &["1.21.10"],
    &["1.22"],
    &["1.22rc1"],
    &["1.22.0"],
    &["1.99999999999"],
    &["1.100000000000"],
    &["2", "2.0", "2.0.0"],
];

fn expected(x: usize, y: usize) -> Ordering {
    x.cmp(&y)
}

#[test]
fn compare_should_order_the_whole_corpus_consistently() {
    for (i, lhs_group) in ASCENDING.iter().enumerate() {
        for (j, rhs_group) in ASCENDING.iter().enumerate() {
            for lhs in lhs_group.iter() {
                for rhs in rhs_group.iter() {
                    assert_eq!(
                        expected(i, j),
                        compare(lhs, rhs),
                        "compare(\"{lhs}\", \"{rhs}\")"
                    );
                }
            }
        }
    }
}

#[test]
fn compare_should_be_antisymmetric() {
    let all: Vec<&str> = ASCENDING.iter().flat_map(|g| g.iter().copied()).collect();

    for x in &all {
        for y in &all {
            assert_eq!(compare(x, y), compare(y, x).reverse(), "{x} vs {y}");
        }
    }
}

#[test]
fn compare_should_be_transitive() {
    let all: Vec<&str> = ASCENDING.iter().flat_map(|g| g.iter().copied()).collect();

    for x in &all {
        for y in &all {
            for z in &all {
                if compare(x, y).is_le() && compare(y, z).is_le() {
                    assert!(compare(x, z).is_le(), "{x} <= {y} <= {z}");
                }
            }
        }
    }
}

#[test]
fn compare_should_agree_with_the_prefixed_comparison() {
    let all: Vec<&str> = ASCENDING
        .iter()
        .flat_map(|g| g.iter().copied())
        .filter(|v| is_valid(v))
        .collect();

    for x in &all {
        for y in &all {
            assert_eq!(
                compare(x, y),
                toolchain::compare(&format!("go{x}"), &format!("go{y}-custom")),
                "{x} vs {y}"
            );
        }
    }
}

#[test]
fn parse_should_canonicalise_bare_major_and_legacy_minor_versions() {
    assert_eq!(parse("1").unwrap(), parse("1.0.0").unwrap());
    assert_eq!(parse("1.20").unwrap(), parse("1.20.0").unwrap());
    assert_ne!(parse("1.21").unwrap(), parse("1.21.0").unwrap());
}

#[test]
fn parse_should_reject_leading_zeros() {
    assert!(parse("01.2").is_err());
    assert!(parse("1.02").is_err());
}

#[test]
fn max_should_return_its_first_argument_for_equal_versions() {
    for group in ASCENDING {
        for x in group.iter() {
            assert!(std::ptr::eq(*x, max(x, x)));
        }
        if let [first, second, ..] = group {
            assert_eq!(*first, max(first, second));
            assert_eq!(*second, max(second, first));
        }
    }
}

#[test]
fn toolchain_lang_should_project_to_the_language_version() {
    assert_eq!(Some("go1.21".into()), toolchain::lang("go1.21.3"));
    assert_eq!(Some("go1".into()), toolchain::lang("go1"));
}

#[test]
fn decimal_helpers_should_not_depend_on_a_fixed_width() {
    assert_eq!(Ordering::Less, compare_decimal("9", "10"));
    assert_eq!("99", decrement_decimal("100"));
    assert_eq!("0", decrement_decimal("1"));
    assert_eq!("", decrement_decimal("0"));
    assert_eq!(
        "18446744073709551615",
        decrement_decimal("18446744073709551616")
    );
}
