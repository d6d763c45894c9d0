//! Tests for keyword selection: declaration order, operands, real-world
//! rule sets.

use cldr_plurals::{FixedDecimal, PluralRules};

#[test]
fn rules_are_tested_in_declaration_order() {
    let rules = PluralRules::parse("one: n is 1; few: n in 2..4").unwrap();
    assert_eq!(rules.select(1.0), "one");
    assert_eq!(rules.select(2.0), "few");
    assert_eq!(rules.select(4.0), "few");
    assert_eq!(rules.select(5.0), "other");
}

#[test]
fn overlapping_rules_pick_the_earlier_declaration() {
    let rules = PluralRules::parse("one: n in 1..5; few: n in 2..4").unwrap();
    // 3 satisfies both; declaration order decides, not specificity
    assert_eq!(rules.select(3.0), "one");
}

#[test]
fn modulus_with_negation() {
    let rules =
        PluralRules::parse("few: n mod 10 in 2..4 and n mod 100 not in 12..14").unwrap();
    assert_eq!(rules.select(102.0), "few");
    assert_eq!(rules.select(112.0), "other");
}

#[test]
fn j_operand_requires_no_visible_fraction_digits() {
    let rules = PluralRules::parse("one: j is 1").unwrap();
    assert_eq!(rules.select_with(1.0, 0, 0), "one");
    assert_eq!(rules.select_with(1.0, 1, 0), "other");
}

#[test]
fn visible_digits_change_the_category() {
    let rules = PluralRules::parse("one: v is 0 and i is 1").unwrap();
    assert_eq!(rules.select_with(1.0, 0, 0), "one");
    // "1.0" has one visible fraction digit
    assert_eq!(rules.select_with(1.0, 1, 0), "other");
}

#[test]
fn nan_and_infinity_select_other() {
    let rules = PluralRules::parse("one: n is 1; few: n in 2..4").unwrap();
    assert_eq!(rules.select(f64::NAN), "other");
    assert_eq!(rules.select(f64::INFINITY), "other");
    assert_eq!(rules.select(f64::NEG_INFINITY), "other");
}

#[test]
fn select_fixed_matches_select_with() {
    let rules = PluralRules::parse("many: f in 10..20").unwrap();
    let number = FixedDecimal::from_parts(3.14, 2, 14);
    assert_eq!(rules.select_fixed(&number), "many");
    assert_eq!(rules.select_with(3.14, 2, 14), "many");
    assert_eq!(rules.select_with(3.5, 1, 5), "other");
}

#[test]
fn russian_cardinal_rules() {
    let rules = PluralRules::parse(
        "one: n mod 10 is 1 and n mod 100 is not 11; \
         few: n mod 10 in 2..4 and n mod 100 not in 12..14; \
         many: n mod 10 is 0 or n mod 10 in 5..9 or n mod 100 in 11..14",
    )
    .unwrap();
    assert_eq!(rules.select(1.0), "one");
    assert_eq!(rules.select(2.0), "few");
    assert_eq!(rules.select(5.0), "many");
    assert_eq!(rules.select(11.0), "many");
    assert_eq!(rules.select(21.0), "one");
    assert_eq!(rules.select(22.0), "few");
    assert_eq!(rules.select(25.0), "many");
    assert_eq!(rules.select(100.0), "many");
    assert_eq!(rules.select(101.0), "one");
    assert_eq!(rules.select(111.0), "many");
}

#[test]
fn arabic_style_rules_use_all_keywords() {
    let rules = PluralRules::parse(
        "zero: n is 0; one: n is 1; two: n is 2; \
         few: n mod 100 in 3..10; many: n mod 100 in 11..99",
    )
    .unwrap();
    assert_eq!(rules.select(0.0), "zero");
    assert_eq!(rules.select(1.0), "one");
    assert_eq!(rules.select(2.0), "two");
    assert_eq!(rules.select(3.0), "few");
    assert_eq!(rules.select(103.0), "few");
    assert_eq!(rules.select(11.0), "many");
    assert_eq!(rules.select(111.0), "many");
    assert_eq!(rules.select(100.0), "other");
    assert_eq!(
        rules.keywords().collect::<Vec<_>>(),
        vec!["zero", "one", "two", "few", "many", "other"]
    );
}

#[test]
fn fractional_values_against_integer_relations() {
    let rules = PluralRules::parse("one: n is 1").unwrap();
    // the guessed operands for 1.5 make n non-integral
    assert_eq!(rules.select(1.5), "other");
    assert_eq!(rules.select(1.0), "one");
}
