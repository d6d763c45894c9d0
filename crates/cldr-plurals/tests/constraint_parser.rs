//! Tests for the condition grammar: relations, negation, modulus, ranges.

use cldr_plurals::{ParseError, PluralRules};

// =============================================================================
// Accepted grammar
// =============================================================================

#[test]
fn equals_and_in_are_integers_only() {
    let rules = PluralRules::parse("one: n = 1; few: n in 2..4").unwrap();
    assert_eq!(rules.select(1.0), "one");
    assert_eq!(rules.select(3.0), "few");
    // non-integral values fail an integers-only relation
    assert_eq!(rules.select(2.5), "other");
}

#[test]
fn within_accepts_any_real_in_range() {
    let rules = PluralRules::parse("few: n within 2..4").unwrap();
    assert_eq!(rules.select(2.0), "few");
    assert_eq!(rules.select(2.5), "few");
    assert_eq!(rules.select(4.0), "few");
    assert_eq!(rules.select(4.5), "other");
}

#[test]
fn range_lists_are_unions() {
    let rules = PluralRules::parse("few: n in 2..4, 7, 9..10").unwrap();
    for matching in [2.0, 3.0, 4.0, 7.0, 9.0, 10.0] {
        assert_eq!(rules.select(matching), "few", "for {matching}");
    }
    for other in [1.0, 5.0, 6.0, 8.0, 11.0] {
        assert_eq!(rules.select(other), "other", "for {other}");
    }
}

#[test]
fn bang_equals_negates() {
    let rules = PluralRules::parse("many: n != 5").unwrap();
    assert_eq!(rules.select(4.0), "many");
    assert_eq!(rules.select(5.0), "other");
}

#[test]
fn not_in_negates_a_list() {
    let rules = PluralRules::parse("one: n not in 2..4").unwrap();
    assert_eq!(rules.select(1.0), "one");
    assert_eq!(rules.select(3.0), "other");
    assert_eq!(rules.select(5.0), "one");
}

#[test]
fn is_not_takes_a_single_value() {
    let rules = PluralRules::parse("one: n is not 5").unwrap();
    assert_eq!(rules.select(4.0), "one");
    assert_eq!(rules.select(5.0), "other");
}

#[test]
fn modulus_applies_before_the_range_test() {
    let rules = PluralRules::parse("few: n mod 10 in 2..4").unwrap();
    assert_eq!(rules.select(2.0), "few");
    assert_eq!(rules.select(102.0), "few");
    assert_eq!(rules.select(105.0), "other");
}

#[test]
fn percent_is_an_alias_for_mod() {
    let rules = PluralRules::parse("few: n % 10 = 2..4").unwrap();
    assert_eq!(rules.select(23.0), "few");
    assert_eq!(rules.select(25.0), "other");
}

#[test]
fn punctuation_needs_no_whitespace() {
    let rules = PluralRules::parse("one: n=1; few: n%10=2..4").unwrap();
    assert_eq!(rules.select(1.0), "one");
    assert_eq!(rules.select(32.0), "few");
}

#[test]
fn and_binds_tighter_than_or() {
    let rules =
        PluralRules::parse("many: n mod 10 is 0 or n mod 10 in 5..9 and n mod 100 not in 70..79")
            .unwrap();
    assert_eq!(rules.select(10.0), "many");
    assert_eq!(rules.select(15.0), "many");
    assert_eq!(rules.select(75.0), "other");
    // 70 satisfies the first alternative regardless of the second
    assert_eq!(rules.select(70.0), "many");
}

#[test]
fn bare_operand_is_no_restriction() {
    let rules = PluralRules::parse("one: n").unwrap();
    assert_eq!(rules.select(5.0), "one");
}

// =============================================================================
// Rejected grammar
// =============================================================================

#[test]
fn unknown_operand_is_rejected() {
    let err = PluralRules::parse("one: q is 1").unwrap_err();
    assert!(matches!(err, ParseError::UnknownOperand { .. }), "{err}");
}

#[test]
fn non_digit_value_is_rejected() {
    let err = PluralRules::parse("one: n mod ten in 1").unwrap_err();
    assert!(matches!(err, ParseError::MalformedValue { .. }), "{err}");
    let err = PluralRules::parse("one: n is x").unwrap_err();
    assert!(matches!(err, ParseError::MalformedValue { .. }), "{err}");
}

#[test]
fn bang_requires_equals() {
    let err = PluralRules::parse("one: n ! 5").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }), "{err}");
}

#[test]
fn is_not_rejects_ranges_and_lists() {
    let err = PluralRules::parse("one: n is not 2..4").unwrap_err();
    assert!(matches!(err, ParseError::IsNotWithList { .. }), "{err}");
    let err = PluralRules::parse("one: n is not 2, 4").unwrap_err();
    assert!(matches!(err, ParseError::IsNotWithList { .. }), "{err}");
}

#[test]
fn reversed_bounds_are_rejected() {
    let err = PluralRules::parse("few: n in 4..2").unwrap_err();
    assert!(matches!(err, ParseError::BoundsOutOfOrder { low: 4, high: 2, .. }), "{err}");
}

#[test]
fn bound_must_stay_below_modulus() {
    let err = PluralRules::parse("few: n mod 10 in 2..12").unwrap_err();
    assert!(
        matches!(err, ParseError::BoundExceedsModulus { bound: 12, modulus: 10, .. }),
        "{err}"
    );
}

#[test]
fn truncated_relation_is_rejected() {
    for description in ["one: n mod", "one: n in", "one: n in 1..", "one: n is 1 or"] {
        let err = PluralRules::parse(description).unwrap_err();
        assert!(matches!(err, ParseError::MissingToken { .. }), "{description}: {err}");
    }
}

#[test]
fn mistyped_keyword_gets_a_suggestion() {
    let err = PluralRules::parse("few: n withn 2..4").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("did you mean 'within'?"), "{message}");
}

#[test]
fn digits_from_any_script_carry_their_values() {
    // arabic-indic one
    let rules = PluralRules::parse("one: n is \u{661}").unwrap();
    assert_eq!(rules.select(1.0), "one");
    // fullwidth 2..4
    let rules = PluralRules::parse("few: n in \u{ff12}..\u{ff14}").unwrap();
    assert_eq!(rules.select(3.0), "few");
    assert_eq!(rules.select(5.0), "other");
    // devanagari 10 as a modulus
    let rules = PluralRules::parse("few: n mod \u{967}\u{966} in 2..4").unwrap();
    assert_eq!(rules.select(102.0), "few");
}

#[test]
fn number_like_characters_outside_digit_runs_are_rejected() {
    // circled one is numeric but not a decimal digit
    let err = PluralRules::parse("one: n is \u{2460}").unwrap_err();
    assert!(matches!(err, ParseError::MalformedValue { .. }), "{err}");
}
