//! The public plural-rules API.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::LazyLock;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::operands::FixedDecimal;
use crate::parser::{ParseError, parse_rule_chain};
use crate::rules::{Rule, RuleList};

pub const KEYWORD_ZERO: &str = "zero";
pub const KEYWORD_ONE: &str = "one";
pub const KEYWORD_TWO: &str = "two";
pub const KEYWORD_FEW: &str = "few";
pub const KEYWORD_MANY: &str = "many";
pub const KEYWORD_OTHER: &str = "other";

/// Probe cap when enumerating samples for an unbounded keyword.
const SAMPLE_CAP: usize = 20;

/// Whether a sample query concerns integer or decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleType {
    Integer,
    Decimal,
}

impl Display for SampleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            SampleType::Integer => "integer",
            SampleType::Decimal => "decimal",
        })
    }
}

/// Classification of a keyword's match set, used by message tooling to flag
/// redundant explicit selectors such as `[=1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordStatus {
    /// The keyword is not part of this rule set.
    Invalid,
    /// Bounded, and every matching value is covered by the caller's explicit
    /// values (after subtracting the offset).
    Suppressed,
    /// Exactly one value matches, before considering explicit values.
    Unique,
    /// Finitely many values match.
    Bounded,
    /// Infinitely many values match.
    Unbounded,
}

/// A compiled set of plural rules for one locale.
///
/// Built once from a rule description, then shared freely: selection and all
/// queries are pure functions over immutable data, safe for concurrent use.
///
/// # Example
///
/// ```
/// use cldr_plurals::PluralRules;
///
/// let rules = PluralRules::parse("one: n is 1; few: n in 2..4").unwrap();
/// assert_eq!(rules.select(1.0), "one");
/// assert_eq!(rules.select(3.0), "few");
/// assert_eq!(rules.select(5.0), "other");
/// ```
#[derive(Debug, Clone)]
pub struct PluralRules {
    rules: RuleList,
}

static DEFAULT_RULES: LazyLock<PluralRules> = LazyLock::new(|| PluralRules {
    rules: RuleList { rules: vec![Rule::fallback()], has_explicit_bounds: false },
});

impl PluralRules {
    /// Compiles a rule description.
    ///
    /// An empty or whitespace-only description yields the default rules
    /// (everything is `other`). Malformed input fails with a categorized
    /// [`ParseError`]; no partially constructed value is ever produced.
    pub fn parse(description: &str) -> Result<PluralRules, ParseError> {
        if description.trim().is_empty() {
            return Ok(Self::default_rules().clone());
        }
        Ok(PluralRules { rules: parse_rule_chain(description)? })
    }

    /// The shared rule set with the single `other` keyword.
    pub fn default_rules() -> &'static PluralRules {
        &DEFAULT_RULES
    }

    /// Selects a keyword for a value, guessing its visible fraction digits.
    ///
    /// Formatting pipelines that track the displayed digit count must use
    /// [`PluralRules::select_with`] instead; the guess is not authoritative.
    pub fn select(&self, value: f64) -> &str {
        self.select_fixed(&FixedDecimal::from(value))
    }

    /// Selects a keyword given exact operand information: the value, the
    /// visible fraction digit count, and those digits read as an integer.
    pub fn select_with(&self, value: f64, visible_digits: u32, fraction_digits: u64) -> &str {
        self.select_fixed(&FixedDecimal::from_parts(value, visible_digits, fraction_digits))
    }

    /// Selects a keyword for an already-built operand set.
    ///
    /// Total over the numeric domain: NaN and infinities are `other` without
    /// any constraint being evaluated.
    pub fn select_fixed(&self, number: &FixedDecimal) -> &str {
        if number.is_nan() || number.is_infinite() {
            return KEYWORD_OTHER;
        }
        self.rules.select(number)
    }

    /// Keywords in evaluation order; always ends with `other`.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.rules.keywords()
    }

    /// Whether only finitely many values of `kind` select `keyword`.
    pub fn is_limited(&self, keyword: &str, kind: SampleType) -> bool {
        self.rules.rule(keyword).is_some_and(|rule| rule.is_limited(kind))
    }

    /// Example values that select `keyword`, or `None` for an unknown keyword
    /// (and for rule sets without declared samples where probing finds
    /// nothing).
    ///
    /// Declared sample ranges are materialized point by point with integer
    /// shifted-value arithmetic. Without declarations, candidates 0..200
    /// (integer) or 0.0..199.9 step 0.1 (decimal) are probed through
    /// selection, plus 1,000,000 to surface rules that only diverge at large
    /// magnitudes; unbounded keywords stop at 20 collected values.
    pub fn get_samples(&self, keyword: &str, kind: SampleType) -> Option<Vec<f64>> {
        let rule = self.rules.rule(keyword)?;
        if self.rules.has_explicit_bounds {
            let mut values = Vec::new();
            if let Some(samples) = rule.samples(kind) {
                for range in &samples.ranges {
                    let base = range.start.base_factor();
                    for shifted in range.start.shifted_value()..=range.end.shifted_value() {
                        values.push(shifted as f64 / base as f64);
                    }
                }
            }
            return Some(normalized(values));
        }

        let cap = if self.is_limited(keyword, kind) { usize::MAX } else { SAMPLE_CAP };
        let mut values = Vec::new();
        match kind {
            SampleType::Integer => {
                for candidate in 0..200u64 {
                    if !self.probe(keyword, &FixedDecimal::from(candidate), cap, &mut values) {
                        break;
                    }
                }
                self.probe(keyword, &FixedDecimal::from(1_000_000u64), cap, &mut values);
            }
            SampleType::Decimal => {
                for tenths in 0..2000u32 {
                    let candidate = FixedDecimal::with_visible_digits(f64::from(tenths) / 10.0, 1);
                    if !self.probe(keyword, &candidate, cap, &mut values) {
                        break;
                    }
                }
                self.probe(keyword, &FixedDecimal::with_visible_digits(1_000_000.0, 1), cap, &mut values);
            }
        }
        if values.is_empty() { None } else { Some(normalized(values)) }
    }

    /// Every value of `kind` that selects `keyword`, or `None` when the
    /// match set is unbounded (or the keyword unknown).
    pub fn get_all_keyword_values(&self, keyword: &str, kind: SampleType) -> Option<Vec<f64>> {
        if !self.is_limited(keyword, kind) {
            return None;
        }
        self.get_samples(keyword, kind)
    }

    /// The single value selecting `keyword`, if there is exactly one.
    pub fn get_unique_keyword_value(&self, keyword: &str) -> Option<f64> {
        let values = self.get_all_keyword_values(keyword, SampleType::Integer)?;
        match values.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }

    /// Classifies `keyword` against a caller's explicit values (each reduced
    /// by `offset` before comparison).
    pub fn get_keyword_status(
        &self,
        keyword: &str,
        offset: u32,
        explicit_values: &[f64],
        kind: SampleType,
    ) -> KeywordStatus {
        if self.rules.rule(keyword).is_none() {
            return KeywordStatus::Invalid;
        }
        let Some(values) = self.get_all_keyword_values(keyword, kind) else {
            return KeywordStatus::Unbounded;
        };
        let original_len = values.len();
        if original_len > explicit_values.len() {
            return if original_len == 1 { KeywordStatus::Unique } else { KeywordStatus::Bounded };
        }
        let mut remaining = values;
        for explicit in explicit_values {
            let uncovered = explicit - f64::from(offset);
            remaining.retain(|value| *value != uncovered);
        }
        if remaining.is_empty() {
            return KeywordStatus::Suppressed;
        }
        if original_len == 1 { KeywordStatus::Unique } else { KeywordStatus::Bounded }
    }

    fn probe(&self, keyword: &str, number: &FixedDecimal, cap: usize, values: &mut Vec<f64>) -> bool {
        if values.len() >= cap {
            return false;
        }
        if self.select_fixed(number) == keyword {
            values.push(number.value());
        }
        values.len() < cap
    }
}

fn normalized(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

impl Default for PluralRules {
    fn default() -> Self {
        Self::default_rules().clone()
    }
}

impl Display for PluralRules {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.rules.fmt(f)
    }
}

impl FromStr for PluralRules {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Equality of behavior: two rule sets are equal when their canonical
/// serialized forms are.
impl PartialEq for PluralRules {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

/// Serializes as the canonical rule description string.
impl Serialize for PluralRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes by parsing a rule description string.
impl<'de> Deserialize<'de> for PluralRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let description = String::deserialize(deserializer)?;
        PluralRules::parse(&description).map_err(D::Error::custom)
    }
}
